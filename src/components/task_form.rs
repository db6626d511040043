//! New Task Form Component
//!
//! Quick-add form above the board: title, priority and a date range.
//! Everything else is edited in the task editor afterwards.

use chrono::{Duration, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::components::PrioritySelect;
use crate::context::AppContext;
use crate::models::{date_input_value, parse_date_input, NewTask, Priority, TaskStatus};
use crate::store::{store_upsert_task, use_app_store};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm(abort: AbortHandle) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = expect_context::<ApiClient>();
    let store = use_app_store();

    let today = Utc::now();
    let (title, set_title) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (start_value, set_start_value) = signal(date_input_value(today));
    let (end_value, set_end_value) = signal(date_input_value(today + Duration::days(7)));
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get().trim().to_string();
        if text.is_empty() {
            return;
        }
        let (start, end) = match (parse_date_input(&start_value.get()), parse_date_input(&end_value.get())) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                set_error.set(Some("Enter valid start and due dates".to_string()));
                return;
            }
        };
        if end < start {
            set_error.set(Some("The due date is before the start date".to_string()));
            return;
        }

        let payload = NewTask {
            title: text,
            description: String::new(),
            priority: priority.get(),
            status: TaskStatus::Todo,
            start_date: start,
            end_date: end,
            media: None,
            responsible: vec![],
        };
        let client = client.clone();
        let abort = abort.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match client.create_task(&payload, &abort).await {
                Ok(task) => {
                    store_upsert_task(&store, task);
                    set_title.set(String::new());
                    ctx.reload();
                }
                Err(ApiError::Aborted) => {}
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder="Add a task..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || start_value.get()
                    on:input=move |ev| set_start_value.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || end_value.get()
                    on:input=move |ev| set_end_value.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Add"</button>
            </div>

            <PrioritySelect current=priority on_change=move |p| set_priority.set(p) />

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </form>
    }
}
