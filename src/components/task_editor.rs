//! Task Editor Panel
//!
//! Side panel for editing a task field by field, with delete. Opens from
//! the board and the task table; each changed field goes out as its own
//! attribute update.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::components::{DeleteConfirmButton, PrioritySelect};
use crate::context::{AppContext, Screen};
use crate::files::read_as_data_url;
use crate::models::{date_input_value, parse_date_input, Priority, Task, TaskAttribute, TaskStatus};
use crate::store::{store_remove_task, store_upsert_task, use_app_store, AppStateStoreFields};

/// Status selector buttons, same shape as the priority selector
#[component]
fn StatusSelect(
    current: ReadSignal<TaskStatus>,
    on_change: impl Fn(TaskStatus) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-select">
            {TaskStatus::ALL.iter().map(|status| {
                let status = *status;
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Task editor side panel; renders nothing while no task is open
#[component]
pub fn TaskEditor(
    editing: ReadSignal<Option<Task>>,
    set_editing: WriteSignal<Option<Task>>,
    abort: AbortHandle,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    // Stored handles keep every handler below Copy, so the reactive view
    // closure can hand them out on each re-render
    let client = StoredValue::new(expect_context::<ApiClient>());
    let abort = StoredValue::new(abort);
    let store = use_app_store();

    let (title_value, set_title_value) = signal(String::new());
    let (description_value, set_description_value) = signal(String::new());
    let (priority_value, set_priority_value) = signal(Priority::default());
    let (status_value, set_status_value) = signal(TaskStatus::default());
    let (start_value, set_start_value) = signal(String::new());
    let (end_value, set_end_value) = signal(String::new());
    let (media_value, set_media_value) = signal::<Option<String>>(None);
    let (responsible_value, set_responsible_value) = signal(Vec::<i32>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    // Re-seed the fields only when a different task is opened, so a
    // background reload does not clobber edits in progress
    let (last_id, set_last_id) = signal::<Option<i32>>(None);
    Effect::new(move |_| {
        match editing.get() {
            Some(task) => {
                if last_id.get_untracked() == Some(task.id) {
                    return;
                }
                let task_id = task.id;
                set_last_id.set(Some(task_id));
                set_title_value.set(task.title);
                set_description_value.set(task.description);
                set_priority_value.set(task.priority);
                set_status_value.set(task.status);
                set_start_value.set(date_input_value(task.start_date));
                set_end_value.set(date_input_value(task.end_date));
                set_media_value.set(task.media);
                set_responsible_value.set(task.responsible);
                set_error.set(None);
                // The row copy may be stale, pull the backend's copy into
                // the store. The fields above keep what the user clicked on.
                let client = client.get_value();
                let abort = abort.get_value();
                spawn_local(async move {
                    match client.get_task(task_id, &abort).await {
                        Ok(fresh) => store_upsert_task(&store, fresh),
                        Err(ApiError::Aborted) => {}
                        Err(err) => tracing::debug!(task = task_id, error = %err, "task refresh failed"),
                    }
                });
            }
            None => set_last_id.set(None),
        }
    });

    let toggle_responsible = move |user_id: i32| {
        set_responsible_value.update(|ids| {
            match ids.iter().position(|id| *id == user_id) {
                Some(index) => {
                    ids.remove(index);
                }
                None => ids.push(user_id),
            }
        });
    };

    let pick_media = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(url) => {
                    set_media_value.set(Some(url));
                    set_error.set(None);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let save = move |_: web_sys::MouseEvent| {
        let Some(task) = editing.get_untracked() else { return };
        let text = title_value.get_untracked().trim().to_string();
        if text.is_empty() {
            set_error.set(Some("The title cannot be empty".to_string()));
            return;
        }
        let start = parse_date_input(&start_value.get_untracked());
        let end = parse_date_input(&end_value.get_untracked());
        let (Some(start), Some(end)) = (start, end) else {
            set_error.set(Some("Enter valid start and due dates".to_string()));
            return;
        };
        if end < start {
            set_error.set(Some("The due date is before the start date".to_string()));
            return;
        }

        // Only the fields that changed go out, one call per field. Dates
        // compare on the input's form so an untouched picker stays quiet.
        let description = description_value.get_untracked();
        let priority = priority_value.get_untracked();
        let status = status_value.get_untracked();
        let media = media_value.get_untracked();
        let responsible = responsible_value.get_untracked();
        let mut changes = Vec::new();
        if text != task.title {
            changes.push(TaskAttribute::Title(text));
        }
        if description != task.description {
            changes.push(TaskAttribute::Description(description));
        }
        if priority != task.priority {
            changes.push(TaskAttribute::Priority(priority));
        }
        if status != task.status {
            changes.push(TaskAttribute::Status(status));
        }
        if start_value.get_untracked() != date_input_value(task.start_date) {
            changes.push(TaskAttribute::StartDate(start));
        }
        if end_value.get_untracked() != date_input_value(task.end_date) {
            changes.push(TaskAttribute::EndDate(end));
        }
        if media != task.media {
            changes.push(TaskAttribute::Media(media));
        }
        if responsible != task.responsible {
            changes.push(TaskAttribute::Responsible(responsible));
        }
        if changes.is_empty() {
            set_editing.set(None);
            return;
        }

        let client = client.get_value();
        let abort = abort.get_value();
        spawn_local(async move {
            set_busy.set(true);
            for attribute in changes {
                match client.set_task_attribute(task.id, &attribute, &abort).await {
                    Ok(updated) => store_upsert_task(&store, updated),
                    Err(ApiError::Aborted) => return,
                    Err(err) if err.needs_login() => {
                        client.clear_session();
                        ctx.goto(Screen::Auth);
                        return;
                    }
                    Err(err) => {
                        // Fields before this one may have landed, so sync
                        // back up with the backend and let the user retry
                        set_error.set(Some(err.to_string()));
                        set_busy.set(false);
                        ctx.reload();
                        return;
                    }
                }
            }
            set_error.set(None);
            set_busy.set(false);
            set_editing.set(None);
            ctx.reload();
        });
    };

    let delete = move |()| {
        let Some(task) = editing.get_untracked() else { return };
        let client = client.get_value();
        let abort = abort.get_value();
        spawn_local(async move {
            match client.delete_task(task.id, &abort).await {
                Ok(()) => {
                    store_remove_task(&store, task.id);
                    set_editing.set(None);
                    ctx.reload();
                }
                Err(ApiError::Aborted) => {}
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        {move || match editing.get() {
            Some(task) => {
                view! {
                    <div class="task-editor-panel">
                        <div class="task-editor-header">
                            <span class="task-editor-title">"Edit Task"</span>
                            <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
                            <button class="close-btn" on:click=move |_| set_editing.set(None)>"×"</button>
                        </div>

                        <Show when=move || error.get().is_some()>
                            <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                        </Show>

                        <div class="editor-section">
                            <label class="editor-label">"Title"</label>
                            <input
                                type="text"
                                class="editor-input"
                                prop:value=move || title_value.get()
                                on:input=move |ev| set_title_value.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="editor-section">
                            <label class="editor-label">"Description"</label>
                            <textarea
                                class="editor-textarea"
                                prop:value=move || description_value.get()
                                on:input=move |ev| set_description_value.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="editor-section">
                            <label class="editor-label">"Priority"</label>
                            <PrioritySelect current=priority_value on_change=move |p| set_priority_value.set(p) />
                        </div>

                        <div class="editor-section">
                            <label class="editor-label">"Status"</label>
                            <StatusSelect current=status_value on_change=move |s| set_status_value.set(s) />
                        </div>

                        <div class="editor-section">
                            <label class="editor-label">"Dates"</label>
                            <div class="editor-date-row">
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
                            </div>
                        </div>

                        <div class="editor-section">
                            <label class="editor-label">"Attachment"</label>
                            {move || media_value.get().map(|url| view! {
                                <div class="editor-attachment">
                                    <img class="editor-attachment-preview" src=url />
                                    <button
                                        type="button"
                                        class="remove-attachment-btn"
                                        on:click=move |_| set_media_value.set(None)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            })}
                            <input type="file" accept="image/*" on:change=pick_media />
                        </div>

                        <div class="editor-section">
                            <label class="editor-label">"Responsible"</label>
                            <div class="responsible-list">
                                <For
                                    each=move || store.users().get()
                                    key=|user| user.id
                                    children=move |user| {
                                        let user_id = user.id;
                                        let checked = move || responsible_value.get().contains(&user_id);
                                        view! {
                                            <label class="responsible-option">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=checked
                                                    on:change=move |_| toggle_responsible(user_id)
                                                />
                                                <span>{user.display_name()}</span>
                                            </label>
                                        }
                                    }
                                />
                            </div>
                        </div>

                        <button class="save-btn" disabled=move || busy.get() on:click=save>
                            "Save"
                        </button>

                        <span class="task-editor-id">{format!("#{}", task.id)}</span>
                    </div>
                }.into_any()
            }
            None => view! { <div></div> }.into_any(),
        }}
    }
}
