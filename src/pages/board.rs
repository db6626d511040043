//! Kanban Board Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_dnd::{bind_global_mouseup, create_dnd_signals};

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::board::{bucket_tasks, drop_destination};
use crate::components::{BoardColumn, NewTaskForm, TaskEditor};
use crate::context::{AppContext, Screen};
use crate::models::{Task, TaskAttribute, TaskStatus};
use crate::store::{
    store_move_task, store_set_tasks, store_set_users, use_app_store, AppStateStoreFields,
};

/// Three status columns with drag-and-drop, a create form and the editor panel
#[component]
pub fn BoardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let store = use_app_store();

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || cleanup.abort());

    let (error, set_error) = signal::<Option<String>>(None);

    // Refetch whenever a mutation bumps the reload trigger
    let load_abort = abort.clone();
    Effect::new(move |_| {
        ctx.reload_trigger.get();
        let client = client.get_value();
        let abort = load_abort.clone();
        spawn_local(async move {
            match client.list_tasks(&abort).await {
                Ok(tasks) => store_set_tasks(&store, tasks),
                Err(ApiError::Aborted) => return,
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                    return;
                }
                Err(err) => {
                    tracing::warn!("task fetch failed: {}", err);
                    set_error.set(Some(err.to_string()));
                    return;
                }
            }
            match client.list_users(&abort).await {
                Ok(users) => store_set_users(&store, users),
                Err(ApiError::Aborted) => {}
                Err(err) => {
                    tracing::warn!("user fetch failed: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    });

    // Columns derive from the flat store list, which keeps board order
    // and table order consistent
    let columns = Memo::new(move |_| bucket_tasks(&store.tasks().get()));

    let (editing, set_editing) = signal(None::<Task>);
    let on_open = Callback::new(move |task: Task| set_editing.set(Some(task)));

    // Binds document-level mousemove and mouseup once for the screen
    let dnd = create_dnd_signals();
    let drop_abort = abort.clone();
    bind_global_mouseup(dnd, move |card, target| {
        let Some((status, before)) = drop_destination(&columns.get_untracked(), target) else {
            return;
        };
        if before == Some(card) {
            // Dropped onto the slot right above itself
            return;
        }
        store_move_task(&store, card, status, before);
        tracing::debug!(card, status = status.as_str(), "card dropped");
        let client = client.get_value();
        let abort = drop_abort.clone();
        spawn_local(async move {
            match client.set_task_attribute(card, &TaskAttribute::Status(status), &abort).await {
                // Refetch either way: confirm the optimistic move, or roll
                // it back if the backend rejected it
                Ok(_) => ctx.reload(),
                Err(ApiError::Aborted) => {}
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                }
                Err(err) => {
                    tracing::warn!("task move failed: {}", err);
                    set_error.set(Some(err.to_string()));
                    ctx.reload();
                }
            }
        });
    });

    view! {
        <main class="board-screen">
            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"Dismiss"</button>
                </div>
            </Show>
            <NewTaskForm abort=abort.clone() />
            <div class="board-columns">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let tasks = Signal::derive(move || columns.get().tasks(status).to_vec());
                        view! { <BoardColumn status=status tasks=tasks dnd=dnd on_open=on_open /> }
                    })
                    .collect_view()}
            </div>
            <TaskEditor editing=editing set_editing=set_editing abort=abort.clone() />
        </main>
    }
}
