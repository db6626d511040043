//! Task Table Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::components::{DeleteConfirmButton, ProgressBar, TaskEditor};
use crate::context::{AppContext, Screen};
use crate::models::{fmt_date, Task};
use crate::progress::task_progress;
use crate::sorting::{sort_tasks, SortColumn, TaskSort};
use crate::store::{
    store_remove_task, store_set_tasks, store_set_users, use_app_store, AppStateStoreFields,
};

/// Sortable table over all tasks; clicking a row opens the editor
#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let store = use_app_store();

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || cleanup.abort());

    let (error, set_error) = signal::<Option<String>>(None);

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

    let (sort, set_sort) = signal(TaskSort::default());
    let sorted = Memo::new(move |_| {
        let mut tasks = store.tasks().get();
        sort_tasks(&mut tasks, sort.get());
        tasks
    });

    let (editing, set_editing) = signal(None::<Task>);
    let row_abort = abort.clone();

    view! {
        <main class="tasks-screen">
            <h1 class="screen-title">"All Tasks"</h1>
            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"Dismiss"</button>
                </div>
            </Show>
            <table class="task-table">
                <thead>
                    <tr>
                        {SortColumn::ALL
                            .into_iter()
                            .map(|column| {
                                view! {
                                    <th
                                        class="sortable"
                                        on:click=move |_| set_sort.update(|s| *s = s.toggled(column))
                                    >
                                        {column.label()}
                                        {move || sort.get().indicator(column)}
                                    </th>
                                }
                            })
                            .collect_view()}
                        <th>"Progress"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || sorted.get()
                        key=|task| (task.id, task.updated_at)
                        children=move |task: Task| {
                            let opened = task.clone();
                            let percent = task_progress(&task);
                            let task_id = task.id;
                            let delete_abort = row_abort.clone();
                            let on_delete = move |()| {
                                let client = client.get_value();
                                let abort = delete_abort.clone();
                                spawn_local(async move {
                                    match client.delete_task(task_id, &abort).await {
                                        Ok(()) => {
                                            store_remove_task(&store, task_id);
                                            if editing.get_untracked().as_ref().map(|t| t.id) == Some(task_id) {
                                                set_editing.set(None);
                                            }
                                            ctx.reload();
                                        }
                                        Err(ApiError::Aborted) => {}
                                        Err(err) if err.needs_login() => {
                                            client.clear_session();
                                            ctx.goto(Screen::Auth);
                                        }
                                        Err(err) => {
                                            tracing::warn!("task delete failed: {}", err);
                                            set_error.set(Some(err.to_string()));
                                        }
                                    }
                                });
                            };
                            view! {
                                <tr
                                    class="task-row"
                                    on:click=move |_| set_editing.set(Some(opened.clone()))
                                >
                                    <td class="task-row-title">{task.title.clone()}</td>
                                    <td>
                                        <span class=format!("priority-badge {}", task.priority.as_str())>
                                            {task.priority.label()}
                                        </span>
                                    </td>
                                    <td>{task.status.label()}</td>
                                    <td>{fmt_date(task.start_date)}</td>
                                    <td>{fmt_date(task.end_date)}</td>
                                    <td class="task-row-progress">
                                        <ProgressBar percent=percent />
                                    </td>
                                    <td class="task-row-actions">
                                        <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || sorted.get().is_empty()>
                <p class="empty-hint">"Nothing here yet. Create a task on the board."</p>
            </Show>
            <TaskEditor editing=editing set_editing=set_editing abort=abort.clone() />
        </main>
    }
}
