//! Dashboard Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::board::bucket_tasks;
use crate::components::{FocusTimer, TrendChart};
use crate::context::{AppContext, Screen};
use crate::models::{TaskStatus, TrendSeries};
use crate::session::SessionStore;
use crate::store::{store_set_tasks, use_app_store, AppStateStoreFields};

/// Chart widgets, status counts and the focus timer
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let session = expect_context::<SessionStore>();
    let store = use_app_store();

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || cleanup.abort());

    let (series, set_series) = signal::<Vec<TrendSeries>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let load_abort = abort.clone();
    Effect::new(move |_| {
        ctx.reload_trigger.get();
        let client = client.get_value();
        let abort = load_abort.clone();
        spawn_local(async move {
            // The counts row reads from the shared task list
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
                }
            }

            match client.all_trends(&abort).await {
                Ok(fetched) => set_series.set(fetched),
                Err(ApiError::Aborted) => return,
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                }
                Err(err) => {
                    tracing::warn!("trend fetch failed: {}", err);
                    set_error.set(Some(err.to_string()));
                }
            }
        });
    });

    let columns = Memo::new(move |_| bucket_tasks(&store.tasks().get()));
    let count = move |status: TaskStatus| columns.with(|board| board.count(status));

    view! {
        <main class="dashboard-screen">
            <h1 class="screen-title">"Dashboard"</h1>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"Dismiss"</button>
                </div>
            </Show>

            <div class="summary-row">
                {TaskStatus::ALL
                    .into_iter()
                    .map(|status| {
                        view! {
                            <div class="summary-card">
                                <span class="summary-count">{move || count(status)}</span>
                                <span class="summary-label">{status.label()}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard-grid">
                <For
                    each=move || series.get()
                    key=|series| series.kind
                    children=move |series: TrendSeries| view! { <TrendChart series=series /> }
                />
                <div class="dashboard-widget">
                    <FocusTimer session=session />
                </div>
            </div>
        </main>
    }
}
