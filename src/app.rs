//! StudyFlow Frontend App
//!
//! Root component: sets up the store, session, API client and screen
//! switching, then renders the active screen.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError, RefreshPolicy};
use crate::components::NavBar;
use crate::config::AppConfig;
use crate::context::{AppContext, Screen};
use crate::pages::{
    AuthPage, BoardPage, ChatPage, DashboardPage, ProfilePage, RecoverPage, TasksPage,
};
use crate::session::SessionStore;
use crate::store::{store_set_current_user, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new();
    let client = ApiClient::new(AppConfig::from_build_env(), session, RefreshPolicy::default());

    let store = AppStore::new(AppState::default());
    provide_context(store);
    provide_context(session);
    provide_context(client.clone());

    // A surviving stored session skips the sign-in screen
    let initial = if client.signed_in() { Screen::Board } else { Screen::Auth };
    let (screen, set_screen) = signal(initial);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((screen, set_screen), (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Kick signed-out visitors back to the sign-in screen
    let guard_client = client.clone();
    Effect::new(move |_| {
        if screen.get().requires_session() && !guard_client.signed_in() {
            ctx.goto(Screen::Auth);
        }
    });

    // Fetch the profile whenever a session opens; the nav bar and the
    // profile screen read it from the store
    let profile_client = StoredValue::new(client.clone());
    Effect::new(move |_| {
        let client = profile_client.get_value();
        if !client.signed_in() {
            store_set_current_user(&store, None);
            return;
        }
        spawn_local(async move {
            match client.current_user(&AbortHandle::new()).await {
                Ok(user) => store_set_current_user(&store, Some(user)),
                Err(ApiError::Aborted) => {}
                Err(err) if err.needs_login() => client.clear_session(),
                Err(err) => tracing::warn!("profile fetch failed: {}", err),
            }
        });
    });

    // Browser tab title follows the active screen
    Effect::new(move |_| {
        if let Some(document) = web_sys::window().and_then(|win| win.document()) {
            document.set_title(&format!("StudyFlow - {}", screen.get().title()));
        }
    });

    view! {
        <div class="app-shell">
            <Show when=move || screen.get().requires_session()>
                <NavBar />
            </Show>
            {move || match screen.get() {
                Screen::Auth => view! { <AuthPage /> }.into_any(),
                Screen::Recover => view! { <RecoverPage /> }.into_any(),
                Screen::Board => view! { <BoardPage /> }.into_any(),
                Screen::Tasks => view! { <TasksPage /> }.into_any(),
                Screen::Dashboard => view! { <DashboardPage /> }.into_any(),
                Screen::Chat => view! { <ChatPage /> }.into_any(),
                Screen::Profile => view! { <ProfilePage /> }.into_any(),
            }}
        </div>
    }
}
