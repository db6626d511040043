//! Navigation Bar Component
//!
//! Top bar with the screen tabs, the signed-in user and sign out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient};
use crate::context::{AppContext, Screen};
use crate::store::{store_set_current_user, store_set_tasks, use_app_store, AppStateStoreFields};

/// Top navigation bar, shown on every signed-in screen
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let store = use_app_store();
    let docs_url = client.with_value(|c| c.config().docs_url.clone());

    let user_name = move || {
        store.current_user().get().map(|user| user.display_name()).unwrap_or_default()
    };
    let avatar = move || store.current_user().get().and_then(|user| user.image);

    let sign_out = move |_| {
        let client = client.get_value();
        spawn_local(async move {
            // The session is dropped locally either way
            if let Err(e) = client.logout(&AbortHandle::new()).await {
                tracing::warn!("logout request failed: {}", e);
            }
            store_set_tasks(&store, vec![]);
            store_set_current_user(&store, None);
            ctx.goto(Screen::Auth);
        });
    };

    view! {
        <header class="nav-bar">
            <span class="nav-brand">"StudyFlow"</span>

            <nav class="nav-screens">
                {Screen::NAV.iter().map(|screen| {
                    let screen = *screen;
                    let is_active = move || ctx.screen.get() == screen;
                    view! {
                        <button
                            class=move || if is_active() { "nav-btn active" } else { "nav-btn" }
                            on:click=move |_| ctx.goto(screen)
                        >
                            {screen.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="nav-user">
                <a class="nav-help" href=docs_url target="_blank" rel="noopener">"Help"</a>
                {move || avatar().map(|url| view! { <img class="nav-avatar" src=url /> })}
                <span class="nav-username">{user_name}</span>
                <button class="sign-out-btn" on:click=sign_out>"Sign out"</button>
            </div>
        </header>
    }
}
