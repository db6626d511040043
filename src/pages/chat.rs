//! Chat Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::chat::{self, ChatError};
use crate::context::{AppContext, Screen};
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, PartialEq)]
enum ChatStatus {
    Connecting,
    Ready,
    Failed(String),
}

/// Hosts the embedded chat widget inbox
#[component]
pub fn ChatPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let store = use_app_store();

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || {
        chat::disconnect_chat();
        cleanup.abort();
    });

    let (status, set_status) = signal(ChatStatus::Connecting);

    // Init, token mint, sign-in and mount run once the screen is up.
    // The mount selector must exist in the DOM first, hence the Effect.
    let connect_abort = abort.clone();
    Effect::new(move |ran: Option<()>| {
        if ran.is_some() {
            return;
        }
        let client = client.get_value();
        let abort = connect_abort.clone();
        spawn_local(async move {
            let Some(user) = store.current_user().get_untracked() else {
                set_status.set(ChatStatus::Failed("Your profile has not loaded yet".into()));
                return;
            };
            if let Err(err) = chat::init_chat(client.config()).await {
                set_status.set(ChatStatus::Failed(err.to_string()));
                return;
            }
            let token = match client.chat_token(&abort).await {
                Ok(data) => data.token,
                Err(ApiError::Aborted) => return,
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                    return;
                }
                Err(err) => {
                    set_status.set(ChatStatus::Failed(err.to_string()));
                    return;
                }
            };
            if let Err(err) = chat::connect(&user, &token).await {
                tracing::warn!("chat connect failed: {}", err);
                set_status.set(ChatStatus::Failed(err.to_string()));
                return;
            }
            match chat::mount("#chat-inbox") {
                Ok(()) => {
                    tracing::info!(user = user.id, "chat inbox mounted");
                    set_status.set(ChatStatus::Ready);
                }
                Err(err) => set_status.set(ChatStatus::Failed(err.to_string())),
            }
        });
    });

    let support_email = client.get_value().config().support_email.clone();

    view! {
        <main class="chat-screen">
            <h1 class="screen-title">"Messages"</h1>

            {move || match status.get() {
                ChatStatus::Connecting => view! {
                    <p class="chat-status">"Connecting to chat..."</p>
                }
                .into_any(),
                ChatStatus::Ready => ().into_any(),
                ChatStatus::Failed(reason) => {
                    let sdk_missing = reason == ChatError::SdkMissing.to_string();
                    let support = support_email.clone();
                    view! {
                        <div class="chat-status chat-error">
                            <p>{reason}</p>
                            <Show when=move || sdk_missing>
                                <p>
                                    "If this keeps happening, contact "
                                    {support.clone()}
                                </p>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }}

            <div id="chat-inbox" class="chat-inbox"></div>
        </main>
    }
}
