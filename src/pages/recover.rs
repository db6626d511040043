//! Password Recovery Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::context::{AppContext, Screen};
use crate::models::{RecoverRequest, ResetPasswordRequest};

/// Two steps: request a recovery code by email, then trade the code
/// for a new password.
#[component]
pub fn RecoverPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || cleanup.abort());

    // false while waiting for the email step, true once a code was sent
    let (code_sent, set_code_sent) = signal(false);
    let (email, set_email) = signal(String::new());
    let (code, set_code) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (notice, set_notice) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let request_abort = abort.clone();
    let on_request = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = RecoverRequest { email: email.get() };
        let client = client.get_value();
        let abort = request_abort.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match client.request_recovery(&request, &abort).await {
                Ok(()) => {
                    set_code_sent.set(true);
                    set_notice.set(Some("Check your inbox for a recovery code".into()));
                }
                Err(ApiError::Aborted) => {}
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    let reset_abort = abort.clone();
    let on_reset = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = ResetPasswordRequest { code: code.get(), password: password.get() };
        let client = client.get_value();
        let abort = reset_abort.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            match client.reset_password(&request, &abort).await {
                Ok(()) => ctx.goto(Screen::Auth),
                Err(ApiError::Aborted) => {}
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <main class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">"Reset Password"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="form-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                        <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"Dismiss"</button>
                    </div>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <div class="form-notice">{move || notice.get().unwrap_or_default()}</div>
                </Show>

                <Show
                    when=move || code_sent.get()
                    fallback=move || {
                        let on_request = on_request.clone();
                        view! {
                            <form class="auth-form" on:submit=on_request>
                                <div class="auth-input-group">
                                    <label class="auth-label">"Email"</label>
                                    <input
                                        type="email"
                                        prop:value=move || email.get()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        required=true
                                    />
                                </div>
                                <button type="submit" class="auth-submit" disabled=move || busy.get()>
                                    "Send recovery code"
                                </button>
                            </form>
                        }
                    }
                >
                    {
                        let on_reset = on_reset.clone();
                        view! {
                            <form class="auth-form" on:submit=on_reset>
                                <div class="auth-input-group">
                                    <label class="auth-label">"Recovery code"</label>
                                    <input
                                        type="text"
                                        prop:value=move || code.get()
                                        on:input=move |ev| set_code.set(event_target_value(&ev))
                                        required=true
                                    />
                                </div>
                                <div class="auth-input-group">
                                    <label class="auth-label">"New password"</label>
                                    <input
                                        type="password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        required=true
                                        minlength="8"
                                    />
                                </div>
                                <button type="submit" class="auth-submit" disabled=move || busy.get()>
                                    "Set new password"
                                </button>
                            </form>
                        }
                    }
                </Show>

                <div class="auth-footer">
                    <button class="auth-link" on:click=move |_| ctx.goto(Screen::Auth)>
                        "Back to sign in"
                    </button>
                </div>
            </div>
        </main>
    }
}
