//! Sign-In / Registration Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::context::{AppContext, Screen};
use crate::models::{LoginRequest, RegisterRequest};
use crate::store::{store_set_current_user, use_app_store};

/// Combined sign-in and registration card with a mode toggle
#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let store = use_app_store();

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || cleanup.abort());

    let (is_register, set_is_register) = signal(false);
    let (username, set_username) = signal(String::new());
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest { username: username.get(), password: password.get() };
        let registration = is_register.get().then(|| RegisterRequest {
            username: username.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            password: password.get(),
        });
        let client = client.get_value();
        let abort = abort.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);

            if let Some(request) = &registration {
                if let Err(err) = client.register(request, &abort).await {
                    if !matches!(err, ApiError::Aborted) {
                        set_error.set(Some(err.to_string()));
                    }
                    set_busy.set(false);
                    return;
                }
            }

            match client.login(&credentials, &abort).await {
                Ok(data) => {
                    store_set_current_user(&store, Some(data.user));
                    ctx.goto(Screen::Board);
                }
                Err(ApiError::Aborted) => {}
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <main class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">
                    {move || if is_register.get() { "Create Account" } else { "Welcome Back" }}
                </h1>
                <p class="auth-subtitle">
                    {move || if is_register.get() {
                        "Sign up to start planning your studies"
                    } else {
                        "Sign in to continue"
                    }}
                </p>

                <Show when=move || error.get().is_some()>
                    <div class="form-error">
                        <span>{move || error.get().unwrap_or_default()}</span>
                        <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"Dismiss"</button>
                    </div>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-input-group">
                        <label class="auth-label">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required=true
                        />
                    </div>

                    <Show when=move || is_register.get()>
                        <div class="auth-input-group">
                            <label class="auth-label">"First name"</label>
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="auth-input-group">
                            <label class="auth-label">"Last name"</label>
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="auth-input-group">
                            <label class="auth-label">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required=is_register.get()
                            />
                        </div>
                    </Show>

                    <div class="auth-input-group">
                        <label class="auth-label">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required=true
                            minlength="8"
                        />
                    </div>

                    <button type="submit" class="auth-submit" disabled=move || busy.get()>
                        {move || if is_register.get() { "Create Account" } else { "Sign In" }}
                    </button>
                </form>

                <div class="auth-footer">
                    <button
                        class="auth-link"
                        on:click=move |_| {
                            set_is_register.update(|v| *v = !*v);
                            set_error.set(None);
                        }
                    >
                        {move || if is_register.get() {
                            "Already have an account? Sign in"
                        } else {
                            "No account yet? Sign up"
                        }}
                    </button>
                    <button class="auth-link" on:click=move |_| ctx.goto(Screen::Recover)>
                        "Forgot your password?"
                    </button>
                </div>
            </div>
        </main>
    }
}
