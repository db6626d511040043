//! Profile Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{AbortHandle, ApiClient, ApiError};
use crate::components::{AvatarUpload, DeleteConfirmButton};
use crate::context::{AppContext, Screen};
use crate::models::UserUpdate;
use crate::store::{store_set_current_user, store_set_tasks, use_app_store, AppStateStoreFields};

/// Edits the signed-in user's name, email, contact and avatar
#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = StoredValue::new(expect_context::<ApiClient>());
    let store = use_app_store();

    let abort = AbortHandle::new();
    let cleanup = abort.clone();
    on_cleanup(move || cleanup.abort());

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    let (image, set_image) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saved, set_saved) = signal(false);
    let (busy, set_busy) = signal(false);

    // Re-seed only when a different profile shows up, so a background
    // refresh does not clobber edits in progress
    let (last_id, set_last_id) = signal::<Option<i32>>(None);
    Effect::new(move |_| {
        match store.current_user().get() {
            Some(user) => {
                if last_id.get_untracked() == Some(user.id) {
                    return;
                }
                set_last_id.set(Some(user.id));
                set_first_name.set(user.first_name);
                set_last_name.set(user.last_name);
                set_email.set(user.email);
                set_contact.set(user.contact.unwrap_or_default());
                set_image.set(user.image);
            }
            None => set_last_id.set(None),
        }
    });

    // Pull the record behind the form fresh on entry; the fields above
    // keep whatever the store held when this screen opened
    let refresh_abort = abort.clone();
    Effect::new(move |_| {
        let Some(user) = store.current_user().get_untracked() else { return };
        let client = client.get_value();
        let abort = refresh_abort.clone();
        spawn_local(async move {
            match client.get_user(user.id, &abort).await {
                Ok(fresh) => store_set_current_user(&store, Some(fresh)),
                Err(ApiError::Aborted) => {}
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                }
                Err(err) => tracing::debug!("profile refresh failed: {}", err),
            }
        });
    });

    let save_abort = abort.clone();
    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = store.current_user().get_untracked() else { return };
        let address = email.get_untracked().trim().to_string();
        if address.is_empty() || !address.contains('@') {
            set_error.set(Some("Enter a valid email address".to_string()));
            return;
        }
        let update = UserUpdate {
            first_name: Some(first_name.get_untracked()),
            last_name: Some(last_name.get_untracked()),
            email: Some(address),
            contact: Some(contact.get_untracked()),
            image: image.get_untracked(),
        };
        let client = client.get_value();
        let abort = save_abort.clone();
        spawn_local(async move {
            set_busy.set(true);
            set_error.set(None);
            set_saved.set(false);
            match client.update_profile(user.id, &update, &abort).await {
                Ok(updated) => {
                    store_set_current_user(&store, Some(updated));
                    set_saved.set(true);
                }
                Err(ApiError::Aborted) => {}
                Err(err) if err.needs_login() => {
                    client.clear_session();
                    ctx.goto(Screen::Auth);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    let sign_out = move |_: web_sys::MouseEvent| {
        let client = client.get_value();
        spawn_local(async move {
            // The session is dropped locally either way
            if let Err(err) = client.logout(&AbortHandle::new()).await {
                tracing::warn!("logout request failed: {}", err);
            }
            store_set_tasks(&store, vec![]);
            store_set_current_user(&store, None);
            ctx.goto(Screen::Auth);
        });
    };

    let delete_abort = abort.clone();
    let delete_account = move |()| {
        let Some(user) = store.current_user().get_untracked() else { return };
        let client = client.get_value();
        let abort = delete_abort.clone();
        spawn_local(async move {
            match client.delete_account(user.id, &abort).await {
                Ok(()) => {
                    client.clear_session();
                    store_set_tasks(&store, vec![]);
                    store_set_current_user(&store, None);
                    ctx.goto(Screen::Auth);
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
        <main class="profile-screen">
            <h1 class="screen-title">"Your Profile"</h1>

            <Show when=move || error.get().is_some()>
                <div class="error-banner">
                    <span>{move || error.get().unwrap_or_default()}</span>
                    <button class="dismiss-btn" on:click=move |_| set_error.set(None)>"Dismiss"</button>
                </div>
            </Show>
            <Show when=move || saved.get()>
                <div class="form-notice">"Profile saved"</div>
            </Show>

            <form class="profile-form" on:submit=save>
                <AvatarUpload
                    current=image
                    on_change=move |url| {
                        set_image.set(url);
                        set_saved.set(false);
                    }
                />

                <div class="form-row">
                    <div class="form-field">
                        <label>"First name"</label>
                        <input
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label>"Last name"</label>
                        <input
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-field">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        required=true
                    />
                </div>

                <div class="form-field">
                    <label>"Contact"</label>
                    <input
                        type="text"
                        placeholder="Phone or messenger handle"
                        prop:value=move || contact.get()
                        on:input=move |ev| set_contact.set(event_target_value(&ev))
                    />
                </div>

                <button type="submit" class="profile-save" disabled=move || busy.get()>
                    "Save changes"
                </button>
            </form>

            <div class="account-section">
                <h2 class="account-title">"Account"</h2>
                <button type="button" class="signout-btn" on:click=sign_out>
                    "Sign out"
                </button>
                <div class="account-danger-row">
                    <span>"Remove this account permanently"</span>
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=delete_account />
                </div>
            </div>
        </main>
    }
}
