//! Avatar Upload Component
//!
//! File picker that hands the selected image back as a data URL. The
//! caller decides when to persist it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::files::read_as_data_url;

/// Avatar preview with a picker and remove button
#[component]
pub fn AvatarUpload(
    #[prop(into)] current: Signal<Option<String>>,
    #[prop(into)] on_change: Callback<Option<String>>,
) -> impl IntoView {
    let (error, set_error) = signal::<Option<String>>(None);

    let pick = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(url) => {
                    set_error.set(None);
                    on_change.run(Some(url));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="avatar-upload">
            {move || match current.get() {
                Some(url) => view! { <img class="avatar-preview" src=url /> }.into_any(),
                None => view! { <div class="avatar-placeholder">"No photo"</div> }.into_any(),
            }}

            <input type="file" accept="image/*" on:change=pick />

            {move || current.get().map(|_| view! {
                <button
                    type="button"
                    class="remove-avatar-btn"
                    on:click=move |_| on_change.run(None)
                >
                    "Remove"
                </button>
            })}

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
