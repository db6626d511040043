//! Chat Widget Bindings
//!
//! Frontend bindings to the embedded chat vendor SDK. The vendor script
//! is loaded from index.html and exposes itself as `window.ChatKit`;
//! every wrapper checks it actually did before calling in.

use js_sys::Reflect;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::models::User;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "ChatKit"], catch)]
    async fn init(options: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "ChatKit"], js_name = connectUser, catch)]
    async fn connect_user(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "ChatKit"], js_name = mountInbox, catch)]
    fn mount_inbox(selector: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "ChatKit"], catch)]
    fn disconnect() -> Result<(), JsValue>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("chat widget script has not loaded")]
    SdkMissing,
    #[error("chat setup failed: {0}")]
    Init(String),
    #[error("chat sign-in failed: {0}")]
    Connect(String),
    #[error("chat inbox failed to mount: {0}")]
    Mount(String),
}

#[derive(Serialize)]
struct InitOptions<'a> {
    #[serde(rename = "appId")]
    app_id: &'a str,
    #[serde(rename = "socketUrl")]
    socket_url: &'a str,
}

#[derive(Serialize)]
struct ConnectOptions<'a> {
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(rename = "authToken")]
    auth_token: &'a str,
    name: String,
    avatar: Option<&'a str>,
}

/// True once the vendor script has registered its global
pub fn sdk_available() -> bool {
    web_sys::window()
        .map(|win| Reflect::has(&win, &JsValue::from_str("ChatKit")).unwrap_or(false))
        .unwrap_or(false)
}

pub async fn init_chat(config: &AppConfig) -> Result<(), ChatError> {
    if !sdk_available() {
        return Err(ChatError::SdkMissing);
    }
    let options = InitOptions { app_id: &config.chat_app_id, socket_url: &config.socket_url };
    let js_options = serde_wasm_bindgen::to_value(&options).map_err(|e| ChatError::Init(e.to_string()))?;
    init(js_options).await.map_err(|e| ChatError::Init(js_message(e)))
}

/// Signs the user into the widget with the short-lived token minted by
/// our backend
pub async fn connect(user: &User, chat_token: &str) -> Result<(), ChatError> {
    if !sdk_available() {
        return Err(ChatError::SdkMissing);
    }
    let options = ConnectOptions {
        user_id: user.id.to_string(),
        auth_token: chat_token,
        name: user.display_name(),
        avatar: user.image.as_deref(),
    };
    let js_options = serde_wasm_bindgen::to_value(&options).map_err(|e| ChatError::Connect(e.to_string()))?;
    connect_user(js_options).await.map_err(|e| ChatError::Connect(js_message(e)))?;
    Ok(())
}

pub fn mount(selector: &str) -> Result<(), ChatError> {
    if !sdk_available() {
        return Err(ChatError::SdkMissing);
    }
    mount_inbox(selector).map_err(|e| ChatError::Mount(js_message(e)))
}

/// Best effort, called on leaving the chat screen
pub fn disconnect_chat() {
    if sdk_available() {
        let _ = disconnect();
    }
}

fn js_message(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
