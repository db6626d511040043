//! HTTP API Client
//!
//! All backend traffic goes through one `ApiClient`. It owns the auth
//! session, attaches the bearer token, unwraps the response envelope and
//! runs the single refresh-then-retry pass when a token expires.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::{AbortController, AbortSignal};

use crate::config::AppConfig;
use crate::models::{AuthData, RefreshRequest};
use crate::session::{AuthSession, SessionStore};

mod auth;
mod chat;
mod tasks;
mod trends;
mod users;

const REFRESH_PATH: &str = "/api/auth/refresh";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request was cancelled")]
    Aborted,
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("session expired, please sign in again")]
    Unauthorized,
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not signed in")]
    NoSession,
}

impl ApiError {
    /// True when the caller should drop the session and show the
    /// sign-in screen
    pub fn needs_login(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::NoSession)
    }
}

/// What the client does with a 401 on an authenticated request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Refresh the token once, then retry the original request once
    #[default]
    OnceOnUnauthorized,
    /// Surface `Unauthorized` immediately
    Never,
}

/// Cancels the in-flight requests it was handed to. Each screen makes
/// one and aborts it when the screen unmounts. The wrapper keeps the
/// handle `Send`, which view closures and cleanup hooks require; on
/// wasm everything stays on the one thread anyway.
#[derive(Clone)]
pub struct AbortHandle {
    controller: Option<SendWrapper<AbortController>>,
}

impl Default for AbortHandle {
    fn default() -> Self {
        AbortHandle::new()
    }
}

impl AbortHandle {
    pub fn new() -> Self {
        AbortHandle { controller: AbortController::new().ok().map(SendWrapper::new) }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Wrapper every endpoint puts around its payload
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    session: SessionStore,
    refresh_policy: RefreshPolicy,
    /// Current session; components watch this for the signed-in state
    pub auth: RwSignal<Option<AuthSession>>,
}

impl ApiClient {
    /// Picks up a previously saved session if one survives in storage
    pub fn new(config: AppConfig, session: SessionStore, refresh_policy: RefreshPolicy) -> Self {
        let auth = RwSignal::new(session.load_auth());
        ApiClient { config, session, refresh_policy, auth }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn signed_in(&self) -> bool {
        self.auth.get().is_some()
    }

    pub(crate) fn install_session(&self, data: &AuthData) {
        let session = AuthSession {
            token: data.token.clone(),
            refresh_token: data.refresh_token.clone(),
            user_id: data.user.id,
        };
        self.session.save_auth(&session);
        self.auth.set(Some(session));
    }

    pub fn clear_session(&self) {
        self.session.clear_auth();
        self.auth.set(None);
    }

    fn build(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&str>,
        abort: &AbortHandle,
    ) -> Result<Request, ApiError> {
        let mut builder = RequestBuilder::new(&self.config.endpoint(path)).method(method);
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        builder = builder.abort_signal(abort.signal().as_ref());
        let request = match body {
            Some(json) => builder.header("Content-Type", "application/json").body(json),
            None => builder.build(),
        };
        request.map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Sends one request. A 401 on an authenticated call triggers at
    /// most one refresh and one retry; a second 401 gives up.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
        authed: bool,
        abort: &AbortHandle,
    ) -> Result<Response, ApiError> {
        let token = if authed {
            let Some(session) = self.auth.get_untracked() else {
                return Err(ApiError::NoSession);
            };
            Some(session.token)
        } else {
            None
        };

        let request = self.build(method.clone(), path, token.as_deref(), body, abort)?;
        let response = request.send().await.map_err(classify)?;

        if !(authed && response.status() == 401) {
            return Ok(response);
        }

        match self.refresh_policy {
            RefreshPolicy::Never => Err(ApiError::Unauthorized),
            RefreshPolicy::OnceOnUnauthorized => {
                tracing::info!(path, "access token rejected, refreshing session");
                self.refresh_session(abort).await?;
                let token = self.auth.get_untracked().map(|s| s.token);
                let retry = self.build(method, path, token.as_deref(), body, abort)?;
                let response = retry.send().await.map_err(classify)?;
                if response.status() == 401 {
                    return Err(ApiError::Unauthorized);
                }
                Ok(response)
            }
        }
    }

    async fn refresh_session(&self, abort: &AbortHandle) -> Result<(), ApiError> {
        let Some(session) = self.auth.get_untracked() else {
            return Err(ApiError::Unauthorized);
        };
        let body = serde_json::to_string(&RefreshRequest { refresh_token: session.refresh_token })
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = self.build(Method::POST, REFRESH_PATH, None, Some(&body), abort)?;
        let response = request.send().await.map_err(classify)?;
        if !response.ok() {
            tracing::warn!(status = response.status(), "session refresh rejected");
            return Err(ApiError::Unauthorized);
        }
        let envelope: Envelope<AuthData> =
            response.json().await.map_err(|_| ApiError::Unauthorized)?;
        let Some(data) = envelope.data else {
            return Err(ApiError::Unauthorized);
        };
        self.install_session(&data);
        Ok(())
    }

    // Shapes the domain wrappers below are written in terms of

    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        abort: &AbortHandle,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(Method::GET, path, None, true, abort).await?;
        read_data(response).await
    }

    pub(crate) async fn send_data<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        abort: &AbortHandle,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let json = encode(body)?;
        let response = self.dispatch(method, path, Some(&json), true, abort).await?;
        read_data(response).await
    }

    pub(crate) async fn delete_unit(&self, path: &str, abort: &AbortHandle) -> Result<(), ApiError> {
        let response = self.dispatch(Method::DELETE, path, None, true, abort).await?;
        read_unit(response).await
    }

    pub(crate) async fn post_empty_unit(&self, path: &str, abort: &AbortHandle) -> Result<(), ApiError> {
        let response = self.dispatch(Method::POST, path, None, true, abort).await?;
        read_unit(response).await
    }

    pub(crate) async fn public_post<T, B>(
        &self,
        path: &str,
        body: &B,
        abort: &AbortHandle,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let json = encode(body)?;
        let response = self.dispatch(Method::POST, path, Some(&json), false, abort).await?;
        read_data(response).await
    }

    pub(crate) async fn public_post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        abort: &AbortHandle,
    ) -> Result<(), ApiError> {
        let json = encode(body)?;
        let response = self.dispatch(Method::POST, path, Some(&json), false, abort).await?;
        read_unit(response).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn classify(err: gloo_net::Error) -> ApiError {
    match &err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
        _ => ApiError::Network(err.to_string()),
    }
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !response.ok() {
        return Err(ApiError::Http { status, message: error_message(&response).await });
    }
    let envelope: Envelope<T> = response.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    match envelope.data {
        Some(data) => Ok(data),
        // A 2xx with no payload still carries the envelope fields
        None => {
            let detail = if envelope.message.is_empty() { envelope.status } else { envelope.message };
            Err(ApiError::Decode(format!("response envelope has no data ({detail})")))
        }
    }
}

async fn read_unit(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
            message: error_message(&response).await,
        });
    }
    Ok(())
}

async fn error_message(response: &Response) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("request failed with status {}", response.status()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_envelope_decodes_with_and_without_data() {
        let full: Envelope<Vec<i32>> = serde_json::from_str(
            r#"{"status":"success","message":"ok","data":[1,2,3]}"#,
        )
        .unwrap();
        assert_eq!(full.status, "success");
        assert_eq!(full.data, Some(vec![1, 2, 3]));

        let empty: Envelope<Vec<i32>> = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert_eq!(empty.data, None);
        assert!(empty.message.is_empty());
    }

    #[test]
    fn test_envelope_carries_typed_payloads() {
        let envelope: Envelope<User> = serde_json::from_str(
            r#"{
                "status": "success",
                "message": "",
                "data": {"id": 3, "username": "jdoe", "email": "jdoe@example.edu"}
            }"#,
        )
        .unwrap();
        assert_eq!(envelope.data.unwrap().username, "jdoe");
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(body.message.is_empty());
    }

    #[test]
    fn test_needs_login_only_for_auth_failures() {
        assert!(ApiError::Unauthorized.needs_login());
        assert!(ApiError::NoSession.needs_login());
        assert!(!ApiError::Http { status: 500, message: "boom".into() }.needs_login());
        assert!(!ApiError::Aborted.needs_login());
    }
}
