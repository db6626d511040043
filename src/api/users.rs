//! User endpoints

use gloo_net::http::Method;

use super::{AbortHandle, ApiClient, ApiError};
use crate::models::{RegisterRequest, User, UserUpdate};

impl ApiClient {
    /// Everyone a task can be assigned to
    pub async fn list_users(&self, abort: &AbortHandle) -> Result<Vec<User>, ApiError> {
        self.get_data("/api/users", abort).await
    }

    pub async fn get_user(&self, id: i32, abort: &AbortHandle) -> Result<User, ApiError> {
        self.get_data(&format!("/api/users/{id}"), abort).await
    }

    /// Creates an account; the caller signs in separately afterwards
    pub async fn register(&self, request: &RegisterRequest, abort: &AbortHandle) -> Result<User, ApiError> {
        self.public_post("/api/users", request, abort).await
    }

    pub async fn update_profile(
        &self,
        id: i32,
        update: &UserUpdate,
        abort: &AbortHandle,
    ) -> Result<User, ApiError> {
        self.send_data(Method::PUT, &format!("/api/users/{id}"), update, abort).await
    }

    /// Permanently removes the account; the caller drops the session afterwards
    pub async fn delete_account(&self, id: i32, abort: &AbortHandle) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/users/{id}"), abort).await
    }
}
