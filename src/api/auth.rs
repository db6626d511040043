//! Auth endpoints

use super::{AbortHandle, ApiClient, ApiError};
use crate::models::{AuthData, LoginRequest, RecoverRequest, ResetPasswordRequest, User};

impl ApiClient {
    /// Exchanges credentials for a token pair and installs the session
    pub async fn login(&self, credentials: &LoginRequest, abort: &AbortHandle) -> Result<AuthData, ApiError> {
        let data: AuthData = self.public_post("/api/auth/login", credentials, abort).await?;
        self.install_session(&data);
        Ok(data)
    }

    /// The user behind the current token
    pub async fn current_user(&self, abort: &AbortHandle) -> Result<User, ApiError> {
        self.get_data("/api/auth/me", abort).await
    }

    /// Drops the session locally no matter what the server says
    pub async fn logout(&self, abort: &AbortHandle) -> Result<(), ApiError> {
        let result = self.post_empty_unit("/api/auth/logout", abort).await;
        self.clear_session();
        result
    }

    /// Asks the backend to mail a recovery code
    pub async fn request_recovery(&self, request: &RecoverRequest, abort: &AbortHandle) -> Result<(), ApiError> {
        self.public_post_unit("/api/auth/recover", request, abort).await
    }

    /// Trades a mailed recovery code for a new password
    pub async fn reset_password(&self, request: &ResetPasswordRequest, abort: &AbortHandle) -> Result<(), ApiError> {
        self.public_post_unit("/api/auth/reset", request, abort).await
    }
}
