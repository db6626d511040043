//! Chat credential endpoint

use super::{AbortHandle, ApiClient, ApiError};
use crate::models::ChatTokenData;

impl ApiClient {
    /// Short-lived token the chat widget signs in with
    pub async fn chat_token(&self, abort: &AbortHandle) -> Result<ChatTokenData, ApiError> {
        self.get_data("/api/chat/token", abort).await
    }
}
