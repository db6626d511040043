//! Task endpoints

use gloo_net::http::Method;

use super::{AbortHandle, ApiClient, ApiError};
use crate::models::{NewTask, Task, TaskAttribute};

impl ApiClient {
    pub async fn list_tasks(&self, abort: &AbortHandle) -> Result<Vec<Task>, ApiError> {
        self.get_data("/api/tasks", abort).await
    }

    pub async fn get_task(&self, id: i32, abort: &AbortHandle) -> Result<Task, ApiError> {
        self.get_data(&format!("/api/tasks/{id}"), abort).await
    }

    pub async fn create_task(&self, task: &NewTask, abort: &AbortHandle) -> Result<Task, ApiError> {
        self.send_data(Method::POST, "/api/tasks", task, abort).await
    }

    /// Patches one field; every task mutation goes through here
    pub async fn set_task_attribute(
        &self,
        id: i32,
        attribute: &TaskAttribute,
        abort: &AbortHandle,
    ) -> Result<Task, ApiError> {
        tracing::debug!(task = id, attribute = attribute.name(), "patching task attribute");
        self.send_data(Method::PUT, &format!("/api/tasks/{id}/attributes"), attribute, abort).await
    }

    pub async fn delete_task(&self, id: i32, abort: &AbortHandle) -> Result<(), ApiError> {
        self.delete_unit(&format!("/api/tasks/{id}"), abort).await
    }
}
