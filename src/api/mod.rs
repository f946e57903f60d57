//! REST API Client
//!
//! Bindings to the task backend, organized by domain. [`TaskApi`] is the
//! seam the rest of the app talks to; [`HttpApi`] implements it with the
//! browser's `fetch`.

mod task;
mod transport;
mod user;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{CreatedTaskResponse, LoginCredentials, NewTask, Registration, Task, TaskPatch, UserProfile};

use transport::Transport;

/// Logical operations of the backend.
///
/// Methods returning `Option<String>` yield the server's `message` field.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /user/me`
    async fn me(&self) -> ApiResult<UserProfile>;
    /// `POST /user/login`
    async fn login(&self, credentials: &LoginCredentials) -> ApiResult<Option<String>>;
    /// `POST /user/register` (multipart)
    async fn register(&self, registration: &Registration) -> ApiResult<Option<String>>;
    /// `GET /user/logout`
    async fn logout(&self) -> ApiResult<Option<String>>;
    /// `GET /task/mytask`
    async fn my_tasks(&self) -> ApiResult<Vec<Task>>;
    /// `POST /task/post`
    async fn create_task(&self, task: &NewTask) -> ApiResult<CreatedTaskResponse>;
    /// `PUT /task/update/:id`
    async fn update_task(&self, id: &str, patch: &TaskPatch) -> ApiResult<Option<String>>;
    /// `DELETE /task/delete/:id`
    async fn delete_task(&self, id: &str) -> ApiResult<Option<String>>;
    /// `GET /task/single/:id`
    async fn single_task(&self, id: &str) -> ApiResult<Task>;
}

/// Backend reached over HTTP with cookie credentials
#[derive(Debug, Clone)]
pub struct HttpApi {
    transport: Transport,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { transport: Transport::new(base_url) }
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn me(&self) -> ApiResult<UserProfile> {
        user::me(&self.transport).await
    }

    async fn login(&self, credentials: &LoginCredentials) -> ApiResult<Option<String>> {
        user::login(&self.transport, credentials).await
    }

    async fn register(&self, registration: &Registration) -> ApiResult<Option<String>> {
        user::register(&self.transport, registration).await
    }

    async fn logout(&self) -> ApiResult<Option<String>> {
        user::logout(&self.transport).await
    }

    async fn my_tasks(&self) -> ApiResult<Vec<Task>> {
        task::my_tasks(&self.transport).await
    }

    async fn create_task(&self, new_task: &NewTask) -> ApiResult<CreatedTaskResponse> {
        task::create_task(&self.transport, new_task).await
    }

    async fn update_task(&self, id: &str, patch: &TaskPatch) -> ApiResult<Option<String>> {
        task::update_task(&self.transport, id, patch).await
    }

    async fn delete_task(&self, id: &str) -> ApiResult<Option<String>> {
        task::delete_task(&self.transport, id).await
    }

    async fn single_task(&self, id: &str) -> ApiResult<Task> {
        task::single_task(&self.transport, id).await
    }
}
