//! Test Doubles
//!
//! Scripted [`TaskApi`] that records which endpoints were hit.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::TaskApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    CreatedTaskResponse, LoginCredentials, NewTask, Registration, Task, TaskPatch, TaskStatus, UserProfile,
};

pub fn make_task(id: &str, status: TaskStatus) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {}", id),
        description: String::new(),
        due_date: None,
        status,
        archived: false,
    }
}

fn unset<T>() -> ApiResult<T> {
    Err(ApiError::Server { status: 500, message: "not scripted".into() })
}

#[derive(Default)]
struct Script {
    calls: Vec<&'static str>,
    me: Option<ApiResult<UserProfile>>,
    login: Option<ApiResult<Option<String>>>,
    register: Option<ApiResult<Option<String>>>,
    logout: Option<ApiResult<Option<String>>>,
    tasks: Option<ApiResult<Vec<Task>>>,
    create: Option<ApiResult<CreatedTaskResponse>>,
    update: Option<ApiResult<Option<String>>>,
    delete: Option<ApiResult<Option<String>>>,
    single: Option<ApiResult<Task>>,
    before_response: Option<Box<dyn Fn()>>,
}

/// Cheap to clone; clones share the same script and call log
#[derive(Clone, Default)]
pub struct MockApi {
    script: Rc<RefCell<Script>>,
}

impl MockApi {
    fn set(self, f: impl FnOnce(&mut Script)) -> Self {
        f(&mut self.script.borrow_mut());
        self
    }

    pub fn me_returns(self, user: UserProfile) -> Self {
        self.set(|s| s.me = Some(Ok(user)))
    }

    pub fn me_fails(self, err: ApiError) -> Self {
        self.set(|s| s.me = Some(Err(err)))
    }

    pub fn login_returns(self, message: &str) -> Self {
        let message = message.to_string();
        self.set(|s| s.login = Some(Ok(Some(message))))
    }

    pub fn login_fails(self, err: ApiError) -> Self {
        self.set(|s| s.login = Some(Err(err)))
    }

    pub fn register_returns(self, message: &str) -> Self {
        let message = message.to_string();
        self.set(|s| s.register = Some(Ok(Some(message))))
    }

    pub fn logout_returns(self, message: &str) -> Self {
        let message = message.to_string();
        self.set(|s| s.logout = Some(Ok(Some(message))))
    }

    pub fn logout_fails(self, err: ApiError) -> Self {
        self.set(|s| s.logout = Some(Err(err)))
    }

    pub fn tasks_return(self, tasks: Vec<Task>) -> Self {
        self.set(|s| s.tasks = Some(Ok(tasks)))
    }

    pub fn tasks_fail(self, err: ApiError) -> Self {
        self.set(|s| s.tasks = Some(Err(err)))
    }

    pub fn create_returns(self, task: Task, message: &str) -> Self {
        let message = Some(message.to_string());
        self.set(|s| s.create = Some(Ok(CreatedTaskResponse { message, task })))
    }

    pub fn create_fails(self, err: ApiError) -> Self {
        self.set(|s| s.create = Some(Err(err)))
    }

    pub fn update_returns(self, message: &str) -> Self {
        let message = message.to_string();
        self.set(|s| s.update = Some(Ok(Some(message))))
    }

    pub fn update_fails(self, err: ApiError) -> Self {
        self.set(|s| s.update = Some(Err(err)))
    }

    pub fn delete_returns(self, message: &str) -> Self {
        let message = message.to_string();
        self.set(|s| s.delete = Some(Ok(Some(message))))
    }

    pub fn delete_fails(self, err: ApiError) -> Self {
        self.set(|s| s.delete = Some(Err(err)))
    }

    pub fn single_fails(self, err: ApiError) -> Self {
        self.set(|s| s.single = Some(Err(err)))
    }

    /// Run `hook` while a request is "in flight", just before it resolves
    pub fn before_response(&self, hook: impl Fn() + 'static) {
        self.script.borrow_mut().before_response = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.script.borrow().calls.clone()
    }

    pub fn was_called(&self, endpoint: &str) -> bool {
        self.script.borrow().calls.iter().any(|c| *c == endpoint)
    }

    fn respond<T: Clone>(&self, endpoint: &'static str, pick: impl FnOnce(&Script) -> &Option<ApiResult<T>>) -> ApiResult<T> {
        let hook = {
            let mut script = self.script.borrow_mut();
            script.calls.push(endpoint);
            script.before_response.take()
        };
        if let Some(hook) = &hook {
            hook();
        }
        let mut script = self.script.borrow_mut();
        if hook.is_some() {
            script.before_response = hook;
        }
        pick(&*script).clone().unwrap_or_else(unset)
    }
}

#[async_trait(?Send)]
impl TaskApi for MockApi {
    async fn me(&self) -> ApiResult<UserProfile> {
        self.respond("me", |s| &s.me)
    }

    async fn login(&self, _credentials: &LoginCredentials) -> ApiResult<Option<String>> {
        self.respond("login", |s| &s.login)
    }

    async fn register(&self, _registration: &Registration) -> ApiResult<Option<String>> {
        self.respond("register", |s| &s.register)
    }

    async fn logout(&self) -> ApiResult<Option<String>> {
        self.respond("logout", |s| &s.logout)
    }

    async fn my_tasks(&self) -> ApiResult<Vec<Task>> {
        self.respond("my_tasks", |s| &s.tasks)
    }

    async fn create_task(&self, _task: &NewTask) -> ApiResult<CreatedTaskResponse> {
        self.respond("create_task", |s| &s.create)
    }

    async fn update_task(&self, _id: &str, _patch: &TaskPatch) -> ApiResult<Option<String>> {
        self.respond("update_task", |s| &s.update)
    }

    async fn delete_task(&self, _id: &str) -> ApiResult<Option<String>> {
        self.respond("delete_task", |s| &s.delete)
    }

    async fn single_task(&self, _id: &str) -> ApiResult<Task> {
        self.respond("single_task", |s| &s.single)
    }
}
