//! Session and Task Actions
//!
//! Every user intent that talks to the backend goes through [`Actions`].
//! The local cache only changes after the server confirmed the call, and a
//! response that arrives after the session changed is dropped.

use chrono::NaiveDate;

use crate::api::TaskApi;
use crate::error::{ApiError, ApiResult};
use crate::filter::FilterKind;
use crate::models::{LoginCredentials, NewTask, Registration, Task, TaskPatch};
use crate::route::Route;
use crate::store::{AppState, NotificationLevel, StateHandle};

/// Lifecycle of one create/update/delete request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MutationPhase {
    #[default]
    Idle,
    InFlight,
    Applied,
    Rejected(ApiError),
}

impl MutationPhase {
    pub fn settle<T>(result: &ApiResult<T>) -> Self {
        match result {
            Ok(_) => MutationPhase::Applied,
            Err(e) => MutationPhase::Rejected(e.clone()),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, MutationPhase::InFlight)
    }
}

/// Mutation entry points over an API and a state container
#[derive(Clone)]
pub struct Actions<A, S> {
    api: A,
    state: S,
}

impl<A: TaskApi, S: StateHandle> Actions<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    // ========================
    // Session
    // ========================

    /// One-shot check of the stored cookie. Later calls only report the
    /// current authentication state.
    pub async fn probe_session(&self) -> bool {
        if !self.state.write_state(|s| s.session.begin_probe()) {
            return self.is_authenticated();
        }
        let epoch = self.epoch();

        let result = self.tracked(self.api.me()).await;
        if self.epoch() != epoch {
            log::debug!("Ignoring probe result, session changed meanwhile");
            return self.is_authenticated();
        }

        match result {
            Ok(user) => {
                log::info!("Session restored for {}", user.email);
                self.state.write_state(|s| s.session.authenticate(user));
                // Failure already surfaced by load_tasks
                self.load_tasks().await.ok();
                true
            }
            Err(e) => {
                log::info!("USER IS NOT AUTHENTICATED: {}", e);
                self.state.write_state(AppState::sign_out);
                false
            }
        }
    }

    pub async fn login(&self, credentials: LoginCredentials) -> ApiResult<()> {
        match self.tracked(self.api.login(&credentials)).await {
            Ok(message) => {
                log::info!("Logged in as {}", credentials.email);
                self.sign_in(message, "Logged in successfully.");
                self.load_tasks().await.ok();
                Ok(())
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                Err(self.fail(e))
            }
        }
    }

    pub async fn register(&self, registration: Registration) -> ApiResult<()> {
        if let Err(e) = registration.validate() {
            return Err(self.fail(e));
        }
        self.submit_registration(&registration).await
    }

    /// Send an already validated registration; on success behaves like login
    async fn submit_registration(&self, registration: &Registration) -> ApiResult<()> {
        match self.tracked(self.api.register(registration)).await {
            Ok(message) => {
                log::info!("Registered {}", registration.email);
                self.sign_in(message, "Registered successfully.");
                self.load_tasks().await.ok();
                Ok(())
            }
            Err(e) => {
                log::warn!("Registration failed: {}", e);
                Err(self.fail(e))
            }
        }
    }

    /// Signs out locally whatever the server answers
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.tracked(self.api.logout()).await;
        self.state.write_state(|s| {
            s.sign_out();
            match &result {
                Ok(message) => {
                    let message = message.clone().unwrap_or_else(|| "Logged out.".to_string());
                    s.notify(NotificationLevel::Success, message);
                }
                Err(e) => {
                    log::warn!("Logout request failed: {}", e);
                    s.notify(NotificationLevel::Error, e.user_message());
                }
            }
        });
        result.map(|_| ())
    }

    /// Fill in the profile of a session that was opened by login/registration
    pub async fn refresh_profile(&self) -> ApiResult<()> {
        if !self.is_authenticated() {
            return Ok(());
        }
        let epoch = self.epoch();
        let result = self.tracked(self.api.me()).await;
        if self.epoch() != epoch {
            return Ok(());
        }
        match result {
            Ok(user) => {
                self.state.write_state(|s| s.session.authenticate(user));
                Ok(())
            }
            Err(e) if e.is_auth() => {
                log::info!("Session expired while loading profile");
                self.state.write_state(|s| {
                    s.sign_out();
                    s.notify(NotificationLevel::Error, e.user_message());
                });
                Err(e)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    // ========================
    // Task Collection
    // ========================

    /// Replace the cache with the server's list. Does nothing unless signed in.
    pub async fn load_tasks(&self) -> ApiResult<()> {
        let Some(epoch) = self
            .state
            .read_state(|s| s.session.is_authenticated().then(|| s.session.epoch()))
        else {
            log::debug!("Not loading tasks: no session");
            return Ok(());
        };

        let result = self.tracked(self.api.my_tasks()).await;
        if self.epoch() != epoch {
            log::debug!("Dropping task list for an old session");
            return Ok(());
        }

        match result {
            Ok(tasks) => {
                log::info!("Loaded {} tasks", tasks.len());
                self.state.write_state(|s| s.tasks.replace_all(tasks));
                Ok(())
            }
            Err(e) => {
                log::error!("Error fetching tasks: {}", e);
                self.state.write_state(|s| {
                    s.tasks.clear();
                    s.notify(NotificationLevel::Error, "Error fetching tasks.");
                });
                Err(e)
            }
        }
    }

    pub async fn create_task(&self, new_task: NewTask) -> ApiResult<Task> {
        self.create_task_on(new_task, today()).await
    }

    /// Create with an explicit "today" for the due-date check
    pub async fn create_task_on(&self, new_task: NewTask, today: NaiveDate) -> ApiResult<Task> {
        if let Err(e) = new_task.validate(today) {
            return Err(self.fail(e));
        }
        let epoch = self.epoch();
        match self.tracked(self.api.create_task(&new_task)).await {
            Ok(created) => {
                let task = created.task;
                self.apply_if_current(epoch, |s| {
                    s.tasks.add(task.clone());
                    notify_success(s, created.message, "Task created.");
                });
                Ok(task)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn update_task(&self, id: &str, patch: TaskPatch) -> ApiResult<()> {
        let epoch = self.epoch();
        match self.tracked(self.api.update_task(id, &patch)).await {
            Ok(message) => {
                self.apply_if_current(epoch, |s| {
                    if !s.tasks.update(id, &patch) {
                        log::debug!("Updated task {} is not cached", id);
                    }
                    notify_success(s, message, "Task updated.");
                });
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    pub async fn delete_task(&self, id: &str) -> ApiResult<()> {
        let epoch = self.epoch();
        match self.tracked(self.api.delete_task(id)).await {
            Ok(message) => {
                self.apply_if_current(epoch, |s| {
                    s.tasks.remove(id);
                    notify_success(s, message, "Task deleted.");
                });
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fresh copy of one task for the view/edit dialogs. Leaves the cache alone.
    pub async fn fetch_task(&self, id: &str) -> ApiResult<Task> {
        self.tracked(self.api.single_task(id))
            .await
            .map_err(|e| {
                log::error!("Error fetching task {}: {}", id, e);
                self.fail(e)
            })
    }

    // ========================
    // Local-only
    // ========================

    pub fn select_filter(&self, kind: FilterKind) {
        self.state.write_state(|s| s.filter = kind);
    }

    pub fn navigate(&self, route: Route) {
        self.state.write_state(|s| s.route = route);
    }

    pub fn dismiss(&self, id: u64) {
        self.state.write_state(|s| s.dismiss(id));
    }

    // ========================
    // Helpers
    // ========================

    fn is_authenticated(&self) -> bool {
        self.state.read_state(|s| s.session.is_authenticated())
    }

    fn epoch(&self) -> u64 {
        self.state.read_state(|s| s.session.epoch())
    }

    fn sign_in(&self, message: Option<String>, fallback: &str) {
        self.state.write_state(|s| {
            s.session.sign_in();
            s.route = Route::Home;
            notify_success(s, message, fallback);
        });
    }

    /// Run `f` unless the session changed since `epoch`
    fn apply_if_current(&self, epoch: u64, f: impl FnOnce(&mut AppState)) {
        self.state.write_state(|s| {
            if s.session.epoch() == epoch {
                f(s);
            } else {
                log::debug!("Dropping response for an old session");
            }
        });
    }

    /// Surface `err` and hand it back
    fn fail(&self, err: ApiError) -> ApiError {
        self.state
            .write_state(|s| s.notify(NotificationLevel::Error, err.user_message()));
        err
    }

    async fn tracked<T>(&self, request: impl std::future::Future<Output = T>) -> T {
        self.state.write_state(|s| s.in_flight += 1);
        let result = request.await;
        self.state.write_state(|s| s.in_flight = s.in_flight.saturating_sub(1));
        result
    }
}

fn notify_success(state: &mut AppState, message: Option<String>, fallback: &str) {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    state.notify(NotificationLevel::Success, message);
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
