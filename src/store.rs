//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All writes go
//! through the helpers on [`AppState`], usually via [`crate::actions::Actions`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::{project, FilterKind, TaskView};
use crate::route::{guard, Route};
use crate::session::Session;
use crate::tasks::TaskCollection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast waiting to be shown or dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub session: Session,
    /// Cached tasks of the signed-in user
    pub tasks: TaskCollection,
    /// Selected list filter; not persisted
    pub filter: FilterKind,
    /// Requested page, before the session guard
    pub route: Route,
    pub notifications: Vec<Notification>,
    pub next_notification_id: u64,
    /// Requests currently awaiting a response
    pub in_flight: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible tasks and heading for the current filter
    pub fn view(&self) -> TaskView {
        project(self.tasks.as_slice(), self.filter)
    }

    /// Page to render right now
    pub fn current_route(&self) -> Route {
        guard(self.route, self.session.is_authenticated())
    }

    /// Forget everything that belongs to the signed-in user
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.tasks.clear();
        self.filter = FilterKind::All;
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications.push(Notification { id, level, message: message.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Read/write access to the app state, independent of the reactive runtime
pub trait StateHandle {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn write_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R;
}

impl StateHandle for AppStore {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.read_untracked())
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.write())
    }
}

/// Plain shared state, for code running outside a reactive owner
impl StateHandle for Rc<RefCell<AppState>> {
    fn read_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn write_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
