//! Task Manager App
//!
//! Root component: owns the store, probes the session once and switches
//! between pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{LoginForm, Navbar, ProfilePage, RegisterForm, TaskBoard, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store: AppStore = Store::new(AppState::new());
    let ctx = AppContext::new(store, config);

    // Provide context to all children
    provide_context(ctx);

    // Probe the session cookie once on mount; tasks load when it succeeds
    Effect::new(move |_| {
        let actions = ctx.actions();
        spawn_local(async move {
            actions.probe_session().await;
        });
    });

    let current_route = Memo::new(move |_| store.read().current_route());

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                {move || match current_route.get() {
                    Route::Home => view! { <TaskBoard /> }.into_any(),
                    Route::Login => view! { <LoginForm /> }.into_any(),
                    Route::Register => view! { <RegisterForm /> }.into_any(),
                    Route::Profile => view! { <ProfilePage /> }.into_any(),
                }}
            </main>
            <Toaster />
        </div>
    }
}
