//! Toaster Component
//!
//! Shows queued notifications and dismisses each after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::store::{AppStateStoreFields, NotificationLevel};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let duration = ctx.toast_duration_ms();

    view! {
        <div class="toaster">
            <For
                each=move || store.notifications().get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    // Runs once per notification
                    spawn_local(async move {
                        TimeoutFuture::new(duration).await;
                        ctx.actions().dismiss(id);
                    });
                    let class = match n.level {
                        NotificationLevel::Success => "toast success",
                        NotificationLevel::Error => "toast error",
                    };
                    view! {
                        <div class=class on:click=move |_| ctx.actions().dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
