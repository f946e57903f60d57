//! Create Task Modal Component

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{today, MutationPhase};
use crate::context::use_app;
use crate::models::NewTask;

use super::Modal;

#[component]
pub fn CreateTaskModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (phase, set_phase) = signal(MutationPhase::Idle);

    let min_date = today().format("%Y-%m-%d").to_string();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_in_flight() {
            return;
        }
        let new_task = NewTask {
            title: title.get_untracked(),
            description: description.get_untracked(),
            due_date: NaiveDate::parse_from_str(&due_date.get_untracked(), "%Y-%m-%d").ok(),
        };
        set_phase.set(MutationPhase::InFlight);
        let actions = ctx.actions();
        spawn_local(async move {
            let result = actions.create_task(new_task).await;
            let settled = MutationPhase::settle(&result);
            set_phase.set(settled.clone());
            if settled == MutationPhase::Applied {
                on_close.run(());
            }
        });
    };

    view! {
        <Modal title="Create Task" on_close=on_close>
            <form class="task-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        placeholder="Enter Title"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="5"
                        placeholder="Enter Description"
                        required
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Due Date"
                    <input
                        type="date"
                        min=min_date
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button type="submit" class="submit-btn" disabled=move || phase.get().is_in_flight()>
                        "Create"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
