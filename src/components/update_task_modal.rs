//! Update Task Modal Component
//!
//! Prefilled from a fresh fetch of the task; saves all editable fields.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::MutationPhase;
use crate::context::use_app;
use crate::models::{TaskPatch, TaskStatus};

use super::Modal;

#[component]
pub fn UpdateTaskModal(
    #[prop(into)] task_id: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Incomplete);
    let (archived, set_archived) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let (phase, set_phase) = signal(MutationPhase::Idle);
    let task_id = StoredValue::new(task_id);

    // Prefill
    {
        let actions = ctx.actions();
        let id = task_id.get_value();
        spawn_local(async move {
            if let Ok(task) = actions.fetch_task(&id).await {
                set_title.set(task.title);
                set_description.set(task.description);
                set_status.set(task.status);
                set_archived.set(task.archived);
                set_loaded.set(true);
            }
        });
    }

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if phase.get_untracked().is_in_flight() {
            return;
        }
        let patch = TaskPatch {
            title: Some(title.get_untracked()),
            description: Some(description.get_untracked()),
            status: Some(status.get_untracked()),
            archived: Some(archived.get_untracked()),
        };
        set_phase.set(MutationPhase::InFlight);
        let actions = ctx.actions();
        let id = task_id.get_value();
        spawn_local(async move {
            let result = actions.update_task(&id, patch).await;
            let settled = MutationPhase::settle(&result);
            set_phase.set(settled.clone());
            if settled == MutationPhase::Applied {
                on_close.run(());
            }
        });
    };

    view! {
        <Modal title="Update Task" on_close=on_close>
            <form class="task-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="5"
                        required
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Status"
                    <select
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| set_status.set(event_target_value(&ev).parse().unwrap_or_default())
                    >
                        <option value="incomplete">"Incomplete"</option>
                        <option value="completed">"Completed"</option>
                    </select>
                </label>
                <label>
                    "Archived"
                    <select
                        prop:value=move || if archived.get() { "true" } else { "false" }
                        on:change=move |ev| set_archived.set(event_target_value(&ev) == "true")
                    >
                        <option value="false">"No"</option>
                        <option value="true">"Yes"</option>
                    </select>
                </label>
                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button
                        type="submit"
                        class="submit-btn"
                        disabled=move || !loaded.get() || phase.get().is_in_flight()
                    >
                        "Update"
                    </button>
                </div>
            </form>
        </Modal>
    }
}
