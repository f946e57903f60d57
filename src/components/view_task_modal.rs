//! View Task Modal Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::Task;

use super::Modal;

#[component]
pub fn ViewTaskModal(
    #[prop(into)] task_id: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let (task, set_task) = signal(Option::<Task>::None);

    let actions = ctx.actions();
    spawn_local(async move {
        if let Ok(fetched) = actions.fetch_task(&task_id).await {
            set_task.set(Some(fetched));
        }
    });

    view! {
        <Modal title="Task Details" on_close=on_close>
            {move || match task.get() {
                Some(task) => view! {
                    <div class="task-details">
                        <h4>{task.title.clone()}</h4>
                        <p class="task-details-description">{task.description.clone()}</p>
                        <p>"Due: " {task.due_date_label()}</p>
                        <p>"Status: " {task.status.as_str()}</p>
                        <p>"Archived: " {if task.archived { "Yes" } else { "No" }}</p>
                    </div>
                }.into_any(),
                None => view! { <p class="muted">"Loading..."</p> }.into_any(),
            }}
            <div class="form-actions">
                <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </Modal>
    }
}
