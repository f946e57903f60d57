//! Task Card Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app;
use crate::models::{Task, TaskStatus};

use super::{DeleteConfirmButton, DialogTarget};

#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] on_open: Callback<DialogTarget>,
) -> impl IntoView {
    let ctx = use_app();

    let status_class = match task.status {
        TaskStatus::Completed => "task-status completed",
        TaskStatus::Incomplete => "task-status incomplete",
    };
    let edit_id = task.id.clone();
    let view_id = task.id.clone();
    let delete_id = task.id.clone();

    let on_delete = Callback::new(move |_: ()| {
        let actions = ctx.actions();
        let id = delete_id.clone();
        spawn_local(async move {
            let _ = actions.delete_task(&id).await;
        });
    });

    view! {
        <div class="task-card">
            <div class="task-card-body">
                <h4 class="task-card-title">{task.card_title()}</h4>
                <p class="task-card-description">{task.card_description()}</p>
                <p class="task-card-due">"Due: " {task.due_date_label()}</p>
                <div class="task-card-flags">
                    <span class=status_class>{task.status.as_str()}</span>
                    {task.archived.then(|| view! { <span class="task-archived">"archived"</span> })}
                </div>
            </div>
            <div class="task-card-actions">
                <button
                    class="card-action edit"
                    title="Edit"
                    on:click=move |_| on_open.run(DialogTarget::Update(edit_id.clone()))
                >
                    "✎"
                </button>
                <DeleteConfirmButton on_confirm=on_delete />
                <button
                    class="card-action view"
                    title="View"
                    on:click=move |_| on_open.run(DialogTarget::View(view_id.clone()))
                >
                    "👁"
                </button>
            </div>
        </div>
    }
}
