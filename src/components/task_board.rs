//! Task Board Component
//!
//! Filtered task cards plus the create/update/view dialogs.

use leptos::prelude::*;

use crate::context::use_app;

use super::{CreateTaskModal, DialogTarget, TaskCard, UpdateTaskModal, ViewTaskModal};

#[component]
pub fn TaskBoard() -> impl IntoView {
    let ctx = use_app();
    let store = ctx.store;
    let (dialog, set_dialog) = signal(Option::<DialogTarget>::None);

    // Re-derived on every store change; equal results don't re-render
    let board = Memo::new(move |_| store.read().view());

    let open = Callback::new(move |target: DialogTarget| set_dialog.set(Some(target)));
    let close = Callback::new(move |_: ()| set_dialog.set(None));

    view! {
        <div class="task-board">
            <div class="board-header">
                <h2 class="board-title">{move || board.with(|v| v.label)}</h2>
                <button class="create-btn" on:click=move |_| open.run(DialogTarget::Create)>
                    "Create Task"
                </button>
            </div>

            <Show
                when=move || board.with(|v| !v.visible.is_empty())
                fallback=move || view! {
                    <p class="board-empty">{move || board.with(|v| v.empty_message())}</p>
                }
            >
                <div class="task-grid">
                    <For
                        each=move || board.get().visible
                        key=|task| task.clone()
                        children=move |task| view! { <TaskCard task=task on_open=open /> }
                    />
                </div>
            </Show>

            {move || dialog.get().map(|target| match target {
                DialogTarget::Create => view! { <CreateTaskModal on_close=close /> }.into_any(),
                DialogTarget::Update(id) => view! { <UpdateTaskModal task_id=id on_close=close /> }.into_any(),
                DialogTarget::View(id) => view! { <ViewTaskModal task_id=id on_close=close /> }.into_any(),
            })}
        </div>
    }
}
