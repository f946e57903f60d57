//! UI Components
//!
//! Leptos components for the pages and task dialogs.

mod navbar;
mod login_form;
mod register_form;
mod profile_page;
mod task_board;
mod task_card;
mod create_task_modal;
mod update_task_modal;
mod view_task_modal;
mod modal;
mod toaster;
mod delete_confirm_button;
mod dialog_target;

pub use navbar::Navbar;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use profile_page::ProfilePage;
pub use task_board::TaskBoard;
pub use task_card::TaskCard;
pub use create_task_modal::CreateTaskModal;
pub use update_task_modal::UpdateTaskModal;
pub use view_task_modal::ViewTaskModal;
pub use modal::Modal;
pub use toaster::Toaster;
pub use delete_confirm_button::DeleteConfirmButton;
pub use dialog_target::DialogTarget;
