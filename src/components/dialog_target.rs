//! Dialog Target Type
//!
//! Which task dialog is open on the board.

/// Open dialog - create, or edit/view of a task id
#[derive(Clone, Debug, PartialEq)]
pub enum DialogTarget {
    Create,
    /// Task being edited (id)
    Update(String),
    /// Task being viewed (id)
    View(String),
}
