//! View Filter
//!
//! Pure projection of the task collection onto what the list shows.

use std::convert::Infallible;
use std::str::FromStr;

use crate::models::{Task, TaskStatus};

/// Named filter selectable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    All,
    Completed,
    Incomplete,
    Archived,
}

impl FilterKind {
    pub const ALL_KINDS: [FilterKind; 4] = [
        FilterKind::All,
        FilterKind::Completed,
        FilterKind::Incomplete,
        FilterKind::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::All => "all",
            FilterKind::Completed => "completed",
            FilterKind::Incomplete => "incomplete",
            FilterKind::Archived => "archived",
        }
    }

    /// Heading shown above the list
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::All => "Tasks",
            FilterKind::Completed => "Completed Tasks",
            FilterKind::Incomplete => "Incomplete Tasks",
            FilterKind::Archived => "Archived Tasks",
        }
    }

    /// Entry text in the filter menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            FilterKind::All => "All Tasks",
            other => other.label(),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Completed => task.status == TaskStatus::Completed,
            FilterKind::Incomplete => task.status == TaskStatus::Incomplete,
            FilterKind::Archived => task.archived,
        }
    }
}

/// Unknown names fall back to `All`
impl FromStr for FilterKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "completed" => FilterKind::Completed,
            "incomplete" => FilterKind::Incomplete,
            "archived" => FilterKind::Archived,
            _ => FilterKind::All,
        })
    }
}

/// What the list renders for one filter selection
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub visible: Vec<Task>,
    pub label: &'static str,
}

impl TaskView {
    /// Text shown when nothing matches
    pub fn empty_message(&self) -> String {
        format!("YOU DO NOT HAVE ANY {}", self.label)
    }
}

/// Subsequence of `tasks` matching `kind`, in original order
pub fn project(tasks: &[Task], kind: FilterKind) -> TaskView {
    TaskView {
        visible: tasks.iter().filter(|t| kind.matches(t)).cloned().collect(),
        label: kind.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str, status: TaskStatus, archived: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            due_date: None,
            status,
            archived,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task("1", TaskStatus::Completed, false),
            make_task("2", TaskStatus::Incomplete, true),
            make_task("3", TaskStatus::Incomplete, false),
            make_task("4", TaskStatus::Completed, true),
        ]
    }

    fn ids(view: &TaskView) -> Vec<&str> {
        view.visible.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_completed_filter() {
        let tasks = vec![
            make_task("a", TaskStatus::Completed, false),
            make_task("b", TaskStatus::Incomplete, false),
        ];
        let view = project(&tasks, FilterKind::Completed);
        assert_eq!(ids(&view), vec!["a"]);
        assert_eq!(view.label, "Completed Tasks");
    }

    #[test]
    fn test_each_kind_is_ordered_subsequence() {
        let tasks = sample();
        for kind in FilterKind::ALL_KINDS {
            let view = project(&tasks, kind);
            assert!(view.visible.iter().all(|t| kind.matches(t)));

            // Order preserved: positions in the source are strictly increasing
            let positions: Vec<usize> = view
                .visible
                .iter()
                .map(|v| tasks.iter().position(|t| t.id == v.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{:?}", kind);

            let expected = tasks.iter().filter(|t| kind.matches(t)).count();
            assert_eq!(view.visible.len(), expected);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(project(&sample(), FilterKind::All).label, "Tasks");
        assert_eq!(ids(&project(&sample(), FilterKind::All)), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(&project(&sample(), FilterKind::Incomplete)), vec!["2", "3"]);
        assert_eq!(ids(&project(&sample(), FilterKind::Archived)), vec!["2", "4"]);
        assert_eq!(FilterKind::Archived.label(), "Archived Tasks");
        assert_eq!(FilterKind::All.menu_label(), "All Tasks");
    }

    #[test]
    fn test_unknown_kind_falls_back_to_all() {
        assert_eq!("starred".parse::<FilterKind>().unwrap(), FilterKind::All);
        assert_eq!("".parse::<FilterKind>().unwrap(), FilterKind::All);
        for kind in FilterKind::ALL_KINDS {
            assert_eq!(kind.as_str().parse::<FilterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_empty_collection() {
        let view = project(&[], FilterKind::Completed);
        assert!(view.visible.is_empty());
        assert_eq!(view.empty_message(), "YOU DO NOT HAVE ANY Completed Tasks");
    }
}
