//! Task Collection
//!
//! Client-side cache of the signed-in user's tasks. Only ever changed after
//! the server confirmed the corresponding call.

use crate::models::{Task, TaskPatch};

/// Ordered tasks, unique by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskCollection {
    tasks: Vec<Task>,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a freshly fetched list.
    /// Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks.clear();
        for task in tasks {
            if !self.contains(&task.id) {
                self.tasks.push(task);
            }
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Append a created task. An already cached id is overwritten in place.
    pub fn add(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Merge `patch` into the task with `id`. Returns false if no such task.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                patch.apply_to(task);
                true
            }
            None => false,
        }
    }

    /// Returns false if no such task
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn make_task(id: &str, title: &str) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            status: TaskStatus::Incomplete,
            archived: false,
        }
    }

    fn collection(ids: &[&str]) -> TaskCollection {
        let mut c = TaskCollection::new();
        c.replace_all(ids.iter().map(|id| make_task(id, id)).collect());
        c
    }

    #[test]
    fn test_add_to_empty() {
        let mut c = TaskCollection::new();
        c.add(make_task("t1", "Buy milk"));
        assert_eq!(c.len(), 1);
        assert_eq!(c.as_slice()[0].id, "t1");
        assert_eq!(c.as_slice()[0].title, "Buy milk");
    }

    #[test]
    fn test_add_appends_after_server_order() {
        let mut c = collection(&["b", "a"]);
        c.add(make_task("c", "c"));
        let ids: Vec<_> = c.as_slice().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_add_existing_id_keeps_unique() {
        let mut c = collection(&["a", "b"]);
        c.add(make_task("a", "renamed"));
        assert_eq!(c.len(), 2);
        assert_eq!(c.as_slice()[0].title, "renamed");
    }

    #[test]
    fn test_add_then_remove_restores() {
        let original = collection(&["a", "b"]);
        let mut c = original.clone();
        c.add(make_task("new", "new"));
        assert!(c.remove("new"));
        assert_eq!(c, original);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let original = collection(&["a", "b"]);
        let mut c = original.clone();
        assert!(!c.remove("missing-id"));
        assert_eq!(c, original);
    }

    #[test]
    fn test_update_preserves_other_fields() {
        let mut c = TaskCollection::new();
        c.add(make_task("t1", "x"));
        let patch = TaskPatch { status: Some(TaskStatus::Completed), ..Default::default() };
        assert!(c.update("t1", &patch));

        let task = c.get("t1").unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.title, "x");
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut once = collection(&["a", "b"]);
        let patch = TaskPatch {
            title: Some("T".into()),
            archived: Some(true),
            ..Default::default()
        };
        once.update("b", &patch);
        let mut twice = once.clone();
        twice.update("b", &patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_stale_id_is_noop() {
        let original = collection(&["a"]);
        let mut c = original.clone();
        let patch = TaskPatch { title: Some("gone".into()), ..Default::default() };
        assert!(!c.update("stale", &patch));
        assert_eq!(c, original);
    }

    #[test]
    fn test_replace_all_drops_duplicate_ids() {
        let mut c = collection(&["x"]);
        c.replace_all(vec![make_task("a", "1"), make_task("a", "2"), make_task("b", "3")]);
        assert_eq!(c.len(), 2);
        assert_eq!(c.get("a").unwrap().title, "1");
        assert!(!c.contains("x"));
    }
}
