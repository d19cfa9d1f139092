//! Ordered in-memory task store.

use tracing::debug;

use super::types::{Task, TaskUpdate};

/// Insertion-ordered collection of tasks.
///
/// Names are not deduplicated. Name lookups match exactly (case-sensitive)
/// and stop at the first hit.
///
/// No internal locking: concurrent hosts must wrap the registry in their
/// own mutex.
///
/// # Examples
///
/// ```
/// use u_taskprio::registry::{TaskRegistry, TaskUpdate};
///
/// let mut registry = TaskRegistry::new();
/// registry.add("Report", 5.0, 8.0, 3.0);
/// assert!(registry.find_and_update("Report", TaskUpdate::default().with_effort(9.0)));
/// assert!(!registry.find_and_update("report", TaskUpdate::default()));
/// assert!((registry.list()[0].priority_score - 7.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new formula-scored task. Always succeeds.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        urgency: f64,
        importance: f64,
        effort: f64,
    ) -> &Task {
        let idx = self.tasks.len();
        self.tasks.push(Task::new(name, urgency, importance, effort));
        &self.tasks[idx]
    }

    /// Updates the first task named `name`.
    ///
    /// Returns `false` without touching anything when no task matches.
    pub fn find_and_update(&mut self, name: &str, update: TaskUpdate) -> bool {
        match self.tasks.iter_mut().find(|t| t.name == name) {
            Some(task) => {
                task.apply(&update);
                true
            }
            None => {
                debug!(task = name, "update target not found");
                false
            }
        }
    }

    /// All tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// First task named `name`.
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Mutable access for bulk rescoring.
    pub fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<'a> IntoIterator for &'a TaskRegistry {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_list() {
        let mut reg = TaskRegistry::new();
        let added = reg.add("A", 5.0, 8.0, 3.0).clone();
        assert!((added.priority_score - 5.8).abs() < 1e-9);

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.list()[0], added);
    }

    #[test]
    fn test_list_empty() {
        let reg = TaskRegistry::new();
        assert!(reg.list().is_empty());
        assert!(reg.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut reg = TaskRegistry::new();
        for name in ["c", "a", "b"] {
            reg.add(name, 1.0, 1.0, 1.0);
        }
        let names: Vec<&str> = reg.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_names_update_first_only() {
        let mut reg = TaskRegistry::new();
        reg.add("dup", 1.0, 1.0, 1.0);
        reg.add("dup", 2.0, 2.0, 2.0);

        assert!(reg.find_and_update("dup", TaskUpdate::default().with_urgency(10.0)));

        assert!((reg.list()[0].urgency - 10.0).abs() < 1e-10);
        assert!((reg.list()[1].urgency - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_update_missing_leaves_tasks_unchanged() {
        let mut reg = TaskRegistry::new();
        reg.add("A", 5.0, 8.0, 3.0);
        reg.add("B", 1.0, 2.0, 3.0);
        let before = reg.list().to_vec();

        assert!(!reg.find_and_update("C", TaskUpdate::all(9.0, 9.0, 9.0)));
        assert_eq!(reg.list(), before.as_slice());
    }

    #[test]
    fn test_update_is_case_sensitive() {
        let mut reg = TaskRegistry::new();
        reg.add("Report", 1.0, 1.0, 1.0);
        assert!(!reg.find_and_update("report", TaskUpdate::all(9.0, 9.0, 9.0)));
        assert!(reg.get("report").is_none());
        assert!(reg.get("Report").is_some());
    }

    #[test]
    fn test_into_iter() {
        let mut reg = TaskRegistry::new();
        reg.add("x", 1.0, 1.0, 1.0);
        reg.add("y", 1.0, 1.0, 1.0);
        assert_eq!((&reg).into_iter().count(), 2);
    }
}
