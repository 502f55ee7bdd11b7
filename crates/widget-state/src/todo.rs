//! Task List State
//!
//! Ordered tasks with a done flag. Ids come from a counter owned by the list
//! and are never handed out twice, even after the task they named is gone.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u32);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
}

/// Seed entry for a task list (no id; ids are assigned on load)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSeed {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl TaskSeed {
    pub fn new(text: &str, done: bool) -> Self {
        Self { text: text.to_string(), done }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from seed entries. Blank seeds are skipped.
    pub fn from_seeds(seeds: &[TaskSeed]) -> Self {
        let mut list = Self::new();
        for seed in seeds {
            if let Ok(id) = list.add_task(&seed.text) {
                if seed.done {
                    let _ = list.toggle_done(id);
                }
            }
        }
        list
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn allocate_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    /// Append a task. Text that is blank after trimming is rejected.
    pub fn add_task(&mut self, text: &str) -> Result<TaskId> {
        if text.trim().is_empty() {
            tracing::debug!("task add ignored: blank text");
            return Err(StateError::EmptyTask);
        }
        let id = self.allocate_id();
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            done: false,
        });
        tracing::debug!(%id, "task added");
        Ok(id)
    }

    pub fn toggle_done(&mut self, id: TaskId) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            tracing::debug!(%id, "task toggle ignored: unknown id");
            return Err(StateError::UnknownTask(id));
        };
        task.done = !task.done;
        tracing::debug!(%id, done = task.done, "task toggled");
        Ok(task.done)
    }

    pub fn remove_task(&mut self, id: TaskId) -> Result<Task> {
        let Some(pos) = self.tasks.iter().position(|task| task.id == id) else {
            tracing::debug!(%id, "task remove ignored: unknown id");
            return Err(StateError::UnknownTask(id));
        };
        tracing::debug!(%id, "task removed");
        Ok(self.tasks.remove(pos))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }

    /// Completed / total, or 0.0 for an empty list.
    pub fn progress_ratio(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_ratio() * 100.0
    }

    /// "2 of 3 completed"
    pub fn summary(&self) -> String {
        format!("{} of {} completed", self.completed_count(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::capture_logs;

    #[test]
    fn test_blank_text_rejected() {
        let mut list = TaskList::new();
        assert!(matches!(list.add_task(""), Err(StateError::EmptyTask)));
        assert!(matches!(list.add_task("   \t"), Err(StateError::EmptyTask)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_duplicate_text_gets_distinct_ids() {
        let mut list = TaskList::new();
        let a = list.add_task("Buy milk").unwrap();
        let b = list.add_task("Buy milk").unwrap();

        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].text, list.tasks()[1].text);
        assert!(list.tasks().iter().all(|t| !t.done));
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut list = TaskList::new();
        let id = list.add_task("Walk").unwrap();
        assert!(list.toggle_done(id).unwrap());
        assert!(!list.toggle_done(id).unwrap());
        assert!(!list.get(id).unwrap().done);
    }

    #[test]
    fn test_progress() {
        let mut list = TaskList::new();
        assert_eq!(list.progress_ratio(), 0.0);

        let a = list.add_task("a").unwrap();
        let b = list.add_task("b").unwrap();
        list.add_task("c").unwrap();
        list.toggle_done(a).unwrap();
        list.toggle_done(b).unwrap();

        assert_eq!(list.completed_count(), 2);
        assert!((list.progress_ratio() - 2.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(list.summary(), "2 of 3 completed");
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut list = TaskList::new();
        let id = list.add_task("only").unwrap();
        let removed = list.remove_task(id).unwrap();
        assert_eq!(removed.text, "only");

        assert!(matches!(list.toggle_done(id), Err(StateError::UnknownTask(_))));
        assert!(matches!(list.remove_task(id), Err(StateError::UnknownTask(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_not_reused_and_order_kept() {
        let mut list = TaskList::new();
        let a = list.add_task("a").unwrap();
        let b = list.add_task("b").unwrap();
        list.remove_task(b).unwrap();
        let c = list.add_task("c").unwrap();
        assert_ne!(b, c);

        list.toggle_done(a).unwrap();
        let texts: Vec<_> = list.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn test_rejections_are_logged() {
        let mut list = TaskList::new();
        let id = list.add_task("gone").unwrap();
        list.remove_task(id).unwrap();

        let logs = capture_logs(|| {
            assert!(list.add_task("  ").is_err());
            assert!(list.toggle_done(id).is_err());
            assert!(list.remove_task(id).is_err());
        });
        assert!(logs.contains("task add ignored: blank text"), "{}", logs);
        assert!(logs.contains("task toggle ignored: unknown id"), "{}", logs);
        assert!(logs.contains("task remove ignored: unknown id"), "{}", logs);
        assert!(logs.contains("id=1"), "{}", logs);
    }

    #[test]
    fn test_ids_only_come_from_the_list() {
        let mut list = TaskList::from_seeds(&[TaskSeed::new("a", false), TaskSeed::new("b", true)]);
        let c = list.add_task("c").unwrap();
        assert!(list.tasks()[..2].iter().all(|task| task.id != c));
    }

    #[test]
    fn test_from_seeds() {
        let list = TaskList::from_seeds(&[
            TaskSeed::new("Buy groceries", true),
            TaskSeed::new(" ", true),
            TaskSeed::new("Go to the gym", false),
        ]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.completed_count(), 1);
        assert!(list.tasks()[0].done);
    }
}
