// List filtering for tasks

use crate::models::{Task, TaskStatus};

/// Criteria for `list`
///
/// The default filter shows pending tasks of every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only tasks whose category matches exactly
    pub category: Option<String>,
    /// Include completed tasks
    pub show_completed: bool,
}

impl TaskFilter {
    pub fn new(category: Option<String>, show_completed: bool) -> Self {
        Self {
            category,
            show_completed,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        let category_ok = self.category.as_deref().is_none_or(|c| task.category == c);
        let status_ok = self.show_completed || task.status == TaskStatus::Pending;
        category_ok && status_ok
    }

    /// Matching tasks, in their original order
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}
