// Task operations: add, list, update
//
// Each takes the loaded list; mutating operations persist through the given storage.

use crate::filter::TaskFilter;
use crate::models::{Task, TaskStatus};
use crate::store::Storage;
use eyre::Result;
use tracing::{debug, info};

/// Result of `update_task_status`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Index of the task that was changed
    Updated(usize),
    NotFound,
}

/// Append a new pending task and persist the list
pub fn add_task<S: Storage + ?Sized>(
    store: &S,
    tasks: &mut Vec<Task>,
    title: &str,
    category: &str,
    due_date: &str,
) -> Result<()> {
    tasks.push(Task::new(title, category, due_date));
    store.save(tasks)?;

    info!(title, category, due_date, "Task added");
    Ok(())
}

/// Tasks selected by `filter`, in insertion order
pub fn list_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> Vec<&'a Task> {
    let selected = filter.apply(tasks);
    debug!(total = tasks.len(), shown = selected.len(), ?filter, "Listing tasks");
    selected
}

/// Set the status of the first task titled `title`
///
/// Titles match exactly. Nothing is saved when no task matches.
pub fn update_task_status<S: Storage + ?Sized>(
    store: &S,
    tasks: &mut [Task],
    title: &str,
    status: TaskStatus,
) -> Result<UpdateOutcome> {
    let Some(index) = tasks.iter().position(|t| t.title == title) else {
        debug!(title, "No task with this title");
        return Ok(UpdateOutcome::NotFound);
    };

    tasks[index].status = status;
    store.save(tasks)?;

    info!(title, %status, index, "Task status updated");
    Ok(UpdateOutcome::Updated(index))
}
