// CSV export

use crate::models::Task;
use eyre::{Context, Result};
use std::path::Path;
use tracing::info;

/// Write `tasks` to `path` as CSV
///
/// The header row comes from the task field names. An empty list produces an
/// empty file: there is no first task to take columns from.
pub fn export_tasks<P: AsRef<Path>>(tasks: &[Task], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer =
        csv::Writer::from_path(path).wrap_err_with(|| format!("Failed to create export file {}", path.display()))?;

    for task in tasks {
        writer
            .serialize(task)
            .wrap_err_with(|| format!("Failed to write task '{}'", task.title))?;
    }
    writer
        .flush()
        .wrap_err_with(|| format!("Failed to flush export file {}", path.display()))?;

    info!(file = ?path, count = tasks.len(), "Exported tasks");
    Ok(())
}
