// Whole-file JSON persistence for the task list

use crate::models::Task;
use eyre::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default tasks file name, relative to the working directory
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Load/save seam for the task list
///
/// Operations only ever need the full list in and the full list out.
pub trait Storage {
    /// Read every task, in insertion order
    fn load(&self) -> Result<Vec<Task>>;

    /// Replace the persisted list with `tasks`
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

/// Task list stored as a single pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open a store backed by the file at `path`
    ///
    /// Nothing is touched on disk until the first `save`.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Storage for Store {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            debug!(file = ?self.path, "Tasks file does not exist, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read tasks file {}", self.path.display()))?;

        let tasks: Vec<Task> = serde_json::from_str(&content)
            .wrap_err_with(|| format!("Malformed tasks file {}", self.path.display()))?;

        debug!(file = ?self.path, count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).wrap_err_with(|| format!("Failed to create directory {}", dir.display()))?;

        // Write next to the target, then rename over it
        let mut tmp = NamedTempFile::new_in(dir).context("Failed to create temporary tasks file")?;
        {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut tmp, formatter);
            tasks.serialize(&mut ser).context("Failed to serialize tasks")?;
        }
        writeln!(tmp)?;
        tmp.as_file().sync_all()?;

        tmp.persist(&self.path)
            .wrap_err_with(|| format!("Failed to write tasks file {}", self.path.display()))?;

        info!(file = ?self.path, count = tasks.len(), "Saved tasks");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new("Pay rent", "Home", "2024-02-01");
        done.status = TaskStatus::Completed;
        vec![
            Task::new("Write report", "Work", "2024-01-15"),
            done,
            Task::new("Call \"Bob\", maybe", "Personal", "2024-03-10"),
        ]
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("tasks.json"));

        let tasks = store.load().unwrap();
        assert!(tasks.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("tasks.json"));

        let tasks = sample_tasks();
        store.save(&tasks).unwrap();

        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("tasks.json"));

        store.save(&sample_tasks()).unwrap();
        let single = vec![Task::new("Only", "One", "2024-05-05")];
        store.save(&single).unwrap();

        assert_eq!(store.load().unwrap(), single);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("tasks.json"));

        store.save(&[Task::new("Write report", "Work", "2024-01-15")]).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        let expected = "[\n    {\n        \"title\": \"Write report\",\n        \"category\": \"Work\",\n        \"due_date\": \"2024-01-15\",\n        \"status\": \"Pending\"\n    }\n]\n";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_save_empty_list() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("tasks.json"));

        store.save(&[]).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = Store::open(temp.path().join("nested/dir/tasks.json"));

        store.save(&sample_tasks()).unwrap();
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn test_load_malformed_json_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{not json").unwrap();

        let err = Store::open(&path).load().unwrap_err();
        assert!(format!("{:#}", err).contains("Malformed tasks file"));
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        // Object instead of array
        fs::write(&path, r#"{"title":"a"}"#).unwrap();
        assert!(Store::open(&path).load().is_err());

        // Unknown status value
        fs::write(
            &path,
            r#"[{"title":"a","category":"b","due_date":"2024-01-01","status":"Done"}]"#,
        )
        .unwrap();
        assert!(Store::open(&path).load().is_err());

        // Extra field
        fs::write(
            &path,
            r#"[{"title":"a","category":"b","due_date":"2024-01-01","status":"Pending","notes":""}]"#,
        )
        .unwrap();
        assert!(Store::open(&path).load().is_err());
    }

    #[test]
    fn test_load_accepts_compact_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(
            &path,
            r#"[{"title":"a","category":"b","due_date":"2024-01-01","status":"Completed"}]"#,
        )
        .unwrap();

        let tasks = Store::open(&path).load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Completed);
    }
}
