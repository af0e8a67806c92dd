// Data models for taskorg

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single tracked task
///
/// Field order here is the column order of both the list table and the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    pub title: String,
    pub category: String,
    /// `YYYY-MM-DD`, stored as given
    pub due_date: String,
    pub status: TaskStatus,
}

impl Task {
    /// Column names, matching the serialized field names
    pub const FIELDS: [&'static str; 4] = ["title", "category", "due_date", "status"];

    /// Create a new pending task
    pub fn new(title: impl Into<String>, category: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            due_date: due_date.into(),
            status: TaskStatus::Pending,
        }
    }

    /// Field values in `FIELDS` order
    pub fn values(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.category.as_str(),
            self.due_date.as_str(),
            self.status.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum TaskStatus {
    #[default]
    #[value(name = "Pending")]
    Pending,
    #[value(name = "Completed")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
