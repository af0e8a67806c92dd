// taskorg - Personal task organizer backed by a single JSON file

pub mod cli;
pub mod config;
pub mod export;
pub mod filter;
pub mod models;
pub mod ops;
pub mod store;
pub mod table;

// Re-export main types for convenience
pub use config::Config;
pub use export::export_tasks;
pub use filter::TaskFilter;
pub use models::{Task, TaskStatus};
pub use ops::{UpdateOutcome, add_task, list_tasks, update_task_status};
pub use store::{Storage, Store};
