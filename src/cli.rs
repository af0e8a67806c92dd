//! CLI command definitions and subcommands

use crate::models::TaskStatus;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "taskorg")]
#[command(about = "Task Organizer - track, filter, update and export personal tasks")]
#[command(version = env!("GIT_DESCRIBE"))]
pub struct Cli {
    /// Path to the tasks file (default: tasks.json, or `tasks-file` from config)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Task category
        category: String,

        /// Due date (YYYY-MM-DD)
        due_date: String,
    },

    /// List tasks
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,

        /// Include completed tasks
        #[arg(long)]
        show_completed: bool,
    },

    /// Update task status
    Update {
        /// Task title
        title: String,

        /// New status
        status: TaskStatus,
    },

    /// Export tasks to a CSV file
    Export {
        /// CSV file name to export tasks
        filename: PathBuf,
    },
}
