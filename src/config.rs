//! taskorg configuration types and loading

use crate::store::DEFAULT_TASKS_FILE;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = ".taskorg.yml";

/// Main taskorg configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the task list is persisted
    #[serde(rename = "tasks-file")]
    pub tasks_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// An explicit path must load. The local and user config files are optional,
    /// and a broken one is skipped with a warning.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("taskorg").join("taskorg.yml"));
        }

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {:#}", candidate.display(), e);
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Apply a `--file` override
    pub fn with_tasks_file(mut self, tasks_file: Option<PathBuf>) -> Self {
        if let Some(path) = tasks_file {
            self.tasks_file = path;
        }
        self
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        // An empty YAML document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::debug!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
