use std::path::Path;

use crate::engine::{
    EngineConfig, DEFAULT_ACCEPTANCE_THRESHOLD, DEFAULT_CAPACITY_PER_WORKER,
    DEFAULT_MAX_WORKERS_PER_TASK,
};
use crate::estimator::DEFAULT_BASE_TIME;
use crate::sprint::{DEFAULT_MAX_SPRINTS, DEFAULT_SPRINT_CAPACITY};

use super::cli::CliArgs;
use super::{env, toml};

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "allot.toml";

/// Allot configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Hours each worker can absorb per run.
    pub capacity_per_worker: f64,
    /// Most workers accepted onto one task.
    pub max_workers_per_task: usize,
    /// Combined score a worker must exceed to be accepted.
    pub acceptance_threshold: f64,
    /// Hours per sprint.
    pub sprint_capacity: f64,
    /// Maximum sprints to emit (at least 1).
    pub sprints_max: usize,
    /// Base time `B` for the duration model, in hours.
    pub base_time: f64,
    /// Path to the task batch (JSON or TOML).
    pub files_tasks: String,
    /// Path to the roster (CSV, JSON or TOML).
    pub files_roster: String,
    /// Optional role-to-skill knowledge base replacing the built-in table.
    pub files_roles: Option<String>,
    /// Optional run journal.
    pub files_journal: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity_per_worker: DEFAULT_CAPACITY_PER_WORKER,
            max_workers_per_task: DEFAULT_MAX_WORKERS_PER_TASK,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            sprint_capacity: DEFAULT_SPRINT_CAPACITY,
            sprints_max: DEFAULT_MAX_SPRINTS,
            base_time: DEFAULT_BASE_TIME,
            files_tasks: "tasks.json".to_string(),
            files_roster: "roster.csv".to_string(),
            files_roles: None,
            files_journal: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults. A missing
    /// `allot.toml` is fine; an unreadable or malformed one is an error.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ref path) = cli_args.config {
            config.merge_from(&Self::load_from_file(path)?);
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            config.merge_from(&Self::load_from_file(DEFAULT_CONFIG_FILE)?);
        }

        config.apply_env();
        config.apply_cli(cli_args);

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub(super) fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    fn apply_env(&mut self) {
        env::apply_env(self);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(n) = args.capacity {
            self.capacity_per_worker = n;
        }
        if let Some(n) = args.max_workers {
            self.max_workers_per_task = n;
        }
        if let Some(n) = args.threshold {
            self.acceptance_threshold = n;
        }
        if let Some(n) = args.sprint_capacity {
            self.sprint_capacity = n;
        }
        if let Some(n) = args.max_sprints {
            self.sprints_max = n;
        }
        if let Some(n) = args.base_time {
            self.base_time = n;
        }
        if let Some(ref path) = args.tasks_file {
            self.files_tasks = path.clone();
        }
        if let Some(ref path) = args.roster_file {
            self.files_roster = path.clone();
        }
        if let Some(ref path) = args.roles_file {
            self.files_roles = non_empty(path);
        }
        if let Some(ref path) = args.journal {
            self.files_journal = non_empty(path);
        }
    }

    /// Merge values from another config (for file-based config).
    fn merge_from(&mut self, other: &Self) {
        *self = other.clone();
    }

    /// Numeric settings for the engine.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            capacity_per_worker: self.capacity_per_worker,
            max_workers_per_task: self.max_workers_per_task,
            acceptance_threshold: self.acceptance_threshold,
            sprint_capacity: self.sprint_capacity,
            max_sprints: self.sprints_max,
            base_time: self.base_time,
            ..EngineConfig::default()
        }
    }

    /// Generate default allot.toml content.
    pub fn default_toml() -> String {
        format!(
            r#"# Allot configuration

[allocation]
capacity_per_worker = {:.1}  # hours per worker
max_workers_per_task = {}
acceptance_threshold = {}

[sprints]
capacity = {:.1}  # hours per sprint
max = {}  # must be at least 1

[estimation]
base_time = {:.1}  # hours

[files]
tasks = "tasks.json"
roster = "roster.csv"
roles = ""
journal = ""
"#,
            DEFAULT_CAPACITY_PER_WORKER,
            DEFAULT_MAX_WORKERS_PER_TASK,
            DEFAULT_ACCEPTANCE_THRESHOLD,
            DEFAULT_SPRINT_CAPACITY,
            DEFAULT_MAX_SPRINTS,
            DEFAULT_BASE_TIME,
        )
    }
}

/// `None` for an empty path, which switches an optional file off.
pub(super) fn non_empty(path: &str) -> Option<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {0}")]
    Io(String),
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
}
