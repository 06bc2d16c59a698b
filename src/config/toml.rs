use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::types::{non_empty, Config, ConfigError};

/// On-disk shape of allot.toml. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    allocation: AllocationSection,
    sprints: SprintsSection,
    estimation: EstimationSection,
    files: FilesSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AllocationSection {
    capacity_per_worker: Option<f64>,
    max_workers_per_task: Option<usize>,
    acceptance_threshold: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SprintsSection {
    capacity: Option<f64>,
    max: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EstimationSection {
    base_time: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FilesSection {
    tasks: Option<String>,
    roster: Option<String>,
    roles: Option<String>,
    journal: Option<String>,
}

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let file: ConfigFile =
        ::toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    let mut config = Config::default();

    let allocation = file.allocation;
    if let Some(n) = allocation.capacity_per_worker {
        config.capacity_per_worker = n;
    }
    if let Some(n) = allocation.max_workers_per_task {
        config.max_workers_per_task = n;
    }
    if let Some(n) = allocation.acceptance_threshold {
        config.acceptance_threshold = n;
    }

    if let Some(n) = file.sprints.capacity {
        config.sprint_capacity = n;
    }
    if let Some(n) = file.sprints.max {
        config.sprints_max = n;
    }

    if let Some(n) = file.estimation.base_time {
        config.base_time = n;
    }

    let files = file.files;
    if let Some(path) = files.tasks {
        config.files_tasks = path;
    }
    if let Some(path) = files.roster {
        config.files_roster = path;
    }
    if let Some(path) = files.roles {
        config.files_roles = non_empty(&path);
    }
    if let Some(path) = files.journal {
        config.files_journal = non_empty(&path);
    }

    Ok(config)
}
