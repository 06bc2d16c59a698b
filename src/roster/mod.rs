//! Loading worker rosters and task batches from disk.
//!
//! Rosters come as CSV exports (`Name,Role,Technologies,Experience` with
//! colon-joined token columns), JSON or TOML. Task batches come as JSON or
//! TOML. The format is picked from the file extension.

mod parse;


pub use parse::parse_roster_csv;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RosterError;
use crate::model::{Task, Worker};

const ROSTER_FORMATS: &str = ".csv, .json or .toml";
const TASK_FORMATS: &str = ".json or .toml";

/// Input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
    Toml,
}

impl Format {
    /// Format implied by a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            _ => None,
        }
    }
}

/// Either a bare list or a list under a named key.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonList<T> {
    Bare(Vec<T>),
    Workers { workers: Vec<T> },
    Tasks { tasks: Vec<T> },
}

impl<T> JsonList<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            JsonList::Bare(items) => items,
            JsonList::Workers { workers } => workers,
            JsonList::Tasks { tasks } => tasks,
        }
    }
}

#[derive(Deserialize)]
struct RosterFile {
    #[serde(default)]
    workers: Vec<Worker>,
}

#[derive(Deserialize)]
struct TaskFile {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Parse roster text in the given format.
pub fn parse_roster(content: &str, format: Format) -> Result<Vec<Worker>, RosterError> {
    match format {
        Format::Csv => parse_roster_csv(content),
        Format::Json => Ok(serde_json::from_str::<JsonList<Worker>>(content)?.into_vec()),
        Format::Toml => Ok(toml::from_str::<RosterFile>(content)?.workers),
    }
}

/// Parse a JSON task batch: a bare array or `{"tasks": [...]}`.
pub fn parse_tasks_json(content: &str) -> Result<Vec<Task>, RosterError> {
    Ok(serde_json::from_str::<JsonList<Task>>(content)?.into_vec())
}

/// Parse a TOML task batch made of `[[tasks]]` tables.
pub fn parse_tasks_toml(content: &str) -> Result<Vec<Task>, RosterError> {
    Ok(toml::from_str::<TaskFile>(content)?.tasks)
}

fn read(path: &Path) -> Result<String, RosterError> {
    fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn unsupported(path: &Path, expected: &'static str) -> RosterError {
    RosterError::UnsupportedFormat {
        path: path.display().to_string(),
        expected,
    }
}

/// Load a roster file.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Worker>, RosterError> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| unsupported(path, ROSTER_FORMATS))?;
    let workers = parse_roster(&read(path)?, format)?;
    tracing::debug!(path = %path.display(), workers = workers.len(), "loaded roster");
    Ok(workers)
}

/// Load a task batch file.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, RosterError> {
    let path = path.as_ref();
    let tasks = match Format::from_path(path) {
        Some(Format::Json) => parse_tasks_json(&read(path)?)?,
        Some(Format::Toml) => parse_tasks_toml(&read(path)?)?,
        _ => return Err(unsupported(path, TASK_FORMATS)),
    };
    tracing::debug!(path = %path.display(), tasks = tasks.len(), "loaded tasks");
    Ok(tasks)
}
