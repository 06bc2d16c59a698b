use allot::config::Config;
use allot::engine::Engine;
use allot::journal::Journal;
use allot::matcher::{KeywordMatcher, RoleSkillTable};
use allot::model::{Task, Worker};
use allot::roster;
use allot::run_id::generate_run_id;

/// Load the roster named by the config.
pub fn load_roster(config: &Config) -> Result<Vec<Worker>, String> {
    roster::load_roster(&config.files_roster).map_err(|e| e.to_string())
}

/// Load the task batch named by the config.
pub fn load_tasks(config: &Config) -> Result<Vec<Task>, String> {
    roster::load_tasks(&config.files_tasks).map_err(|e| e.to_string())
}

/// The configured knowledge base, or the built-in one.
pub fn load_roles(config: &Config) -> Result<RoleSkillTable, String> {
    match config.files_roles {
        Some(ref path) => RoleSkillTable::load(path).map_err(|e| e.to_string()),
        None => Ok(RoleSkillTable::default()),
    }
}

/// Build an engine over the configured roster and knowledge base.
pub fn build_engine(config: &Config) -> Result<Engine, String> {
    let roster = load_roster(config)?;
    let table = load_roles(config)?;
    let engine = Engine::new(config.engine_config(), roster).map_err(|e| e.to_string())?;
    Ok(engine.with_matcher(KeywordMatcher::new(table)))
}

/// Append a journal line when a journal is configured.
///
/// A journal that cannot be written is reported on stderr; the command
/// itself still succeeds.
pub fn record(config: &Config, command: &str, summary: &str) {
    let Some(ref path) = config.files_journal else {
        return;
    };
    let journal = Journal::new(path, &generate_run_id());
    if let Err(e) = journal.record(command, summary) {
        tracing::warn!(path = %path, error = %e, "failed to write journal");
    }
}
