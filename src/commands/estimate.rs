use allot::config::{CliArgs, Config};
use allot::engine::Engine;
use allot::model::Task;

use super::inputs;
use crate::output;

/// Print estimated durations for the configured batch.
pub fn cmd_estimate(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let tasks = inputs::load_tasks(config)?;
    let roster = inputs::load_roster(config)?;
    let engine = Engine::new(config.engine_config(), roster).map_err(|e| e.to_string())?;
    let estimated = engine.estimate(&tasks);

    let total: f64 = estimated.iter().map(Task::estimated_hours).sum();
    inputs::record(
        config,
        "estimate",
        &format!("{} tasks, {}h", estimated.len(), output::hours(total)),
    );

    if cli.json {
        return output::print_json(&estimated);
    }
    output::print_estimates(&estimated);
    Ok(())
}
