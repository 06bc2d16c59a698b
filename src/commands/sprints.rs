use allot::config::{CliArgs, Config};
use allot::engine::Engine;

use super::inputs;
use crate::output;

/// Estimate the configured batch and pack it into sprints.
pub fn cmd_sprints(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let tasks = inputs::load_tasks(config)?;
    let roster = inputs::load_roster(config)?;
    let engine = Engine::new(config.engine_config(), roster).map_err(|e| e.to_string())?;
    let plan = engine.pack_sprints(&engine.estimate(&tasks));

    inputs::record(
        config,
        "sprints",
        &format!(
            "{} sprint(s), {}h, {} unplaced",
            plan.sprints.len(),
            output::hours(plan.total_hours),
            plan.unplaced.len()
        ),
    );

    if cli.json {
        return output::print_json(&plan);
    }
    output::print_sprints(&plan);
    Ok(())
}
