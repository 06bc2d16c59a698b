use serde_json::json;

use allot::config::{CliArgs, Config};

use super::inputs;
use crate::output;

/// Estimate and staff the configured batch.
pub fn cmd_allocate(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let tasks = inputs::load_tasks(config)?;
    let mut engine = inputs::build_engine(config)?;
    let estimated = engine.estimate(&tasks);
    let assignments = engine.allocate(&estimated).map_err(|e| e.to_string())?;
    let utilization = engine.utilization();

    let staffed = assignments.iter().filter(|a| a.is_staffed()).count();
    inputs::record(
        config,
        "allocate",
        &format!(
            "{} tasks, {} staffed, {}h committed",
            assignments.len(),
            staffed,
            output::hours(engine.ledger().total())
        ),
    );

    if cli.json {
        return output::print_json(&json!({
            "assignments": assignments,
            "utilization": utilization,
        }));
    }

    output::print_assignments(&assignments);
    output::print_utilization(&utilization);
    Ok(())
}
