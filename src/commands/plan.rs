use allot::config::{CliArgs, Config};
use allot::tui;

use super::inputs;
use crate::output;

/// Estimate, allocate and pack the configured batch.
pub fn cmd_plan(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let tasks = inputs::load_tasks(config)?;
    let mut engine = inputs::build_engine(config)?;
    let plan = engine.plan(&tasks).map_err(|e| e.to_string())?;

    let staffed = plan.assignments.len() - plan.unstaffed().count();
    inputs::record(
        config,
        "plan",
        &format!(
            "{} tasks, {} staffed, {}h, {} sprint(s)",
            plan.assignments.len(),
            staffed,
            output::hours(plan.total_estimated_hours),
            plan.sprints.sprints.len()
        ),
    );

    if cli.tui {
        tui::run_viewer(plan).map_err(|e| format!("viewer failed: {}", e))
    } else if cli.json {
        output::print_json(&plan)
    } else {
        output::print_plan(&plan);
        Ok(())
    }
}
