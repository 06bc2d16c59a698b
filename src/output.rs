use serde::Serialize;

use allot::allocator::Assignment;
use allot::color::{self, emoji};
use allot::engine::{self, ProjectPlan};
use allot::matcher::RoleSkillTable;
use allot::model::Task;
use allot::sprint::{self, SprintPlan};
use allot::utilization::UtilizationEntry;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to encode JSON: {}", e))?;
    println!("{}", text);
    Ok(())
}

/// Print the full plan report.
pub(crate) fn print_plan(plan: &ProjectPlan) {
    print_estimates(&plan.tasks);
    print_assignments(&plan.assignments);
    print_utilization(&plan.utilization);
    print_sprints(&plan.sprints);

    let unstaffed = plan.unstaffed().count();
    println!("=== {} {} ===", emoji::ROCKET, color::label("PLAN SUMMARY"));
    println!("  Tasks:            {}", color::number(plan.assignments.len()));
    println!("  Estimated hours:  {}", color::number(hours(plan.total_estimated_hours)));
    println!("  Sprints:          {}", color::number(plan.sprints.sprints.len()));
    if unstaffed > 0 {
        println!("  {} Unstaffed:      {}", emoji::WARNING, color::warning(&unstaffed.to_string()));
    }
    println!();
}

/// Print estimated durations, one row per task.
pub(crate) fn print_estimates(tasks: &[Task]) {
    println!("{} {}:", emoji::CLOCK, color::label("Estimates"));
    for task in tasks {
        println!(
            "  {:<32} {:>8}h  {}",
            task.name,
            hours(task.estimated_hours()),
            color::timestamp(&format!(
                "complexity {:.1}  risk {:.2}  priority {:.2}",
                task.complexity, task.risk, task.priority
            ))
        );
    }
    let total: f64 = tasks.iter().map(Task::estimated_hours).sum();
    println!("  {:<32} {:>8}h", color::label("Total"), hours(total));
    println!();
}

/// Print every assignment with its accepted workers' scores.
pub(crate) fn print_assignments(assignments: &[Assignment]) {
    println!("{} {}:", emoji::TASK, color::label("Assignments"));
    for assignment in assignments {
        let task = &assignment.task;
        println!(
            "  {} {}",
            color::label(&task.name),
            color::timestamp(&format!("({}h)", hours(task.estimated_hours())))
        );
        if !assignment.is_staffed() {
            println!("    {} {}", emoji::CROSS, color::error("no qualified worker"));
            continue;
        }
        for worker in &assignment.workers {
            println!(
                "    {:<20} S {:>6.2}  W {:.3}  C {:.3}  Y {}  {:>7}h",
                color::worker(&worker.name),
                worker.skill_score,
                worker.workload_factor,
                worker.complexity_fit,
                color::score(worker.combined_score),
                hours(worker.allocated_hours)
            );
        }
    }
    println!();
}

/// Print the utilization table.
pub(crate) fn print_utilization(entries: &[UtilizationEntry]) {
    println!("{} {}:", emoji::TEAM, color::label("Utilization"));
    if entries.is_empty() {
        println!("  (no hours committed)");
    }
    for entry in entries {
        println!(
            "  {:<20} {:>8}h  {}",
            color::worker(&entry.name),
            hours(entry.committed_hours),
            color::load_status(
                entry.status,
                &format!("{:>6.1}%  {}", entry.utilization_percent, entry.status)
            )
        );
    }
    println!();
}

/// Print the sprint plan.
pub(crate) fn print_sprints(plan: &SprintPlan) {
    println!("{} {}:", emoji::SPRINT, color::label("Sprints"));
    for sprint in &plan.sprints {
        println!(
            "  Sprint {} {}",
            color::number(sprint.index),
            color::timestamp(&format!("({}h)", hours(sprint.total_hours)))
        );
        for task in &sprint.tasks {
            println!("    {:<32} {:>8}h", task.name, hours(task.sprint_hours()));
        }
    }
    if plan.truncated {
        println!(
            "  {} {}",
            emoji::WARNING,
            color::warning(&format!(
                "sprint limit reached, {} task(s) not placed",
                plan.unplaced.len()
            ))
        );
        for task in &plan.unplaced {
            println!("    {}", task.name);
        }
    }
    println!();
}

/// Print the knowledge base.
pub(crate) fn print_roles(table: &RoleSkillTable) {
    println!(
        "{} {} (version {}, {} roles):",
        emoji::BRAIN,
        color::label("Role knowledge base"),
        table.version(),
        color::number(table.len())
    );
    for (role, keywords) in table.entries() {
        println!("  {:<28} {}", color::info(role), keywords.join(", "));
    }
}

/// Format hours for display, rounded to 2 places.
pub(crate) fn hours(value: f64) -> String {
    format!("{:.2}", value)
}

pub(crate) fn print_help() {
    println!(
        r#"allot - task allocation and sprint planning for a team roster

USAGE:
    allot [OPTIONS] [COMMAND]

COMMANDS:
    plan                  Estimate, allocate and pack sprints (default)
    allocate              Estimate and allocate; show assignments and utilization
    estimate              Show estimated durations
    sprints               Estimate and pack sprints
    roles                 Show the role-to-skill knowledge base
    init                  Write a default allot.toml

OPTIONS:
    -h, --help                Show this help message
    -V, --version             Show version
    -c, --config <PATH>       Path to config file [default: allot.toml]
    --tasks <PATH>            Task batch (.json or .toml) [default: tasks.json]
    --roster <PATH>           Roster (.csv, .json or .toml) [default: roster.csv]
    --roles <PATH>            Knowledge base override (.toml)
    --capacity <HOURS>        Hours per worker [default: {capacity}]
    --max-workers <N>         Workers per task [default: {max_workers}]
    --threshold <Y>           Minimum combined score to accept [default: {threshold}]
    --sprint-capacity <HOURS> Hours per sprint [default: {sprint_capacity}]
    --max-sprints <N>         Sprint limit, at least 1 [default: {max_sprints}]
    --base-time <HOURS>       Base time for estimates [default: {base_time}]
    --journal <PATH>          Append a line per run to this journal
    --json                    Emit JSON instead of text
    --tui                     Open the interactive viewer (plan only)

ENVIRONMENT:
    ALLOT_LOG                 Log filter for stderr diagnostics [default: warn]

EXAMPLES:
    allot init                                Write allot.toml
    allot --roster team.csv --tasks q3.json   Plan a batch
    allot allocate --json                     Assignments as JSON
    allot plan --tui                          Browse the plan"#,
        capacity = engine::DEFAULT_CAPACITY_PER_WORKER,
        max_workers = engine::DEFAULT_MAX_WORKERS_PER_TASK,
        threshold = engine::DEFAULT_ACCEPTANCE_THRESHOLD,
        sprint_capacity = sprint::DEFAULT_SPRINT_CAPACITY,
        max_sprints = sprint::DEFAULT_MAX_SPRINTS,
        base_time = allot::estimator::DEFAULT_BASE_TIME,
    );
}
