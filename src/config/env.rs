use std::env;
use std::str::FromStr;

use super::types::{non_empty, Config};

pub(super) fn apply_env(config: &mut Config) {
    apply_env_from(config, |key| env::var(key).ok());
}

/// Apply `ALLOT_*` variables read through `lookup`. Values that do not parse
/// are ignored.
pub(super) fn apply_env_from<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(n) = parsed(&lookup, "ALLOT_CAPACITY_PER_WORKER") {
        config.capacity_per_worker = n;
    }
    if let Some(n) = parsed(&lookup, "ALLOT_MAX_WORKERS_PER_TASK") {
        config.max_workers_per_task = n;
    }
    if let Some(n) = parsed(&lookup, "ALLOT_ACCEPTANCE_THRESHOLD") {
        config.acceptance_threshold = n;
    }
    if let Some(n) = parsed(&lookup, "ALLOT_SPRINT_CAPACITY") {
        config.sprint_capacity = n;
    }
    if let Some(n) = parsed(&lookup, "ALLOT_MAX_SPRINTS") {
        config.sprints_max = n;
    }
    if let Some(n) = parsed(&lookup, "ALLOT_BASE_TIME") {
        config.base_time = n;
    }
    if let Some(val) = lookup("ALLOT_TASKS_FILE") {
        config.files_tasks = val;
    }
    if let Some(val) = lookup("ALLOT_ROSTER_FILE") {
        config.files_roster = val;
    }
    if let Some(val) = lookup("ALLOT_ROLES_FILE") {
        config.files_roles = non_empty(&val);
    }
    if let Some(val) = lookup("ALLOT_JOURNAL") {
        config.files_journal = non_empty(&val);
    }
}

fn parsed<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}
