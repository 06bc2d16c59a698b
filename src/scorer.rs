//! Per-(task, worker) scoring: `Y = S × W × C`.
//!
//! - S, skill match, comes from a [`SkillMatcher`].
//! - W, workload factor, decays smoothly once a worker would exceed capacity.
//! - C, complexity fit, compares the worker's experience to the task's
//!   complexity and risk.

use serde::Serialize;

use crate::ledger::CapacityLedger;
use crate::matcher::SkillMatcher;
use crate::model::{Task, Worker};

/// Complexity fit for a worker with no experience on record.
pub const NEUTRAL_COMPLEXITY_FIT: f64 = 0.5;
/// Lower bound on complexity fit.
pub const MIN_COMPLEXITY_FIT: f64 = 0.1;
/// Experience (years) that corresponds to the top of the complexity scale.
const EXPERIENCE_SCALE: f64 = 6.0;
/// Top of the task complexity scale.
const COMPLEXITY_SCALE: f64 = 10.0;

/// Workload factor (W).
///
/// ```text
/// ratio = (committed + task_hours) / capacity
/// W     = 1                        if ratio <= 1
///       = 1 / (1 + 2 (ratio - 1))  otherwise
/// ```
///
/// `capacity` must be positive. The result lies in (0, 1].
pub fn workload_factor(committed: f64, task_hours: f64, capacity: f64) -> f64 {
    let ratio = (committed + task_hours) / capacity;
    if ratio <= 1.0 {
        1.0
    } else {
        1.0 / (1.0 + 2.0 * (ratio - 1.0))
    }
}

/// Complexity fit (C).
///
/// Peaks when the worker's strongest experience matches the task's
/// complexity rescaled to years; average experience buys risk tolerance.
/// Never below [`MIN_COMPLEXITY_FIT`].
pub fn complexity_fit(worker: &Worker, complexity: f64, risk: f64) -> f64 {
    let (Some(avg_exp), Some(max_exp)) = (worker.average_experience(), worker.max_experience())
    else {
        return NEUTRAL_COMPLEXITY_FIT;
    };

    let scaled = complexity / COMPLEXITY_SCALE * EXPERIENCE_SCALE;
    let experience_fit = (1.0 - (max_exp - scaled).abs() / EXPERIENCE_SCALE).clamp(0.0, 1.0);
    let risk_tolerance = (avg_exp / EXPERIENCE_SCALE).min(1.0);

    (0.7 * experience_fit + 0.3 * (1.0 - risk) * risk_tolerance).max(MIN_COMPLEXITY_FIT)
}

/// The three factors and their product for one (task, worker) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub skill: f64,
    pub workload: f64,
    pub complexity_fit: f64,
    pub combined: f64,
}

/// Scores workers against tasks, reading committed hours from a ledger.
#[derive(Clone, Copy)]
pub struct Scorer<'a> {
    matcher: &'a dyn SkillMatcher,
    ledger: &'a CapacityLedger,
    capacity: f64,
}

impl<'a> Scorer<'a> {
    pub fn new(matcher: &'a dyn SkillMatcher, ledger: &'a CapacityLedger, capacity: f64) -> Self {
        Self {
            matcher,
            ledger,
            capacity,
        }
    }

    /// Score one worker for one task. The workload factor weighs the task's
    /// full estimated hours against the worker's current commitment.
    pub fn score(&self, worker: &Worker, task: &Task) -> ScoreBreakdown {
        let skill = self.matcher.score(worker, &task.required_roles);
        let workload = workload_factor(
            self.ledger.committed(&worker.name),
            task.estimated_hours(),
            self.capacity,
        );
        let complexity_fit = complexity_fit(worker, task.complexity, task.risk);

        ScoreBreakdown {
            skill,
            workload,
            complexity_fit,
            combined: skill * workload * complexity_fit,
        }
    }
}
