//! Task duration model.
//!
//! ```text
//! E_T = 0.8·B·(1 + C/C_max + R/R_max + Pr/Pr_max)
//!     + 0.2·B·(0.05·T/T_max + 0.05·S_max/S_cov + 0.05·P_T/T)
//! ```
//!
//! Complexity, risk and priority are normalized by the batch maximum of each
//! field. `S_cov` is the summed experience of roster workers listing a
//! required role as an exact technology token. `T_max` and `P_T` default to
//! the roster size, which makes their terms 1; [`EstimatorHooks`] overrides
//! them. Without a roster the estimate falls back to
//! `0.3·B·(1 + complexity + risk + priority)`.

use crate::model::{Task, Worker};

/// Default base time `B`, in hours.
pub const DEFAULT_BASE_TIME: f64 = 10.0;

/// Floor for a task's skill coverage.
const MIN_SKILL_COVERAGE: f64 = 1.0;

/// Overrides for the team-size terms of the model.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimatorHooks {
    /// `T_max`; the roster size when unset.
    pub team_size_max: Option<f64>,
    /// `P_T`, workers participating; the roster size when unset.
    pub participating: Option<f64>,
}

/// Duration estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimator {
    base_time: f64,
    hooks: EstimatorHooks,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_TIME)
    }
}

impl Estimator {
    pub fn new(base_time: f64) -> Self {
        Self {
            base_time,
            hooks: EstimatorHooks::default(),
        }
    }

    pub fn with_hooks(mut self, hooks: EstimatorHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn base_time(&self) -> f64 {
        self.base_time
    }

    /// Estimated hours for every task in the batch, in batch order.
    pub fn durations(&self, tasks: &[Task], roster: &[Worker]) -> Vec<f64> {
        match self.model_durations(tasks, roster) {
            Some(durations) => durations,
            None => {
                tracing::warn!(
                    tasks = tasks.len(),
                    workers = roster.len(),
                    "duration model unavailable; using fallback estimate"
                );
                tasks.iter().map(|task| self.fallback(task)).collect()
            }
        }
    }

    /// Fill `estimated_time` on every task.
    pub fn estimate_in_place(&self, tasks: &mut [Task], roster: &[Worker]) {
        let durations = self.durations(tasks, roster);
        for (task, hours) in tasks.iter_mut().zip(durations) {
            task.estimated_time = Some(hours);
        }
    }

    /// Copy of the batch with `estimated_time` filled.
    pub fn estimate(&self, tasks: &[Task], roster: &[Worker]) -> Vec<Task> {
        let mut estimated = tasks.to_vec();
        self.estimate_in_place(&mut estimated, roster);
        estimated
    }

    /// Estimate from the task's own scores only.
    pub fn fallback(&self, task: &Task) -> f64 {
        round2(0.3 * self.base_time * (1.0 + task.complexity + task.risk + task.priority))
    }

    /// The full model, or `None` when a team-size denominator is zero.
    fn model_durations(&self, tasks: &[Task], roster: &[Worker]) -> Option<Vec<f64>> {
        let team_size = roster.len() as f64;
        let team_size_max = self.hooks.team_size_max.unwrap_or(team_size);
        let participating = self.hooks.participating.unwrap_or(team_size);
        if team_size <= 0.0 || team_size_max <= 0.0 {
            return None;
        }

        let complexity_max = batch_max(tasks, |t| t.complexity);
        let risk_max = batch_max(tasks, |t| t.risk);
        let priority_max = batch_max(tasks, |t| t.priority);

        let coverage: Vec<f64> = tasks.iter().map(|t| skill_coverage(t, roster)).collect();
        let coverage_max = coverage.iter().copied().fold(MIN_SKILL_COVERAGE, f64::max);

        let b = self.base_time;
        let durations = tasks
            .iter()
            .zip(&coverage)
            .map(|(task, &s_cov)| {
                let load = 1.0
                    + ratio(task.complexity, complexity_max)
                    + ratio(task.risk, risk_max)
                    + ratio(task.priority, priority_max);
                let team = 0.05 * (team_size / team_size_max)
                    + 0.05 * (coverage_max / s_cov)
                    + 0.05 * (participating / team_size);
                round2(0.8 * b * load + 0.2 * b * team)
            })
            .collect();

        Some(durations)
    }
}

/// Summed experience of roster workers whose technologies contain one of the
/// task's roles as an exact token. At least 1.
pub fn skill_coverage(task: &Task, roster: &[Worker]) -> f64 {
    let mut total = 0.0;
    for worker in roster {
        for role in &task.required_roles {
            let role = role.trim();
            if let Some(index) = worker.technologies().iter().position(|t| t == role) {
                total += worker.experience_at(index).unwrap_or(0.0);
            }
        }
    }
    total.max(MIN_SKILL_COVERAGE)
}

/// Largest value of a field across the batch, never below 0.
fn batch_max(tasks: &[Task], field: impl Fn(&Task) -> f64) -> f64 {
    tasks.iter().map(field).fold(0.0, f64::max)
}

/// `value / max`, or 0 when the batch maximum is not positive.
fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_roster;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_batch() {
        let estimator = Estimator::default();
        assert!(estimator.durations(&[], &sample_roster()).is_empty());
    }

    #[test]
    fn test_fallback_without_roster() {
        let estimator = Estimator::default();
        let tasks = vec![Task::new("Solo", ["QA Engineer"]).with_scores(5.0, 0.5, 0.5)];
        let durations = estimator.durations(&tasks, &[]);
        assert!(approx(durations[0], 21.0));
    }

    #[test]
    fn test_single_task_with_roster() {
        let estimator = Estimator::default();
        let tasks = vec![Task::new("Solo", ["Astronaut"]).with_scores(5.0, 0.5, 0.5)];
        // Every normalized term is 1 and S_max / S_cov is 1.
        let durations = estimator.durations(&tasks, &sample_roster());
        assert!(approx(durations[0], 32.3));
    }

    #[test]
    fn test_batch_normalization_and_coverage() {
        let estimator = Estimator::default();
        let tasks = vec![
            Task::new("Tune queries", ["SQL"]).with_scores(10.0, 1.0, 1.0),
            Task::new("Unknown work", ["Astronaut"]).with_scores(5.0, 0.5, 0.5),
        ];
        let durations = estimator.durations(&tasks, &sample_roster());
        assert!(approx(durations[0], 32.3), "got {}", durations[0]);
        // Half of every maximum, and S_max / S_cov = 5 / 1.
        assert!(approx(durations[1], 20.7), "got {}", durations[1]);
    }

    #[test]
    fn test_zero_maximum_is_inert() {
        let estimator = Estimator::default();
        let tasks = vec![
            Task::new("A", ["Astronaut"]).with_scores(4.0, 0.0, 0.5),
            Task::new("B", ["Astronaut"]).with_scores(2.0, 0.0, 0.5),
        ];
        let durations = estimator.durations(&tasks, &sample_roster());
        // A: 0.8·10·(1 + 1 + 0 + 1) + 0.2·10·0.15
        assert!(approx(durations[0], 24.3));
        // B: 0.8·10·(1 + 0.5 + 0 + 1) + 0.3
        assert!(approx(durations[1], 20.3));
    }

    #[test]
    fn test_skill_coverage_exact_tokens() {
        let roster = sample_roster();
        assert_eq!(skill_coverage(&Task::new("t", ["Java"]), &roster), 4.0);
        assert_eq!(skill_coverage(&Task::new("t", ["java"]), &roster), 1.0);
        assert_eq!(skill_coverage(&Task::new("t", ["AWS"]), &roster), 11.0);
        assert_eq!(skill_coverage(&Task::new("t", ["AWS", "Java"]), &roster), 15.0);
        assert_eq!(skill_coverage(&Task::new("t", Vec::<String>::new()), &roster), 1.0);
    }

    #[test]
    fn test_hooks_override_team_terms() {
        let hooks = EstimatorHooks {
            team_size_max: Some(18.0),
            participating: Some(0.0),
        };
        let estimator = Estimator::default().with_hooks(hooks);
        let tasks = vec![Task::new("Solo", ["Astronaut"]).with_scores(5.0, 0.5, 0.5)];
        // 32 + 2·(0.05·0.5 + 0.05 + 0)
        let durations = estimator.durations(&tasks, &sample_roster());
        assert!(approx(durations[0], 32.15));
    }

    #[test]
    fn test_zero_team_size_max_falls_back() {
        let hooks = EstimatorHooks {
            team_size_max: Some(0.0),
            participating: None,
        };
        let estimator = Estimator::default().with_hooks(hooks);
        let tasks = vec![Task::new("Solo", ["QA"]).with_scores(5.0, 0.5, 0.5)];
        assert!(approx(estimator.durations(&tasks, &sample_roster())[0], 21.0));
    }

    #[test]
    fn test_estimate_fills_tasks() {
        let estimator = Estimator::new(20.0);
        let tasks = vec![Task::new("Solo", ["QA"]).with_scores(1.0, 0.0, 0.0)];
        let estimated = estimator.estimate(&tasks, &[]);
        assert_eq!(estimated[0].estimated_time, Some(12.0));
        assert_eq!(tasks[0].estimated_time, None);
    }
}
