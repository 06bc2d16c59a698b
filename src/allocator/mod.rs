//! Greedy task-to-worker assignment.
//!
//! Tasks are visited in priority order. For each task every worker is
//! scored against the current ledger, the best candidates above the
//! acceptance threshold are accepted (up to the per-task cap), and their
//! hours are committed before the next task is scored. Later tasks therefore
//! see every earlier commitment through the workload factor.

mod record;


pub use record::{Assignment, WorkerAllocation};

use rayon::prelude::*;

use crate::ledger::CapacityLedger;
use crate::matcher::SkillMatcher;
use crate::model::{Task, Worker};
use crate::scorer::{ScoreBreakdown, Scorer};

/// Knobs that shape an allocation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationPolicy {
    /// Hours a worker can absorb before the workload factor decays.
    pub capacity_per_worker: f64,
    /// Most workers accepted onto one task.
    pub max_workers_per_task: usize,
    /// A worker is accepted only if its combined score is strictly above this.
    pub acceptance_threshold: f64,
}

/// Visit order for a batch: priority descending, then complexity
/// descending, ties kept in input order.
pub fn priority_order(tasks: &[Task]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..tasks.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&tasks[a], &tasks[b]);
        b.priority
            .total_cmp(&a.priority)
            .then_with(|| b.complexity.total_cmp(&a.complexity))
    });
    order
}

/// Number of slots a task's hours are split across: one per required role,
/// capped by the per-task worker limit. Never zero.
pub fn staffing_slots(task: &Task, max_workers_per_task: usize) -> usize {
    task.required_roles
        .len()
        .min(max_workers_per_task)
        .max(1)
}

/// Score every worker for `task` and rank them, best first. Ties keep
/// roster order.
///
/// Scoring only reads the ledger, so workers are scored in parallel; the
/// results are collected in roster order before the stable sort.
pub fn rank_candidates(
    task: &Task,
    roster: &[Worker],
    matcher: &dyn SkillMatcher,
    ledger: &CapacityLedger,
    capacity_per_worker: f64,
) -> Vec<(usize, ScoreBreakdown)> {
    let scorer = Scorer::new(matcher, ledger, capacity_per_worker);
    let mut ranked: Vec<(usize, ScoreBreakdown)> = roster
        .par_iter()
        .enumerate()
        .map(|(index, worker)| (index, scorer.score(worker, task)))
        .collect();
    ranked.sort_by(|a, b| b.1.combined.total_cmp(&a.1.combined));
    ranked
}

/// Assign workers to every task, committing hours to `ledger` as it goes.
///
/// Returns one [`Assignment`] per task, in visit order.
pub fn allocate(
    tasks: &[Task],
    roster: &[Worker],
    matcher: &dyn SkillMatcher,
    ledger: &mut CapacityLedger,
    policy: &AllocationPolicy,
) -> Vec<Assignment> {
    let mut assignments = Vec::with_capacity(tasks.len());

    for task_index in priority_order(tasks) {
        let task = &tasks[task_index];
        let ranked = rank_candidates(task, roster, matcher, ledger, policy.capacity_per_worker);
        let share = task.estimated_hours() / staffing_slots(task, policy.max_workers_per_task) as f64;

        let mut workers = Vec::new();
        for (worker_index, score) in ranked {
            if workers.len() >= policy.max_workers_per_task {
                break;
            }
            if score.combined <= policy.acceptance_threshold {
                continue;
            }

            let worker = &roster[worker_index];
            ledger.commit(&worker.name, share);
            tracing::debug!(
                task = %task.name,
                worker = %worker.name,
                score = score.combined,
                hours = share,
                "accepted worker"
            );

            workers.push(WorkerAllocation {
                name: worker.name.clone(),
                role: worker.role.clone(),
                skill_score: score.skill,
                workload_factor: score.workload,
                complexity_fit: score.complexity_fit,
                combined_score: score.combined,
                allocated_hours: share,
            });
        }

        if workers.is_empty() {
            tracing::debug!(task = %task.name, "no worker above acceptance threshold");
        }

        assignments.push(Assignment {
            task_index,
            task: task.clone(),
            workers,
        });
    }

    let staffed = assignments.iter().filter(|a| a.is_staffed()).count();
    tracing::info!(
        tasks = tasks.len(),
        workers = roster.len(),
        staffed,
        unstaffed = tasks.len() - staffed,
        "allocation complete"
    );

    assignments
}
