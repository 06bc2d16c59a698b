use serde::Serialize;

use crate::model::Task;

/// One accepted worker on a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerAllocation {
    pub name: String,
    pub role: String,
    /// Skill match score (S).
    pub skill_score: f64,
    /// Workload factor (W) at the time the task was scored.
    pub workload_factor: f64,
    /// Complexity fit (C).
    pub complexity_fit: f64,
    /// `S × W × C`.
    pub combined_score: f64,
    /// Hours committed to this worker for the task.
    pub allocated_hours: f64,
}

/// Staffing outcome for one task.
///
/// Emitted for every task, including tasks no worker qualified for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// Position of the task in the caller's input batch.
    pub task_index: usize,
    pub task: Task,
    /// Accepted workers, best score first.
    pub workers: Vec<WorkerAllocation>,
}

impl Assignment {
    /// True if at least one worker was accepted.
    pub fn is_staffed(&self) -> bool {
        !self.workers.is_empty()
    }

    /// Hours committed across all accepted workers.
    pub fn allocated_hours(&self) -> f64 {
        self.workers.iter().map(|w| w.allocated_hours).sum()
    }

    /// Hours this assignment committed to `worker` (0 if not assigned).
    pub fn hours_for(&self, worker: &str) -> f64 {
        self.workers
            .iter()
            .filter(|w| w.name == worker)
            .map(|w| w.allocated_hours)
            .sum()
    }
}
