use crate::allocator::AllocationPolicy;
use crate::error::{EngineError, Result};
use crate::estimator::{EstimatorHooks, DEFAULT_BASE_TIME};
use crate::sprint::{DEFAULT_MAX_SPRINTS, DEFAULT_SPRINT_CAPACITY};

/// Default hours a worker can absorb per run.
pub const DEFAULT_CAPACITY_PER_WORKER: f64 = 160.0;
/// Default cap on workers accepted onto one task.
pub const DEFAULT_MAX_WORKERS_PER_TASK: usize = 3;
/// Default acceptance threshold on the combined score.
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.1;

/// Numeric settings for an [`Engine`](super::Engine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub capacity_per_worker: f64,
    pub max_workers_per_task: usize,
    pub acceptance_threshold: f64,
    pub sprint_capacity: f64,
    /// Sprints the packer may close before it stops. At least 1.
    pub max_sprints: usize,
    pub base_time: f64,
    pub estimator_hooks: EstimatorHooks,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity_per_worker: DEFAULT_CAPACITY_PER_WORKER,
            max_workers_per_task: DEFAULT_MAX_WORKERS_PER_TASK,
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            sprint_capacity: DEFAULT_SPRINT_CAPACITY,
            max_sprints: DEFAULT_MAX_SPRINTS,
            base_time: DEFAULT_BASE_TIME,
            estimator_hooks: EstimatorHooks::default(),
        }
    }
}

impl EngineConfig {
    /// Reject settings the formulas cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.capacity_per_worker.is_finite() && self.capacity_per_worker > 0.0) {
            return Err(invalid(format!(
                "capacity_per_worker must be positive, got {}",
                self.capacity_per_worker
            )));
        }
        if self.max_workers_per_task == 0 {
            return Err(invalid("max_workers_per_task must be at least 1".to_string()));
        }
        if !(self.acceptance_threshold.is_finite() && self.acceptance_threshold >= 0.0) {
            return Err(invalid(format!(
                "acceptance_threshold must be finite and non-negative, got {}",
                self.acceptance_threshold
            )));
        }
        if !(self.sprint_capacity.is_finite() && self.sprint_capacity > 0.0) {
            return Err(invalid(format!(
                "sprint_capacity must be positive, got {}",
                self.sprint_capacity
            )));
        }
        if self.max_sprints == 0 {
            return Err(invalid("max_sprints must be at least 1".to_string()));
        }
        if !(self.base_time.is_finite() && self.base_time >= 0.0) {
            return Err(invalid(format!(
                "base_time must be finite and non-negative, got {}",
                self.base_time
            )));
        }
        Ok(())
    }

    pub fn policy(&self) -> AllocationPolicy {
        AllocationPolicy {
            capacity_per_worker: self.capacity_per_worker,
            max_workers_per_task: self.max_workers_per_task,
            acceptance_threshold: self.acceptance_threshold,
        }
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidConfig { reason }
}
