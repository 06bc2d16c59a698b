//! Caller-owned engine: configuration, roster, matcher and ledger in one
//! place.
//!
//! Each `Engine` is an independent allocation context. Allocation takes
//! `&mut self`, so one run at a time writes the ledger; the ledger carries
//! over between calls until [`Engine::reset`].

mod config;


pub use config::{
    EngineConfig, DEFAULT_ACCEPTANCE_THRESHOLD, DEFAULT_CAPACITY_PER_WORKER,
    DEFAULT_MAX_WORKERS_PER_TASK,
};

use std::collections::HashSet;

use serde::Serialize;

use crate::allocator::{self, Assignment};
use crate::error::{EngineError, Result};
use crate::estimator::Estimator;
use crate::ledger::CapacityLedger;
use crate::matcher::{KeywordMatcher, SkillMatcher};
use crate::model::{Task, Worker};
use crate::sprint::{SprintPacker, SprintPlan};
use crate::utilization::{self, UtilizationEntry};

/// Everything [`Engine::plan`] produces for one batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectPlan {
    /// The batch with `estimated_time` filled, in input order.
    pub tasks: Vec<Task>,
    pub total_estimated_hours: f64,
    /// Capacity the utilization percentages are measured against.
    pub capacity_per_worker: f64,
    pub assignments: Vec<Assignment>,
    pub utilization: Vec<UtilizationEntry>,
    pub sprints: SprintPlan,
}

impl ProjectPlan {
    pub fn unstaffed(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter().filter(|a| !a.is_staffed())
    }
}

pub struct Engine {
    config: EngineConfig,
    roster: Vec<Worker>,
    matcher: Box<dyn SkillMatcher>,
    ledger: CapacityLedger,
}

impl Engine {
    /// Build an engine with the built-in keyword matcher.
    pub fn new(config: EngineConfig, roster: Vec<Worker>) -> Result<Self> {
        config.validate()?;

        let mut seen = HashSet::new();
        for worker in &roster {
            if !seen.insert(worker.name.as_str()) {
                return Err(EngineError::DuplicateWorker {
                    name: worker.name.clone(),
                });
            }
        }

        Ok(Self {
            config,
            roster,
            matcher: Box::new(KeywordMatcher::default()),
            ledger: CapacityLedger::new(),
        })
    }

    /// Replace the skill matcher.
    pub fn with_matcher(mut self, matcher: impl SkillMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn roster(&self) -> &[Worker] {
        &self.roster
    }

    pub fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    /// Clear every commitment.
    pub fn reset(&mut self) {
        self.ledger.reset();
    }

    fn estimator(&self) -> Estimator {
        Estimator::new(self.config.base_time).with_hooks(self.config.estimator_hooks)
    }

    fn packer(&self) -> SprintPacker {
        SprintPacker::new(self.config.sprint_capacity, self.config.max_sprints)
    }

    /// Copy of `tasks` with `estimated_time` filled.
    pub fn estimate(&self, tasks: &[Task]) -> Vec<Task> {
        self.estimator().estimate(tasks, &self.roster)
    }

    /// Staff every task, committing hours to the engine's ledger.
    ///
    /// The batch is validated before anything is committed.
    pub fn allocate(&mut self, tasks: &[Task]) -> Result<Vec<Assignment>> {
        validate_tasks(tasks)?;
        Ok(self.allocate_validated(tasks))
    }

    /// Allocation for a batch that already passed `validate_tasks`.
    fn allocate_validated(&mut self, tasks: &[Task]) -> Vec<Assignment> {
        let policy = self.config.policy();
        allocator::allocate(
            tasks,
            &self.roster,
            self.matcher.as_ref(),
            &mut self.ledger,
            &policy,
        )
    }

    pub fn utilization(&self) -> Vec<UtilizationEntry> {
        utilization::summarize(&self.ledger, self.config.capacity_per_worker)
    }

    pub fn pack_sprints(&self, tasks: &[Task]) -> SprintPlan {
        self.packer().pack(tasks)
    }

    /// Estimate, allocate and pack one batch.
    pub fn plan(&mut self, tasks: &[Task]) -> Result<ProjectPlan> {
        validate_tasks(tasks)?;
        let estimated = self.estimate(tasks);
        let assignments = self.allocate_validated(&estimated);
        let sprints = self.pack_sprints(&estimated);
        let total_estimated_hours = estimated.iter().map(Task::estimated_hours).sum();

        tracing::info!(
            tasks = estimated.len(),
            sprints = sprints.sprints.len(),
            truncated = sprints.truncated,
            "plan complete"
        );

        Ok(ProjectPlan {
            tasks: estimated,
            total_estimated_hours,
            capacity_per_worker: self.config.capacity_per_worker,
            assignments,
            utilization: self.utilization(),
            sprints,
        })
    }
}

fn validate_tasks(tasks: &[Task]) -> Result<()> {
    tasks.iter().try_for_each(Task::validate)
}
