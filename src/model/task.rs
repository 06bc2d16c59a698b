use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::fields::{deserialize_hours, deserialize_roles};

/// Hours assumed for a sprint task that carries neither a duration hint nor
/// an estimate.
pub const DEFAULT_SPRINT_TASK_HOURS: f64 = 8.0;

/// A unit of work to be staffed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task title.
    #[serde(alias = "task")]
    pub name: String,
    /// Roles the task asks for. Each role is one staffing slot.
    #[serde(alias = "roles", default, deserialize_with = "deserialize_roles")]
    pub required_roles: Vec<String>,
    /// Complexity score in [0, 10].
    #[serde(default)]
    pub complexity: f64,
    /// Risk score in [0, 1].
    #[serde(default)]
    pub risk: f64,
    /// Priority score in [0, 1].
    #[serde(default)]
    pub priority: f64,
    /// Duration suggested by the task producer, in hours.
    #[serde(
        alias = "duration",
        default,
        deserialize_with = "deserialize_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_hint: Option<f64>,
    /// Duration computed by the estimator, in hours.
    #[serde(
        default,
        deserialize_with = "deserialize_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_time: Option<f64>,
}

impl Task {
    /// Create a task with zero scores.
    pub fn new<I, S>(name: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            required_roles: roles.into_iter().map(Into::into).collect(),
            complexity: 0.0,
            risk: 0.0,
            priority: 0.0,
            duration_hint: None,
            estimated_time: None,
        }
    }

    /// Set complexity, risk and priority.
    pub fn with_scores(mut self, complexity: f64, risk: f64, priority: f64) -> Self {
        self.complexity = complexity;
        self.risk = risk;
        self.priority = priority;
        self
    }

    pub fn with_duration_hint(mut self, hours: f64) -> Self {
        self.duration_hint = Some(hours);
        self
    }

    pub fn with_estimated_time(mut self, hours: f64) -> Self {
        self.estimated_time = Some(hours);
        self
    }

    /// Hours the allocator splits across staffing slots (0 when unestimated).
    pub fn estimated_hours(&self) -> f64 {
        self.estimated_time.unwrap_or(0.0)
    }

    /// Hours the task occupies in a sprint: the producer's hint, then the
    /// estimate, then [`DEFAULT_SPRINT_TASK_HOURS`].
    pub fn sprint_hours(&self) -> f64 {
        self.duration_hint
            .or(self.estimated_time)
            .unwrap_or(DEFAULT_SPRINT_TASK_HOURS)
    }

    /// Reject values the engine cannot order or split.
    pub fn validate(&self) -> Result<(), EngineError> {
        let scores = [
            ("complexity", self.complexity),
            ("risk", self.risk),
            ("priority", self.priority),
        ];
        for (field, value) in scores {
            if !value.is_finite() {
                return Err(self.invalid(format!("{} is not a finite number", field)));
            }
        }

        let hours = [
            ("duration_hint", self.duration_hint),
            ("estimated_time", self.estimated_time),
        ];
        for (field, value) in hours {
            if let Some(h) = value {
                if !h.is_finite() || h < 0.0 {
                    return Err(self.invalid(format!("{} must be a non-negative number", field)));
                }
            }
        }

        Ok(())
    }

    fn invalid(&self, reason: String) -> EngineError {
        EngineError::InvalidTask {
            task: self.name.clone(),
            reason,
        }
    }
}
