//! Sprint packing.
//!
//! Tasks are taken in priority order and packed first-fit into the current
//! sprint. A task that does not fit closes the sprint and opens the next one,
//! so an oversized task still gets a sprint to itself. Packing stops once
//! `max_sprints` sprints have been closed; whatever is left over is reported
//! in [`SprintPlan::unplaced`]. A limit of 0 is reached before the first
//! sprint, so nothing is emitted.

use serde::Serialize;

use crate::model::Task;

/// Default hours per sprint.
pub const DEFAULT_SPRINT_CAPACITY: f64 = 40.0;
/// Default sprint limit.
pub const DEFAULT_MAX_SPRINTS: usize = 10;

/// One packed sprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprint {
    /// 1-based sprint number.
    pub index: usize,
    pub total_hours: f64,
    pub tasks: Vec<Task>,
}

/// Result of packing a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintPlan {
    pub sprints: Vec<Sprint>,
    /// Sum of the emitted sprints' hours.
    pub total_hours: f64,
    /// True when the sprint limit cut packing short.
    pub truncated: bool,
    /// Tasks that were not emitted, in packing order.
    pub unplaced: Vec<Task>,
}

impl SprintPlan {
    pub fn task_count(&self) -> usize {
        self.sprints.iter().map(|s| s.tasks.len()).sum()
    }
}

/// Packs tasks into capacity-bounded sprints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprintPacker {
    capacity: f64,
    max_sprints: usize,
}

impl Default for SprintPacker {
    fn default() -> Self {
        Self::new(DEFAULT_SPRINT_CAPACITY, DEFAULT_MAX_SPRINTS)
    }
}

impl SprintPacker {
    pub fn new(capacity: f64, max_sprints: usize) -> Self {
        Self {
            capacity,
            max_sprints,
        }
    }

    fn limit_reached(&self, closed: usize) -> bool {
        closed >= self.max_sprints
    }

    /// Pack `tasks`, highest priority first. Hours come from
    /// [`Task::sprint_hours`].
    pub fn pack(&self, tasks: &[Task]) -> SprintPlan {
        let mut ordered: Vec<&Task> = tasks.iter().collect();
        ordered.sort_by(|a, b| b.priority.total_cmp(&a.priority));

        if self.limit_reached(0) {
            let unplaced: Vec<Task> = ordered.into_iter().cloned().collect();
            return self.finish(Vec::new(), unplaced);
        }

        let mut sprints: Vec<Sprint> = Vec::new();
        let mut current: Vec<Task> = Vec::new();
        let mut current_hours = 0.0;
        let mut stopped_at = None;

        for (position, task) in ordered.iter().enumerate() {
            let hours = task.sprint_hours();
            if current_hours + hours <= self.capacity {
                current.push((*task).clone());
                current_hours += hours;
                continue;
            }

            if !current.is_empty() {
                sprints.push(Sprint {
                    index: sprints.len() + 1,
                    total_hours: current_hours,
                    tasks: std::mem::take(&mut current),
                });
            }
            current.push((*task).clone());
            current_hours = hours;

            if self.limit_reached(sprints.len()) {
                stopped_at = Some(position);
                break;
            }
        }

        let mut unplaced = Vec::new();
        match stopped_at {
            Some(position) => {
                // The task that opened the unemitted sprint is lost with it.
                unplaced.append(&mut current);
                unplaced.extend(ordered[position + 1..].iter().map(|t| (*t).clone()));
            }
            None if !current.is_empty() => {
                sprints.push(Sprint {
                    index: sprints.len() + 1,
                    total_hours: current_hours,
                    tasks: current,
                });
            }
            None => {}
        }

        self.finish(sprints, unplaced)
    }

    fn finish(&self, sprints: Vec<Sprint>, unplaced: Vec<Task>) -> SprintPlan {
        let truncated = !unplaced.is_empty();
        if truncated {
            tracing::warn!(
                max_sprints = self.max_sprints,
                unplaced = unplaced.len(),
                "sprint limit reached; tasks left unplaced"
            );
        }

        let total_hours = sprints.iter().map(|s| s.total_hours).sum();
        SprintPlan {
            sprints,
            total_hours,
            truncated,
            unplaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed(name: &str, priority: f64, hours: f64) -> Task {
        Task::new(name, ["QA Engineer"])
            .with_scores(3.0, 0.2, priority)
            .with_duration_hint(hours)
    }

    fn names(sprint: &Sprint) -> Vec<&str> {
        sprint.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_first_fit_into_current_sprint() {
        let tasks = vec![timed("a", 0.9, 30.0), timed("b", 0.8, 20.0), timed("c", 0.7, 15.0)];
        let plan = SprintPacker::new(40.0, 10).pack(&tasks);

        assert_eq!(plan.sprints.len(), 2);
        assert_eq!(names(&plan.sprints[0]), vec!["a"]);
        assert_eq!(plan.sprints[0].total_hours, 30.0);
        assert_eq!(names(&plan.sprints[1]), vec!["b", "c"]);
        assert_eq!(plan.sprints[1].total_hours, 35.0);
        assert_eq!(plan.sprints[1].index, 2);
        assert_eq!(plan.total_hours, 65.0);
        assert!(!plan.truncated);
        assert!(plan.unplaced.is_empty());
    }

    #[test]
    fn test_sorted_by_priority_stable() {
        let tasks = vec![timed("low", 0.1, 5.0), timed("tie-a", 0.5, 5.0), timed("tie-b", 0.5, 5.0)];
        let plan = SprintPacker::default().pack(&tasks);
        assert_eq!(names(&plan.sprints[0]), vec!["tie-a", "tie-b", "low"]);
    }

    #[test]
    fn test_exact_fit_stays_in_sprint() {
        let tasks = vec![timed("a", 0.9, 25.0), timed("b", 0.8, 15.0)];
        let plan = SprintPacker::new(40.0, 10).pack(&tasks);
        assert_eq!(plan.sprints.len(), 1);
        assert_eq!(plan.sprints[0].total_hours, 40.0);
    }

    #[test]
    fn test_oversized_task_gets_own_sprint() {
        let tasks = vec![timed("small", 0.9, 10.0), timed("huge", 0.8, 60.0), timed("tail", 0.7, 5.0)];
        let plan = SprintPacker::new(40.0, 10).pack(&tasks);

        assert_eq!(plan.sprints.len(), 3);
        assert_eq!(names(&plan.sprints[1]), vec!["huge"]);
        assert_eq!(plan.sprints[1].total_hours, 60.0);
        assert_eq!(names(&plan.sprints[2]), vec!["tail"]);
    }

    #[test]
    fn test_default_duration_when_no_hours() {
        let tasks = vec![
            Task::new("x", ["QA"]).with_scores(1.0, 0.1, 0.5),
            Task::new("y", ["QA"]).with_scores(1.0, 0.1, 0.4).with_estimated_time(3.0),
        ];
        let plan = SprintPacker::default().pack(&tasks);
        assert_eq!(plan.sprints[0].total_hours, 11.0);
    }

    #[test]
    fn test_limit_truncates_and_reports() {
        let tasks = vec![
            timed("a", 0.9, 30.0),
            timed("b", 0.8, 30.0),
            timed("c", 0.7, 30.0),
            timed("d", 0.6, 5.0),
        ];
        let plan = SprintPacker::new(40.0, 2).pack(&tasks);

        // Sprint 2 closes when "c" arrives; "c" and "d" are never emitted.
        assert_eq!(plan.sprints.len(), 2);
        assert!(plan.truncated);
        let unplaced: Vec<&str> = plan.unplaced.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(unplaced, vec!["c", "d"]);
        assert_eq!(plan.task_count() + plan.unplaced.len(), tasks.len());
    }

    #[test]
    fn test_limit_exactly_met_is_not_truncated() {
        let tasks = vec![timed("a", 0.9, 30.0), timed("b", 0.8, 30.0)];
        let plan = SprintPacker::new(40.0, 2).pack(&tasks);
        assert_eq!(plan.sprints.len(), 2);
        assert!(!plan.truncated);
    }

    #[test]
    fn test_zero_max_places_nothing() {
        let tasks = vec![timed("a", 0.5, 30.0), timed("b", 0.9, 30.0), timed("c", 0.7, 30.0)];
        let plan = SprintPacker::new(40.0, 0).pack(&tasks);
        assert!(plan.sprints.is_empty());
        assert_eq!(plan.total_hours, 0.0);
        assert!(plan.truncated);
        let unplaced: Vec<&str> = plan.unplaced.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(unplaced, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_zero_max_with_empty_batch_is_not_truncated() {
        let plan = SprintPacker::new(40.0, 0).pack(&[]);
        assert!(plan.sprints.is_empty());
        assert!(!plan.truncated);
    }

    #[test]
    fn test_large_limit_emits_every_sprint() {
        let tasks: Vec<Task> = (0..25).map(|i| timed(&format!("t{}", i), 0.5, 30.0)).collect();
        let plan = SprintPacker::new(40.0, 100).pack(&tasks);
        assert_eq!(plan.sprints.len(), 25);
        assert!(!plan.truncated);
    }

    #[test]
    fn test_empty_batch() {
        let plan = SprintPacker::default().pack(&[]);
        assert!(plan.sprints.is_empty());
        assert_eq!(plan.total_hours, 0.0);
        assert!(!plan.truncated);
    }
}
