//! Typed records consumed and produced by the engine.
//!
//! Workers come from an external roster snapshot and tasks from an external
//! producer. Both are read-only once a run starts.

mod fields;
mod task;
mod worker;

#[cfg(test)]
mod tests;

pub use fields::parse_role_list;
pub use task::{Task, DEFAULT_SPRINT_TASK_HOURS};
pub use worker::{Worker, NEUTRAL_EXPERIENCE};
