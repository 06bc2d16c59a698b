//! Allot: task allocation and sprint planning for a team roster.
//!
//! Each task is staffed by scoring every worker as `Y = S × W × C`:
//!
//! - `S`, skill match: direct role matches plus experience-weighted keyword
//!   credit from a role-to-skill knowledge base ([`matcher`]).
//! - `W`, workload factor: 1 up to full capacity, then decaying with the
//!   overload ratio ([`scorer`]).
//! - `C`, complexity fit: how well the worker's experience suits the task's
//!   complexity and risk ([`scorer`]).
//!
//! Workers are accepted best score first while `Y` clears a threshold, and
//! their hours are committed to a [`ledger::CapacityLedger`] so later tasks
//! see the load. Durations come from the [`estimator`]; the [`sprint`]
//! packer groups estimated tasks into capacity-bounded sprints.
//!
//! [`engine::Engine`] ties these together for callers.

pub mod allocator;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod journal;
pub mod ledger;
pub mod matcher;
pub mod model;
pub mod roster;
pub mod run_id;
pub mod scorer;
pub mod sprint;
#[doc(hidden)]
pub mod testutil;
pub mod tui;
pub mod utilization;

pub use engine::{Engine, EngineConfig, ProjectPlan};
pub use error::{EngineError, KnowledgeBaseError, RosterError};
pub use model::{Task, Worker};
