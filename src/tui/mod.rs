//! Interactive plan viewer built on ratatui.
//!
//! Three tabs (assignments, workload, sprints) with keyboard and mouse
//! scrolling and a quit confirmation modal.

mod app;
mod render;
mod run;

pub use app::{PlanView, Tab};
pub use run::run_viewer;
