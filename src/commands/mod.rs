pub mod allocate;
pub mod estimate;
pub mod init;
pub mod inputs;
pub mod plan;
pub mod roles;
pub mod sprints;

pub use allocate::cmd_allocate;
pub use estimate::cmd_estimate;
pub use init::cmd_init;
pub use plan::cmd_plan;
pub use roles::cmd_roles;
pub use sprints::cmd_sprints;
