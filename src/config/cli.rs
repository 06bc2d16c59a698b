/// CLI arguments parsed from command line.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Subcommand to execute.
    pub command: Option<Command>,
    /// Positional argument that is not a known command.
    pub unknown_command: Option<String>,
    /// Path to config file.
    pub config: Option<String>,
    /// Path to task batch.
    pub tasks_file: Option<String>,
    /// Path to roster.
    pub roster_file: Option<String>,
    /// Path to knowledge base.
    pub roles_file: Option<String>,
    /// Hours per worker.
    pub capacity: Option<f64>,
    /// Workers per task.
    pub max_workers: Option<usize>,
    /// Acceptance threshold.
    pub threshold: Option<f64>,
    /// Hours per sprint.
    pub sprint_capacity: Option<f64>,
    /// Maximum sprints to emit.
    pub max_sprints: Option<usize>,
    /// Base time for estimates.
    pub base_time: Option<f64>,
    /// Path to run journal.
    pub journal: Option<String>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Open the interactive viewer.
    pub tui: bool,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
}

/// Allot subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Estimate, allocate and pack sprints.
    Plan,
    /// Estimate and allocate.
    Allocate,
    /// Estimate durations only.
    Estimate,
    /// Estimate and pack sprints.
    Sprints,
    /// Show the role-to-skill knowledge base.
    Roles,
    /// Write a default allot.toml.
    Init,
}

impl Command {
    /// Parse command from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "plan" => Some(Self::Plan),
            "allocate" => Some(Self::Allocate),
            "estimate" => Some(Self::Estimate),
            "sprints" => Some(Self::Sprints),
            "roles" => Some(Self::Roles),
            "init" => Some(Self::Init),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Allocate => "allocate",
            Self::Estimate => "estimate",
            Self::Sprints => "sprints",
            Self::Roles => "roles",
            Self::Init => "init",
        }
    }
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-c" | "--config" => cli.config = args.next(),
            "--tasks" => cli.tasks_file = args.next(),
            "--roster" => cli.roster_file = args.next(),
            "--roles" => cli.roles_file = args.next(),
            "--capacity" => cli.capacity = args.next().and_then(|s| s.parse().ok()),
            "--max-workers" => cli.max_workers = args.next().and_then(|s| s.parse().ok()),
            "--threshold" => cli.threshold = args.next().and_then(|s| s.parse().ok()),
            "--sprint-capacity" => cli.sprint_capacity = args.next().and_then(|s| s.parse().ok()),
            "--max-sprints" => cli.max_sprints = args.next().and_then(|s| s.parse().ok()),
            "--base-time" => cli.base_time = args.next().and_then(|s| s.parse().ok()),
            "--journal" => cli.journal = args.next(),
            "--json" => cli.json = true,
            "--tui" => cli.tui = true,
            _ if !arg.starts_with('-')
                && cli.command.is_none()
                && cli.unknown_command.is_none() =>
            {
                cli.command = Command::from_str(&arg);
                if cli.command.is_none() {
                    cli.unknown_command = Some(arg);
                }
            }
            _ => {} // Ignore unknown flags
        }
    }

    cli
}
