use std::env;
use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use allot::config::{self, Command, Config};

mod commands;
mod output;

use commands::{cmd_allocate, cmd_estimate, cmd_init, cmd_plan, cmd_roles, cmd_sprints};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter.
const LOG_ENV: &str = "ALLOT_LOG";

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    if cli.help {
        output::print_help();
        return;
    }

    if cli.version {
        println!("allot {}", VERSION);
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &config::CliArgs) -> Result<(), String> {
    if let Some(ref unknown) = cli.unknown_command {
        return Err(format!("unknown command: {} (see allot --help)", unknown));
    }

    // Default command is Plan if none specified
    let command = cli.command.unwrap_or(Command::Plan);

    // init writes the config file, so it must not require one
    if command == Command::Init {
        return cmd_init(cli);
    }

    let config = Config::load(cli).map_err(|e| e.to_string())?;
    tracing::debug!(command = command.as_str(), ?config, "dispatching");

    match command {
        Command::Plan => cmd_plan(&config, cli),
        Command::Allocate => cmd_allocate(&config, cli),
        Command::Estimate => cmd_estimate(&config, cli),
        Command::Sprints => cmd_sprints(&config, cli),
        Command::Roles => cmd_roles(&config, cli),
        Command::Init => cmd_init(cli),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
