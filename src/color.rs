//! Terminal color utilities using ANSI escape codes.
//!
//! Provides colored output for worker names, load status, scores and
//! journal lines.

use crate::utilization::LoadStatus;

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";

    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
}

use codes::*;

/// Colors for worker names, picked by initial.
const WORKER_COLORS: &[&str] = &[
    CYAN,
    MAGENTA,
    YELLOW,
    BLUE,
    BRIGHT_CYAN,
    BRIGHT_MAGENTA,
    BRIGHT_YELLOW,
    BRIGHT_BLUE,
    GREEN,
    BRIGHT_GREEN,
];

/// Deterministic color for a worker name.
pub fn worker_color(name: &str) -> &'static str {
    let initial = name.chars().next().unwrap_or('A');
    let index = (initial.to_ascii_uppercase() as usize).wrapping_sub('A' as usize);
    WORKER_COLORS[index % WORKER_COLORS.len()]
}

/// Color a worker name deterministically.
pub fn worker(name: &str) -> String {
    format!("{}{}{}{}", BOLD, worker_color(name), name, RESET)
}

/// ANSI color for a load status.
pub fn status_color(status: LoadStatus) -> &'static str {
    match status {
        LoadStatus::Overloaded => RED,
        LoadStatus::HighLoad => YELLOW,
        LoadStatus::Normal => GREEN,
        LoadStatus::LightLoad => CYAN,
    }
}

/// Color `text` by load status; overloaded is also bold.
pub fn load_status(status: LoadStatus, text: &str) -> String {
    let weight = if status == LoadStatus::Overloaded { BOLD } else { "" };
    format!("{}{}{}{}", weight, status_color(status), text, RESET)
}

/// Color a combined score: green above 5, yellow above 1, dim otherwise.
pub fn score(value: f64) -> String {
    let color = if value > 5.0 {
        GREEN
    } else if value > 1.0 {
        YELLOW
    } else {
        DIM
    };
    format!("{}{:.2}{}", color, value, RESET)
}

/// Color a timestamp (dim).
pub fn timestamp(ts: &str) -> String {
    format!("{}{}{}", DIM, ts, RESET)
}

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color error messages (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", RED, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color info messages (cyan).
pub fn info(text: &str) -> String {
    format!("{}{}{}", CYAN, text, RESET)
}

/// Color a label (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color a number/count (bright cyan).
pub fn number(n: impl std::fmt::Display) -> String {
    format!("{}{}{}", BRIGHT_CYAN, n, RESET)
}

/// Emoji constants for consistent usage
pub mod emoji {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARNING: &str = "⚠️";
    pub const SPRINT: &str = "🏃";
    pub const TASK: &str = "📋";
    pub const GEAR: &str = "⚙️";
    pub const BRAIN: &str = "🧠";
    pub const CLOCK: &str = "🕐";
    pub const TEAM: &str = "👥";
}
