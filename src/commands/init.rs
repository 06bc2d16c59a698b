use std::fs;
use std::path::Path;

use allot::color::{self, emoji};
use allot::config::{CliArgs, Config, DEFAULT_CONFIG_FILE};

/// Write a default config file unless one already exists.
pub fn cmd_init(cli: &CliArgs) -> Result<(), String> {
    let path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
    let path = Path::new(path);

    if path.exists() {
        println!("{} Config file already exists: {}", emoji::GEAR, color::info(&path.display().to_string()));
        return Ok(());
    }

    ensure_parent_dir(path)?;
    fs::write(path, Config::default_toml())
        .map_err(|e| format!("failed to create {}: {}", path.display(), e))?;
    println!("{} {}", emoji::CHECK, color::success(&format!("Created {}", path.display())));
    println!("  Edit [files] to point at your roster and task batch.");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}
