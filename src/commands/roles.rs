use std::collections::BTreeMap;

use serde_json::json;

use allot::config::{CliArgs, Config};

use super::inputs;
use crate::output;

/// Show the active knowledge base.
pub fn cmd_roles(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let table = inputs::load_roles(config)?;

    if cli.json {
        let roles: BTreeMap<&str, &[String]> = table.entries().collect();
        return output::print_json(&json!({
            "version": table.version(),
            "roles": roles,
        }));
    }
    output::print_roles(&table);
    Ok(())
}
