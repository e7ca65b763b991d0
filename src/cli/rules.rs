//! Rules command implementation

use std::path::Path;

use anyhow::Result;

use super::load_config;

/// Print the active badge-rule list
pub fn rules_command(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    println!("Badge rules ({}):\n", config.badges.len());

    for rule in &config.badges {
        println!("  {} x{} -> {}", rule.action, rule.threshold, rule.badge);
    }

    Ok(())
}
