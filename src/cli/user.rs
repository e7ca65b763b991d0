//! User command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use gamify::engine::{user_detail, EngagementEngine};

use super::{load_config, resolve_source};

/// Show one user's detail record
pub fn user_command(
    config_path: Option<&Path>,
    user_id: &str,
    source: Option<&str>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let events = resolve_source(source, &config)
        .fetch()
        .context("Failed to fetch activity log")?;

    let engine = EngagementEngine::with_rules(config.badges);
    let stats = engine.compute_from_events(events, Some(Utc::now()));

    let Some(record) = user_detail(&stats, user_id) else {
        println!("No activity found for user: {}", user_id);
        return Ok(());
    };

    println!("{} ({})\n", record.name, user_id);
    println!("  Points: {}", record.total_points);
    println!("  Events: {}", record.event_count());

    if !record.badges.is_empty() {
        println!("  Badges: {}", record.badges.join(", "));
    }

    println!("\n  Actions:");
    for (action, count) in &record.actions {
        println!("    {} x{}", action, count);
    }

    println!("\n  Devices (primary: {}):", record.primary_device);
    for (device, count) in &record.device_counts {
        println!("    {} x{}", device, count);
    }

    println!("\n  Locations (primary: {}):", record.primary_location);
    for (location, count) in &record.location_counts {
        println!("    {} x{}", location, count);
    }

    Ok(())
}
