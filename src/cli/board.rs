//! Board command implementation

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use gamify::engine::{summarize, EngagementEngine, EngagementFilter};

use super::{load_config, resolve_source};

/// Compute and print the ranked leaderboard
pub fn board_command(
    config_path: Option<&Path>,
    source: Option<&str>,
    device: Option<String>,
    location: Option<String>,
    top: Option<usize>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let events = resolve_source(source, &config)
        .fetch()
        .context("Failed to fetch activity log")?;

    let engine = EngagementEngine::with_rules(config.badges);
    let stats = engine.compute_from_events(events, Some(Utc::now()));

    let mut filter = EngagementFilter::none();
    if let Some(device) = device {
        filter = filter.with_device(device);
    }
    if let Some(location) = location {
        filter = filter.with_location(location);
    }

    let summary = summarize(&stats, &filter);

    if summary.leaderboard.is_empty() {
        println!("No matching activity found.");
        return Ok(());
    }

    println!(
        "Leaderboard ({} users, {} events, {} points):\n",
        summary.total_users, summary.total_events, summary.total_points
    );

    let shown = top.unwrap_or(summary.leaderboard.len());
    for entry in summary.leaderboard.iter().take(shown) {
        println!(
            "  #{} {} ({}) - {} points",
            entry.rank,
            entry.stats.name,
            entry.user_id,
            entry.stats.total_points
        );

        if !entry.stats.badges.is_empty() {
            println!("    Badges: {}", entry.stats.badges.join(", "));
        }
    }

    println!();
    println!("Devices: {}", summary.available_devices.join(", "));
    println!("Locations: {}", summary.available_locations.join(", "));

    Ok(())
}
