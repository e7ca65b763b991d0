//! Init command implementation

use std::path::PathBuf;

use anyhow::{bail, Result};

use gamify::config::CONFIG_FILE_NAME;

/// Default configuration content for gamify init
pub const DEFAULT_CONFIG: &str = r#"# GamifyConnect Configuration
# ===========================
#
# Badge rules are evaluated in order against per-user action counts.
# A badge is granted once the user's count for `action` reaches `threshold`.
#
# Available options per rule:
#   action    - the action token the rule counts
#   threshold - minimum number of events required
#   badge     - badge id granted at the threshold

[[badges]]
action = "post"
threshold = 5
badge = "Content Creator"

[[badges]]
action = "comment"
threshold = 10
badge = "Engager"

[[badges]]
action = "like"
threshold = 20
badge = "Supporter"

[[badges]]
action = "share"
threshold = 3
badge = "Influencer"

[[badges]]
action = "login_streak"
threshold = 7
badge = "Loyal User"

# ============================================================================
# SIMULATOR - Synthetic activity for demos and local development
# ============================================================================
#
# Available options:
#   action_points - action name -> points awarded per occurrence
#   devices       - device pool events are attributed to
#   locations     - location pool events are attributed to
#   users         - user roster (id -> display name)
#   logs_per_user - base number of events per user (default: 10)
#   logs_jitter   - events per user vary by up to this much (default: 3)

[simulator]
devices = ["mobile", "desktop"]
locations = ["Boston", "New York", "San Francisco", "Chicago", "Austin"]
logs_per_user = 10
logs_jitter = 3

[simulator.action_points]
post = 10
comment = 5
like = 2
share = 7
login_streak = 5

[simulator.users]
u001 = "David"
u002 = "Porter"
u003 = "Kevin"
u004 = "Peter"
u005 = "John"
"#;

/// Initialize a new gamify configuration file
/// Defaults to `gamify.toml` in the current directory
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    // Create parent directory (if any)
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use gamify::config::Config;

    use super::*;

    #[test]
    fn test_default_config_matches_builtin_defaults() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::with_defaults());
    }

    #[test]
    fn test_init_writes_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamify.toml");

        init_command(Some(path.clone()), false).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gamify.toml");
        std::fs::write(&path, "[[badges]]\naction = \"post\"\nthreshold = 1\nbadge = \"X\"\n")
            .unwrap();

        assert!(init_command(Some(path.clone()), false).is_err());

        init_command(Some(path), true).unwrap();
    }

    #[test]
    fn test_init_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("gamify.toml");

        init_command(Some(path.clone()), false).unwrap();

        assert!(path.exists());
    }
}
