use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gamify::source::DEFAULT_SEED;

mod cli;

#[derive(Parser)]
#[command(name = "gamify")]
#[command(about = "GamifyConnect - engagement stats, badges, and leaderboards from activity logs")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to gamify.toml in the current directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the ranked leaderboard
    Board {
        /// Activity log to read: a JSONL file path or an http(s) URL
        #[arg(short, long)]
        source: Option<String>,

        /// Count only users with activity on this device ("All" disables)
        #[arg(short, long)]
        device: Option<String>,

        /// Count only users with activity in this location ("All" disables)
        #[arg(short, long)]
        location: Option<String>,

        /// Show only the first N entries
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show one user's detail record
    User {
        /// User id to look up
        user_id: String,

        /// Activity log to read: a JSONL file path or an http(s) URL
        #[arg(short, long)]
        source: Option<String>,
    },

    /// Generate synthetic activity as JSONL
    Simulate {
        /// Seed for the generator
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Limit the roster to its first N users
        #[arg(long)]
        users: Option<usize>,

        /// Override the base number of events per user
        #[arg(long)]
        logs_per_user: Option<u64>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the active badge-rule list
    Rules,

    /// Initialize a new gamify.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Commands::Board {
            source,
            device,
            location,
            top,
        } => {
            cli::board::board_command(
                cli.config.as_deref(),
                source.as_deref(),
                device,
                location,
                top,
            )?;
        }
        Commands::User { user_id, source } => {
            cli::user::user_command(cli.config.as_deref(), &user_id, source.as_deref())?;
        }
        Commands::Simulate {
            seed,
            users,
            logs_per_user,
            out,
        } => {
            cli::simulate::simulate_command(
                cli.config.as_deref(),
                seed,
                users,
                logs_per_user,
                out,
            )?;
        }
        Commands::Rules => {
            cli::rules::rules_command(cli.config.as_deref())?;
        }
        Commands::Init { force } => {
            cli::init::init_command(cli.config, force)?;
        }
    }

    Ok(())
}
