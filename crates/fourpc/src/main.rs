//! fourpc - console for the four-player chess bot API
//!
//! Main entry point for the fourpc CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use fourpc_client::AccessTier;

mod commands;

use commands::{actions, config, stream};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// fourpc - console for the four-player chess bot API
#[derive(Parser)]
#[command(name = "fourpc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bot token
    #[arg(long, global = true, env = "FOURPC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API tier: beta or main (default: beta)
    #[arg(long, global = true, env = "FOURPC_TIER")]
    pub tier: Option<AccessTier>,

    /// Override the API host (e.g. http://localhost:8080)
    #[arg(long, global = true, env = "FOURPC_HOST")]
    pub host: Option<String>,

    /// User agent sent with every request
    #[arg(long, global = true, env = "FOURPC_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Config file to read instead of the default
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Draw an arrow between two squares
    Arrow(actions::ArrowArgs),

    /// Circle a square
    Circle(actions::CircleArgs),

    /// Send a chat message
    Chat(actions::ChatArgs),

    /// Clear all arrows and circles
    Clear,

    /// Play a move
    Play(actions::PlayArgs),

    /// Resign the current game
    Resign,

    /// Print the live game stream line by line
    Stream(stream::StreamArgs),

    /// Configuration management
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "fourpc=debug,fourpc_client=debug,fourpc_config=debug,info"
    } else {
        "fourpc=info,fourpc_client=warn,warn"
    };

    let log_dir = fourpc_config::config_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    // An unwritable log directory only disables the file layer.
    let (file_writer, _guard, file_error) = match RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("fourpc.log")
        .build(&log_dir)
    {
        Ok(appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (Some(non_blocking), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(file_writer.map(|writer| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "fourpc=trace,fourpc_client=trace,fourpc_config=trace,info",
                ))
        }))
        .init();

    if let Some(e) = file_error {
        tracing::warn!(dir = %log_dir.display(), error = %e, "file logging disabled");
    }

    let ctx = commands::Context::resolve(&cli)?;

    // Dispatch to command handlers
    match cli.command {
        Commands::Arrow(args) => actions::arrow(args, &ctx),
        Commands::Circle(args) => actions::circle(args, &ctx),
        Commands::Chat(args) => actions::chat(args, &ctx),
        Commands::Clear => actions::clear(&ctx),
        Commands::Play(args) => actions::play(args, &ctx),
        Commands::Resign => actions::resign(&ctx),
        Commands::Stream(args) => stream::run(args, &ctx),
        Commands::Config(args) => config::run(args, &ctx),
    }
}
