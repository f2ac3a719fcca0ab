//! Config command - configuration management.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{Style, style};

use fourpc_client::DEFAULT_USER_AGENT;
use fourpc_config::Config;

use super::Context;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective settings (the token is never printed)
    Show,

    /// Show configuration file path
    Path,

    /// Initialize a config file with defaults
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => cmd_show(ctx),
        ConfigCommand::Path => cmd_path(ctx),
        ConfigCommand::Init { force } => cmd_init(force, ctx),
    }
}

fn cmd_show(ctx: &Context) -> Result<()> {
    let dim = Style::new().dim();

    let token = if ctx.token.as_deref().is_some_and(|t| !t.trim().is_empty()) {
        "set (command line)".to_string()
    } else if ctx.file.has_inline_token() {
        "set (config file)".to_string()
    } else if let Some(path) = &ctx.file.token_file {
        format!("file {}", path.display())
    } else {
        "not set".to_string()
    };

    let host = ctx
        .host
        .clone()
        .unwrap_or_else(|| ctx.tier.host().to_string());
    let user_agent = ctx.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    let config_file = ctx
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());

    println!();
    println!("{}", style("fourpc Configuration").bold());
    println!("{}", dim.apply_to("─".repeat(40)));
    println!();
    println!("  {} {}", dim.apply_to("Config:"), config_file);
    println!("  {} {}", dim.apply_to("Token:"), token);
    println!("  {} {}", dim.apply_to("Tier:"), ctx.tier);
    println!("  {} {}", dim.apply_to("Host:"), host);
    println!("  {} {}", dim.apply_to("User agent:"), user_agent);
    if let Some(timeout) = ctx.timeout {
        println!("  {} {}s", dim.apply_to("Timeout:"), timeout.as_secs());
    }
    println!();

    Ok(())
}

fn cmd_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => println!("{}", path.display()),
        None => anyhow::bail!("could not determine config directory"),
    }
    Ok(())
}

fn cmd_init(force: bool, ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        anyhow::bail!("could not determine config directory");
    };

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config {
        tier: Some(ctx.tier),
        ..Default::default()
    };
    fourpc_config::save_config_to(&config, path)?;

    let green = Style::new().green();
    println!("{} wrote {}", green.apply_to("✓"), path.display());
    Ok(())
}
