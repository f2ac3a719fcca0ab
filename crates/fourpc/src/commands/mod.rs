//! CLI command handlers.

pub mod actions;
pub mod config;
pub mod stream;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context as _, Result};
use fourpc_client::{AccessTier, FourPlayerChess};
use fourpc_config::Config;

use crate::Cli;

/// Shared context for all commands: the config file merged with flags and env.
#[derive(Debug, Clone)]
pub struct Context {
    /// Config file that was consulted, if one could be located.
    pub config_path: Option<PathBuf>,
    /// Config file contents (empty when the file is missing).
    pub file: Config,
    /// Token from `--token` / `FOURPC_TOKEN`.
    pub token: Option<String>,
    /// Effective access tier.
    pub tier: AccessTier,
    /// Effective host override.
    pub host: Option<String>,
    /// Effective user agent.
    pub user_agent: Option<String>,
    /// Effective request timeout.
    pub timeout: Option<Duration>,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Load the config file and layer the command line over it.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config_path = cli.config.clone().or_else(fourpc_config::config_path);
        let file = fourpc_config::load_config_from(config_path.as_deref())
            .context("failed to load configuration")?;

        if file.has_inline_token() {
            tracing::debug!("config file stores the bot token in plain text");
        }

        Ok(Self {
            tier: cli.tier.or(file.tier).unwrap_or_default(),
            host: cli.host.clone().or_else(|| file.host.clone()),
            user_agent: cli.user_agent.clone().or_else(|| file.user_agent.clone()),
            timeout: file.timeout.map(Duration::from_secs),
            token: cli.token.clone(),
            verbose: cli.verbose,
            config_path,
            file,
        })
    }

    /// Resolve the bot token: command line first, then the config file.
    pub fn token(&self) -> Result<Option<String>> {
        if let Some(token) = self.token.as_deref().map(str::trim) {
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(self.file.resolve_token()?)
    }

    /// Build an API client from the effective settings.
    pub fn client(&self) -> Result<FourPlayerChess> {
        let Some(token) = self.token()? else {
            let location = self
                .config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "the config file".to_string());
            anyhow::bail!(
                "no bot token: pass --token, set FOURPC_TOKEN, or add `token`/`token-file` to {location}"
            );
        };

        let mut builder = FourPlayerChess::builder().token(token).tier(self.tier);
        if let Some(host) = &self.host {
            builder = builder.host(host);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
