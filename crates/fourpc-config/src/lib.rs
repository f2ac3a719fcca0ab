//! Configuration for the fourpc console.
//!
//! A single TOML file (`config.toml` in the user config directory) holds
//! the bot token, access tier and connection settings:
//!
//! ```toml
//! token-file = "~/.config/fourpc/token"
//! tier = "main"
//! user-agent = "my-bot/1.0"
//! timeout = 10
//! ```
//!
//! Command-line flags and environment variables override the file; that
//! layering is done by the console itself.

pub mod discovery;
pub mod error;
pub mod types;

pub use discovery::{
    config_dir, config_path, load_config_from, save_config_to, CONFIG_DIR_ENV,
};
pub use error::{ConfigError, Result};
pub use types::Config;
