//! Config file location, loading and saving.

use std::path::{Path, PathBuf};

use crate::{Config, ConfigError, Result};

/// Config filename within the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application name for platform directory resolution.
const APP_NAME: &str = "fourpc";

/// Environment variable to override the config directory.
///
/// When set and non-empty, this takes precedence over the platform default.
pub const CONFIG_DIR_ENV: &str = "FOURPC_CONFIG_DIR";

/// Get the config directory for fourpc.
///
/// Checks `FOURPC_CONFIG_DIR` first, then falls back to the platform default
/// (`~/.config/fourpc` on Linux, `~/Library/Application Support/fourpc` on macOS).
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Load config from a specific path.
///
/// Returns an empty config for `None` or a missing file.
pub fn load_config_from(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    if !path.exists() {
        return Ok(Config::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Config::from_toml(&contents)
}

/// Save config to a specific path.
///
/// Creates parent directories if they don't exist.
pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let contents = config.to_toml()?;
    std::fs::write(path, contents).map_err(|e| ConfigError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use fourpc_client::AccessTier;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_none_is_default() {
        assert_eq!(load_config_from(None).unwrap(), Config::new());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_config_from(Some(&dir.path().join("config.toml"))).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "tier = [").unwrap();

        assert!(matches!(
            load_config_from(Some(&path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("fourpc").join("config.toml");

        let config = Config {
            tier: Some(AccessTier::Main),
            user_agent: Some("bot/2".to_string()),
            ..Default::default()
        };
        save_config_to(&config, &path).unwrap();

        assert_eq!(load_config_from(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_config_path_file_name() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
