//! Configuration file contents.

use std::path::{Path, PathBuf};

use fourpc_client::AccessTier;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Root configuration structure.
///
/// Every field is optional; unset fields fall back to the client defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Bot token, stored inline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// File containing the bot token. Used when `token` is unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,

    /// Access tier (`beta` or `main`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<AccessTier>,

    /// Host override, replacing the tier host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// User agent sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Action request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Config {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the bot token: inline `token` first, then `token-file`.
    ///
    /// Returns `Ok(None)` when neither is set or the token is blank.
    pub fn resolve_token(&self) -> Result<Option<String>> {
        if let Some(token) = self.token.as_deref().map(str::trim) {
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }

        let Some(path) = &self.token_file else {
            return Ok(None);
        };

        let expanded = expand_path(path);
        let token = std::fs::read_to_string(&expanded).map_err(|e| ConfigError::ReadFile {
            path: expanded.display().to_string(),
            source: e,
        })?;
        let token = token.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    /// Whether the config stores the token in plain text.
    pub fn has_inline_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Expand `~/` to the home directory.
fn expand_path(path: &Path) -> PathBuf {
    if let Some(s) = path.to_str() {
        if let Some(rest) = s.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(config.resolve_token().unwrap(), None);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
token = "abc"
tier = "main"
host = "http://localhost:9000"
user-agent = "my-bot/1.0"
timeout = 10
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.tier, Some(AccessTier::Main));
        assert_eq!(config.host.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.user_agent.as_deref(), Some("my-bot/1.0"));
        assert_eq!(config.timeout, Some(10));
        assert!(config.has_inline_token());
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let err = Config::from_toml("tier = \"staging\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_inline_token_wins_and_is_trimmed() {
        let config = Config {
            token: Some("  inline \n".to_string()),
            token_file: Some(PathBuf::from("/nonexistent/token")),
            ..Default::default()
        };
        assert_eq!(config.resolve_token().unwrap().as_deref(), Some("inline"));
    }

    #[test]
    fn test_token_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token");
        std::fs::write(&path, "from-file\n").unwrap();

        let config = Config {
            token_file: Some(path),
            ..Default::default()
        };
        assert_eq!(config.resolve_token().unwrap().as_deref(), Some("from-file"));
        assert!(!config.has_inline_token());
    }

    #[test]
    fn test_missing_token_file_is_error() {
        let config = Config {
            token_file: Some(PathBuf::from("/nonexistent/fourpc/token")),
            ..Default::default()
        };
        assert!(matches!(
            config.resolve_token(),
            Err(ConfigError::ReadFile { .. })
        ));
    }

    #[test]
    fn test_toml_roundtrip_skips_unset() {
        let config = Config {
            tier: Some(AccessTier::Beta),
            timeout: Some(5),
            ..Default::default()
        };
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("tier = \"beta\""));
        assert!(!toml.contains("token"));
        assert_eq!(Config::from_toml(&toml).unwrap(), config);
    }
}
