//! Plugin configuration.
//!
//! Loaded from a TOML file or string. Every section implements [`Default`]
//! with production values, so a bare `[timeouts]` header (or no file at
//! all) produces a working configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A config file or string was not valid TOML.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path (or `<string>`) that failed to parse.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The parsed configuration failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Timeout budgets for plugin operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutsSection {
    /// How long to wait for the SDK to settle a full-screen or rewarded
    /// request before giving up, in seconds. The SDK's promise is known
    /// to hang on developer environments; this window is the backstop.
    pub ad_settle_secs: u64,
}

impl Default for TimeoutsSection {
    fn default() -> Self {
        Self { ad_settle_secs: 5 }
    }
}

/// Root configuration for the ad plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Publisher-assigned game identifier, handed to the SDK before load.
    pub game_id: String,
    /// Whether to open the SDK's debug console after a successful
    /// handshake (at most once per installation).
    pub debug: bool,
    /// Timeout budgets.
    pub timeouts: TimeoutsSection,
}

impl PluginConfig {
    /// A default configuration for `game_id`.
    #[must_use]
    pub fn for_game(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: "<string>".to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, plus the
    /// errors of [`Self::from_toml_str`].
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), game_id = %config.game_id, "loaded plugin config");
        Ok(config)
    }

    /// The settle window as a [`Duration`].
    #[must_use]
    pub fn ad_settle_window(&self) -> Duration {
        Duration::from_secs(self.timeouts.ad_settle_secs)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.game_id.is_empty() {
            return Err(ConfigError::Invalid("game_id must not be empty".into()));
        }
        if self.timeouts.ad_settle_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeouts.ad_settle_secs must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_production_values() {
        let config = PluginConfig::for_game("game-1");
        assert_eq!(config.game_id, "game-1");
        assert!(!config.debug);
        assert_eq!(config.timeouts.ad_settle_secs, 5);
        assert_eq!(config.ad_settle_window(), Duration::from_secs(5));
    }

    #[test]
    fn parses_full_toml() {
        let config = PluginConfig::from_toml_str(
            r#"
            game_id = "game-2"
            debug = true

            [timeouts]
            ad_settle_secs = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.game_id, "game-2");
        assert!(config.debug);
        assert_eq!(config.timeouts.ad_settle_secs, 8);
    }

    #[test]
    fn bare_section_header_uses_defaults() {
        let config = PluginConfig::from_toml_str("game_id = \"g\"\n[timeouts]\n").unwrap();
        assert_eq!(config.timeouts, TimeoutsSection::default());
    }

    #[test]
    fn empty_game_id_is_invalid() {
        let err = PluginConfig::from_toml_str("debug = true").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_settle_window_is_invalid() {
        let err = PluginConfig::from_toml_str(
            "game_id = \"g\"\n[timeouts]\nad_settle_secs = 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = PluginConfig::from_toml_str("game_id = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
