//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use mcp_debate::config::{Config, DEFAULT_OPPONENT_DELAY_MS};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     log_level: "info".to_string(),
//!     opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
//! };
//!
//! assert_eq!(config.opponent_delay().as_millis(), 1500);
//! ```

use std::time::Duration;

use crate::error::ConfigError;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default opponent reply delay in milliseconds.
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 1_500;

/// Maximum accepted opponent reply delay in milliseconds.
pub const MAX_OPPONENT_DELAY_MS: u64 = 60_000;

/// Recognized log levels.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Application configuration.
///
/// This struct holds all configuration values for the MCP Debate Server.
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Artificial delay before each opponent message, in milliseconds.
    pub opponent_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `OPPONENT_DELAY_MS`: Delay before opponent messages (default: `1500`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `LOG_LEVEL` is not one of `error`, `warn`, `info`, `debug`, `trace`
    /// - `OPPONENT_DELAY_MS` is not a valid non-negative integer
    /// - `OPPONENT_DELAY_MS` exceeds [`MAX_OPPONENT_DELAY_MS`]
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

        let opponent_delay_ms = parse_env_u64("OPPONENT_DELAY_MS", DEFAULT_OPPONENT_DELAY_MS)?;

        let config = Self {
            log_level,
            opponent_delay_ms,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any value is out of its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".into(),
                reason: "must be one of: error, warn, info, debug, trace".into(),
            });
        }

        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(ConfigError::OutOfRange {
                var: "OPPONENT_DELAY_MS".into(),
                reason: format!("must be at most {MAX_OPPONENT_DELAY_MS}"),
            });
        }

        Ok(())
    }

    /// The opponent reply delay as a [`Duration`].
    #[must_use]
    pub const fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a non-negative integer".into(),
        })
    })
}
