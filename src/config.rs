//! Harness configuration, loaded from TOML.
//!
//! ```toml
//! caller_counts = [2, 8, 64]
//! rounds = 20
//! construction_delay_ms = 1
//! jitter = true
//! log_level = "info"
//! ```
//!
//! Every field is optional; missing fields take the defaults above.

use crate::error::ConfigError;
use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Number of concurrent first callers per round, one entry per scenario.
    pub caller_counts: Vec<usize>,
    /// Fresh slots raced per caller count and strategy.
    pub rounds: usize,
    /// How long the constructor sleeps, widening the check-then-store window.
    pub construction_delay_ms: u64,
    /// Random yields before each caller's first access.
    pub jitter: bool,
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            caller_counts: vec![2, 8, 64],
            rounds: 20,
            construction_delay_ms: 1,
            jitter: true,
            log_level: "info".to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: HarnessConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.caller_counts.is_empty() {
            return Err(ConfigError::invalid(
                "caller_counts",
                "at least one caller count is required",
            ));
        }
        if let Some(&n) = self.caller_counts.iter().find(|&&n| n < 2) {
            return Err(ConfigError::invalid(
                "caller_counts",
                format!("{} callers cannot race; use 2 or more", n),
            ));
        }
        if self.rounds == 0 {
            return Err(ConfigError::invalid("rounds", "must be at least 1"));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::invalid(
                "log_level",
                format!("'{}' is not one of off, error, warn, info, debug, trace", self.log_level),
            )
        })
    }

    pub fn construction_delay(&self) -> Duration {
        Duration::from_millis(self.construction_delay_ms)
    }
}
