//! Configuration schema definitions
//!
//! Every field has a default so an empty or partial file is valid.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `search.debounce_ms`.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check values that parse but cannot be used.
    ///
    /// Thresholds outside `[0, 1]` are allowed; negative admits every item
    /// and above one admits none.
    pub fn validate(&self) -> Result<()> {
        if !self.search.threshold.is_finite() {
            return Err(Error::invalid_config_value(
                "search.threshold",
                format!("must be a finite number, got {}", self.search.threshold),
            ));
        }

        if self.search.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::invalid_config_value(
                "search.debounce_ms",
                format!("must be at most {}, got {}", MAX_DEBOUNCE_MS, self.search.debounce_ms),
            )
            .with_suggestion("Use a delay of a few hundred milliseconds"));
        }

        if self.search.limit == Some(0) {
            return Err(Error::invalid_config_value(
                "search.limit",
                "must be positive; omit it to return every match",
            ));
        }

        Ok(())
    }
}

/// Ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Minimum score (inclusive) for a result to be kept
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Maximum number of results to print
    #[serde(default)]
    pub limit: Option<usize>,

    /// Quiet period before an interactive query is ranked
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            limit: None,
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_threshold() -> f64 {
    0.65
}

fn default_debounce_ms() -> u64 {
    300
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Include the event target in log lines
    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.search.threshold, 0.65);
        assert_eq!(schema.search.debounce_ms, 300);
        assert!(schema.search.limit.is_none());
        assert_eq!(schema.logging.level, "warn");
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let schema: ConfigSchema = toml::from_str("[search]\nlimit = 5\n").unwrap();
        assert_eq!(schema.search.limit, Some(5));
        assert_eq!(schema.search.threshold, 0.65);
        assert_eq!(schema.logging, LoggingConfig::default());
    }

    #[test]
    fn test_out_of_range_threshold_is_valid() {
        let mut schema = ConfigSchema::default();
        schema.search.threshold = -0.5;
        assert!(schema.validate().is_ok());
        schema.search.threshold = 1.5;
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let schema: ConfigSchema = toml::from_str("[search]\nthreshold = nan\n").unwrap();
        let err = schema.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_debounce_bound() {
        let mut schema = ConfigSchema::default();
        schema.search.debounce_ms = MAX_DEBOUNCE_MS + 1;
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut schema = ConfigSchema::default();
        schema.search.limit = Some(0);
        assert!(schema.validate().is_err());
    }
}
