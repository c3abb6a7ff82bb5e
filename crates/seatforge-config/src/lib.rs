//! Configuration system for SeatForge.
//!
//! Load solver configuration from TOML or YAML files to control the random
//! seed, search budget and input validation without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use seatforge_config::SolverConfig;
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     random_seed = 7
//!
//!     [termination]
//!     node_count_limit = 500000
//!     seconds_spent_limit = 5
//! "#).unwrap();
//!
//! assert_eq!(config.random_seed, Some(7));
//! assert_eq!(config.node_limit(), Some(500_000));
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(5)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use seatforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("seatforge.toml").unwrap_or_default();
//! // Proceeds with an unbounded, randomly seeded search
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Seed for the within-row shuffle. `None` draws a fresh seed per solve.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Check the roster and constraints before searching.
    #[serde(default = "default_validate_input")]
    pub validate_input: bool,

    /// Search budget. `None` searches until exhaustion.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_validate_input() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            validate_input: true,
            termination: None,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension
    /// (`.yaml`/`.yml` for YAML, anything else for TOML).
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects budgets that would stop the search before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.node_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "node_count_limit must be greater than zero".to_string(),
                ));
            }
            if termination.time_limit() == Some(Duration::ZERO) {
                return Err(ConfigError::Invalid(
                    "time limit must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the search node budget.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the wall-clock budget, at millisecond resolution.
    ///
    /// A partial millisecond rounds up, so a non-zero limit stays non-zero.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        let millis = limit.as_nanos().div_ceil(1_000_000);
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: None,
            millis_spent_limit: Some(u64::try_from(millis).unwrap_or(u64::MAX)),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Enables or disables input validation.
    pub fn with_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }

    /// Returns the node budget, if configured.
    pub fn node_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of search nodes (placement attempts) to visit.
    pub node_count_limit: Option<u64>,

    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        if self.seconds_spent_limit.is_none() && self.millis_spent_limit.is_none() {
            return None;
        }
        let secs = Duration::from_secs(self.seconds_spent_limit.unwrap_or(0));
        let millis = Duration::from_millis(self.millis_spent_limit.unwrap_or(0));
        Some(secs.saturating_add(millis))
    }
}
