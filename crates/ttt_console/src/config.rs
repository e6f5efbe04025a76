//! Console configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ttt.toml";

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Seed for the random and lookahead players. Unset means a fresh
    /// seed from the operating system on every run.
    #[serde(default)]
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl ConsoleConfig {
    /// Creates a configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Replaces the configured seed when `seed` is set.
    pub fn seeded(self, seed: Option<u64>) -> Self {
        Self {
            seed: seed.or(self.seed),
            ..self
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the given file, or `ttt.toml` if present, or the defaults.
    ///
    /// An explicitly named file must exist; the default file is optional.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Builds the random number generator for computer players.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.seed(), &None);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ConsoleConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(config.seed(), &Some(7));
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_seed_override() {
        let config = ConsoleConfig::with_seed(1);
        assert_eq!(config.clone().seeded(None).seed(), &Some(1));
        assert_eq!(config.seeded(Some(2)).seed(), &Some(2));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = ConsoleConfig::with_seed(99);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
