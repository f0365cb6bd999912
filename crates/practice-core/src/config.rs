//! Configuration loading and typed config structures for the directory.
//!
//! The canonical configuration lives in `practice-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure and a
//! loader that reads it. Every field has a default, so an empty document
//! (or no file at all) yields a working configuration that serves the
//! built-in demo dataset.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable that points the seed at a JSON fixture file.
pub const SEED_FIXTURE_ENV: &str = "PRACTICE_SEED_FIXTURE";

/// Environment variable that overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "PRACTICE_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
///
/// Mirrors the structure of `practice-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PracticeConfig {
    /// Where the directory's records come from.
    #[serde(default)]
    pub seed: SeedConfig,

    /// Integrity audit policy.
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PracticeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `PRACTICE_SEED_FIXTURE` switches the seed to that fixture file
    /// - `PRACTICE_LOG_LEVEL` overrides `logging.level`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Override values with process environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override values from an arbitrary key lookup.
    ///
    /// [`apply_env_overrides`](Self::apply_env_overrides) passes the process
    /// environment; tests pass a fixed map.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(SEED_FIXTURE_ENV) {
            self.seed.source = SeedSource::Fixture;
            self.seed.fixture_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            self.logging.level = level;
        }
    }
}

/// Where seed records are loaded from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// The dataset compiled into `practice-directory`.
    #[default]
    Builtin,
    /// A JSON fixture file at `seed.fixture_path`.
    Fixture,
}

/// Seed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedConfig {
    /// Which source to load.
    #[serde(default)]
    pub source: SeedSource,

    /// Fixture file path, used when `source` is `fixture`.
    #[serde(default = "default_fixture_path")]
    pub fixture_path: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            source: SeedSource::default(),
            fixture_path: default_fixture_path(),
        }
    }
}

/// Integrity audit policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuditConfig {
    /// Treat warning-level anomalies as a startup failure.
    #[serde(default)]
    pub fail_on_warnings: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_fixture_path() -> PathBuf {
    PathBuf::from("seed.json")
}

fn default_log_level() -> String {
    "info".to_owned()
}
