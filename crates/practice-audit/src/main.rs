//! Startup audit binary for the practice administration directory.
//!
//! Builds the directory exactly as the admin backend would at startup,
//! prints the integrity report as JSON on stdout, and exits non-zero when
//! the directory cannot be built or the audit policy fails.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `practice-config.yaml` (or `PRACTICE_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the directory from the configured seed and audit it
//! 4. Print the report
//! 5. Apply the audit policy

mod error;

use std::path::PathBuf;

use practice_core::{LoggingConfig, PracticeConfig};
use practice_directory::Severity;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::AuditError;

/// Environment variable that overrides the configuration file path.
const CONFIG_PATH_ENV: &str = "PRACTICE_CONFIG";

/// Configuration file read when `PRACTICE_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "practice-config.yaml";

/// Application entry point for the audit binary.
///
/// # Errors
///
/// Returns an error if configuration or seed loading fails, or if the
/// audit policy rejects the report.
fn main() -> Result<(), AuditError> {
    // 1. Load configuration. Logging is not up yet, so remember whether
    //    the file existed and report it afterwards.
    let config_path = config_path(|key| std::env::var(key).ok());
    let (config, found) = load_config(&config_path)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("practice-audit starting");
    if found {
        info!(path = %config_path.display(), "Configuration loaded");
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }

    // 3. Build and audit the directory.
    let boot = practice_core::bootstrap(&config).inspect_err(|e| {
        error!(error = %e, "Directory bootstrap failed");
    })?;

    // 4. Print the report.
    println!("{}", serde_json::to_string_pretty(&boot.report)?);

    // 5. Apply the audit policy.
    if !boot.passes(&config.audit) {
        let warnings = boot.report.count(Severity::Warning);
        error!(warnings, "Integrity audit rejected by policy");
        return Err(AuditError::Policy { warnings });
    }

    info!(
        anomalies = boot.report.anomalies.len(),
        "practice-audit finished"
    );
    Ok(())
}

/// Resolve the configuration file path from a key lookup.
fn config_path<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CONFIG_PATH_ENV).map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration from `path`, falling back to defaults (plus
/// environment overrides) when the file does not exist.
///
/// The returned flag is `true` when the file was read.
fn load_config(path: &std::path::Path) -> Result<(PracticeConfig, bool), AuditError> {
    if path.exists() {
        Ok((PracticeConfig::from_file(path)?, true))
    } else {
        let mut config = PracticeConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `logging.level` when set.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn config_path_defaults_to_project_file() {
        assert_eq!(config_path(|_| None), PathBuf::from("practice-config.yaml"));
    }

    #[test]
    fn config_path_honors_override() {
        let path = config_path(|key| (key == CONFIG_PATH_ENV).then(|| "/etc/practice.yaml".to_owned()));
        assert_eq!(path, PathBuf::from("/etc/practice.yaml"));
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let result = load_config(Path::new("/nonexistent/practice-config.yaml"));
        assert!(matches!(result, Ok((_, false))));
    }

    #[test]
    fn policy_error_names_the_warning_count() {
        let err = AuditError::Policy { warnings: 2 };
        assert!(err.to_string().contains("2 warning(s)"));
    }
}
