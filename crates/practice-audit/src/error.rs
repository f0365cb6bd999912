//! Error types for the audit binary.
//!
//! [`AuditError`] is the top-level error type that wraps all possible
//! failure modes during configuration, directory startup, and reporting.

/// Top-level error for the audit binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: practice_core::ConfigError,
    },

    /// The directory could not be built from its seed.
    #[error("bootstrap error: {source}")]
    Bootstrap {
        /// The underlying bootstrap error.
        #[from]
        source: practice_core::BootstrapError,
    },

    /// The integrity report could not be serialized.
    #[error("report serialization failed: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The audit found warnings and the policy treats them as fatal.
    #[error("integrity audit failed: {warnings} warning(s) with audit.fail_on_warnings set")]
    Policy {
        /// Number of warning-level anomalies found.
        warnings: usize,
    },
}
