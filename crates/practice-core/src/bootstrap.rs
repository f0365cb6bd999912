//! Startup: build the directory from configuration and audit it.
//!
//! [`bootstrap`] resolves the configured seed source, enforces referential
//! integrity through [`Directory`] construction, and runs the soft-invariant
//! audit. The caller decides what to do with the report via
//! [`Bootstrapped::passes`].

use practice_directory::{Directory, DirectoryError, FixtureError, IntegrityReport, Severity};
use tracing::info;

use crate::config::{AuditConfig, PracticeConfig, SeedSource};

/// Errors that can occur while building the directory at startup.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The seed fixture could not be loaded or failed integrity checks.
    #[error("fixture seed failed: {source}")]
    Fixture {
        /// The underlying fixture error.
        #[from]
        source: FixtureError,
    },

    /// The built-in seed failed integrity checks.
    #[error("built-in seed failed: {source}")]
    Directory {
        /// The underlying directory error.
        #[from]
        source: DirectoryError,
    },
}

/// A validated directory together with its audit report.
#[derive(Debug, Clone)]
pub struct Bootstrapped {
    /// The directory every query reads from.
    pub directory: Directory,
    /// Soft-invariant findings for that directory.
    pub report: IntegrityReport,
}

impl Bootstrapped {
    /// Whether the audit report is acceptable under the given policy.
    ///
    /// Info-level findings never fail the policy.
    pub fn passes(&self, policy: &AuditConfig) -> bool {
        !(policy.fail_on_warnings && self.report.has_warnings())
    }
}

/// Build and audit the directory described by `config`.
///
/// # Errors
///
/// Returns [`BootstrapError::Fixture`] if the fixture cannot be read, parsed,
/// or validated, and [`BootstrapError::Directory`] if the built-in seed
/// violates referential integrity.
pub fn bootstrap(config: &PracticeConfig) -> Result<Bootstrapped, BootstrapError> {
    let directory = match config.seed.source {
        SeedSource::Builtin => practice_directory::demo_directory()?,
        SeedSource::Fixture => {
            practice_directory::SeedData::load_directory(&config.seed.fixture_path)?
        }
    };

    let report = practice_directory::audit(&directory);

    info!(
        source = ?config.seed.source,
        companies = directory.company_count(),
        employees = directory.employee_count(),
        insurance_plans = directory.insurance_plan_count(),
        warnings = report.count(Severity::Warning),
        "Directory ready"
    );

    Ok(Bootstrapped { directory, report })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::SeedConfig;

    fn fixture_config(path: &str) -> PracticeConfig {
        PracticeConfig {
            seed: SeedConfig {
                source: SeedSource::Fixture,
                fixture_path: PathBuf::from(path),
            },
            ..PracticeConfig::default()
        }
    }

    #[test]
    fn builtin_seed_bootstraps_cleanly() {
        let result = bootstrap(&PracticeConfig::default());
        assert!(result.is_ok());
        if let Ok(boot) = result {
            assert_eq!(boot.directory.company_count(), 3);
            assert!(!boot.report.has_warnings());
            assert!(boot.passes(&AuditConfig { fail_on_warnings: true }));
        }
    }

    #[test]
    fn missing_fixture_is_a_fixture_error() {
        let result = bootstrap(&fixture_config("/nonexistent/practice-seed.json"));
        assert!(matches!(result, Err(BootstrapError::Fixture { .. })));
    }

    #[test]
    fn warnings_fail_only_a_strict_policy() {
        let mut seed = practice_directory::demo_seed();
        if let Some(plan) = seed.insurance_plans.first_mut() {
            plan.premium.employee_contribution = 30;
        }
        let directory = seed.into_directory().unwrap_or_default();
        let boot = Bootstrapped {
            report: practice_directory::audit(&directory),
            directory,
        };
        assert!(boot.report.has_warnings());
        assert!(boot.passes(&AuditConfig::default()));
        assert!(!boot.passes(&AuditConfig { fail_on_warnings: true }));
    }
}
