//! JSON seed fixtures.
//!
//! A fixture is a single JSON document holding the three record
//! collections, in the same `camelCase` shape the admin UI consumes:
//!
//! ```json
//! { "companies": [...], "employees": [...], "insurancePlans": [...] }
//! ```
//!
//! Loading a fixture only parses it; [`SeedData::into_directory`] is where
//! referential integrity is enforced.

use std::path::Path;

use practice_types::{Company, Employee, InsurancePlan};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::directory::Directory;
use crate::error::DirectoryError;

/// Errors that can occur while loading a fixture into a directory.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Failed to read the fixture file from disk.
    #[error("failed to read seed fixture: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON or does not match the record shapes.
    #[error("failed to parse seed fixture: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The records parsed but violate referential integrity.
    #[error("seed fixture failed integrity checks: {source}")]
    Directory {
        /// The underlying directory error.
        #[from]
        source: DirectoryError,
    },
}

/// The three record collections that seed a [`Directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    /// Company records, in display order.
    #[serde(default)]
    pub companies: Vec<Company>,
    /// Employee records, in display order.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Insurance plan records, in display order.
    #[serde(default)]
    pub insurance_plans: Vec<InsurancePlan>,
}

impl SeedData {
    /// Parse a fixture from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Json`] if the string is not a valid fixture.
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Io`] if the file cannot be read, or
    /// [`FixtureError::Json`] if its content is not a valid fixture.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let contents = std::fs::read_to_string(path)?;
        let seed = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            companies = seed.companies.len(),
            employees = seed.employees.len(),
            insurance_plans = seed.insurance_plans.len(),
            "Seed fixture loaded"
        );
        Ok(seed)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the records and build a [`Directory`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError`] on the first integrity violation.
    pub fn into_directory(self) -> Result<Directory, DirectoryError> {
        Directory::new(self.companies, self.employees, self.insurance_plans)
    }

    /// Read a fixture file and build a [`Directory`] from it.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read or parsed, or if
    /// its records violate referential integrity.
    pub fn load_directory(path: &Path) -> Result<Directory, FixtureError> {
        Ok(Self::from_path(path)?.into_directory()?)
    }
}

impl Directory {
    /// Copy the directory's records back out as seed data, in seed order.
    pub fn to_seed(&self) -> SeedData {
        SeedData {
            companies: self.companies().to_vec(),
            employees: self.employees().to_vec(),
            insurance_plans: self.insurance_plans().to_vec(),
        }
    }
}
