//! Company, employee, and insurance plan directory for the practice admin.
//!
//! This crate is the lookup layer the admin UI reads from: a fixed,
//! in-memory set of records validated once at construction, plus indices
//! that make point lookups and one-hop filters constant-time.
//!
//! # Modules
//!
//! - [`directory`] -- [`Directory`]: the validated store, its indices, and
//!   the query API (lookup by id, employees of a company, plans offered by
//!   a company, and the reverse relationships).
//! - [`edit`] -- Copy-on-write edits returning a new validated directory.
//! - [`error`] -- Integrity and edit errors.
//! - [`fixture`] -- [`SeedData`] JSON fixtures.
//! - [`integrity`] -- Soft-invariant audit producing an [`IntegrityReport`].
//! - [`seed`] -- Built-in demo dataset.
//!
//! [`IntegrityReport`]: integrity::IntegrityReport
//! [`SeedData`]: fixture::SeedData

pub mod directory;
pub mod edit;
pub mod error;
pub mod fixture;
pub mod integrity;
pub mod seed;

#[cfg(test)]
mod test_support;

// Re-export primary types at crate root.
pub use directory::Directory;
pub use error::DirectoryError;
pub use fixture::{FixtureError, SeedData};
pub use integrity::{AmountField, IntegrityAnomaly, IntegrityReport, Severity, audit};
pub use seed::{demo_directory, demo_seed};
