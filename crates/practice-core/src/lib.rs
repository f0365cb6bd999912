//! Configuration and startup for the practice administration directory.
//!
//! This crate turns a `practice-config.yaml` document into a ready-to-query
//! [`Directory`](practice_directory::Directory) plus its integrity report.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `practice-config.yaml` into
//!   strongly-typed structs, with environment overrides.
//! - [`bootstrap`] -- [`bootstrap`](bootstrap::bootstrap): seed resolution,
//!   directory construction, and the startup audit.

pub mod bootstrap;
pub mod config;

pub use bootstrap::{BootstrapError, Bootstrapped, bootstrap};
pub use config::{AuditConfig, ConfigError, LoggingConfig, PracticeConfig, SeedConfig, SeedSource};
