//! nufind - NuGet dependency declaration finder
//!
//! Walks a directory tree, extracts package declarations from `.csproj`
//! and `packages.config` manifests, deduplicates them and reports them
//! grouped by package name.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use self::core::{Scanner, Walker};
pub use error::{ErrorSeverity, NufindError, Result};
pub use models::{OutputFormat, Package, PackageGroup, Report, Settings};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
