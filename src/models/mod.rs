//! Data structures for packages, reports and configuration

pub mod config;
pub mod package;
pub mod report;

pub use config::{OutputFormat, PartialSettings, Settings};
pub use package::Package;
pub use report::{PackageGroup, Report};
