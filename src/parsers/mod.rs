//! Manifest extraction
//!
//! Two XML manifest formats are supported: SDK-style project files
//! (`*.csproj`) and legacy `packages.config` files. Dispatch is by
//! filename shape, matching the behavior callers rely on: anything that
//! is not a `.csproj` is treated as a packages.config.

pub mod csproj;
pub mod packages_config;
pub mod version;

use crate::error::{NufindError, Result};
use crate::models::Package;
use std::fs;
use std::path::Path;

/// Manifest filename matched exactly by the walker.
pub const PACKAGES_CONFIG: &str = "packages.config";

/// Project-file extension matched by the walker.
pub const CSPROJ_EXT: &str = ".csproj";

/// Check whether a filename identifies a supported manifest.
pub fn is_manifest_name(name: &str) -> bool {
    name.ends_with(CSPROJ_EXT) || name == PACKAGES_CONFIG
}

/// Extract all package declarations from one manifest file.
///
/// Returns an error for unreadable files or malformed XML; the scanner
/// catches these per file so one bad manifest never aborts a run.
pub fn extract(path: &Path) -> Result<Vec<Package>> {
    let content = fs::read_to_string(path).map_err(NufindError::io_error)?;

    let result = if path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(CSPROJ_EXT))
    {
        csproj::parse(&content)
    } else {
        packages_config::parse(&content)
    };

    result.map_err(|e| NufindError::xml_parse_error(path, e))
}
