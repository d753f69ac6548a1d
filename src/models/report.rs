//! Aggregated scan results
//!
//! Packages are deduplicated with set semantics and grouped by name in
//! first-seen order, so a report is deterministic for a given traversal
//! order.

use crate::error::NufindError;
use crate::models::package::Package;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::Duration;

/// All distinct versions recorded for one package name, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct PackageGroup {
    pub name: String,
    pub versions: Vec<String>,
}

/// A non-fatal problem recorded during the scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

/// The grouped result of a scan run.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Package groups in first-seen order
    pub groups: Vec<PackageGroup>,
    /// Number of manifest files found by the walker
    pub manifests_found: usize,
    /// Files skipped because their contents could not be parsed
    pub skipped_files: Vec<PathBuf>,
    /// Non-fatal traversal problems
    pub warnings: Vec<ScanWarning>,
    /// Total scan duration in milliseconds
    pub duration_ms: u128,
    /// When the scan finished
    pub completed_at: chrono::DateTime<chrono::Utc>,

    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip)]
    seen: HashSet<Package>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            manifests_found: 0,
            skipped_files: Vec::new(),
            warnings: Vec::new(),
            duration_ms: 0,
            completed_at: chrono::Utc::now(),
            index: HashMap::new(),
            seen: HashSet::new(),
        }
    }

    /// Build a report from a sequence of package declarations.
    pub fn from_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        let mut report = Self::new();
        for package in packages {
            report.add_package(package);
        }
        report
    }

    /// Record one package declaration.
    ///
    /// Exact duplicates (same name and version) are dropped; a new version
    /// of an already-known name is appended to that name's group.
    pub fn add_package(&mut self, package: Package) {
        if !self.seen.insert(package.clone()) {
            return;
        }
        match self.index.get(&package.name) {
            Some(&i) => self.groups[i].versions.push(package.version),
            None => {
                self.index.insert(package.name.clone(), self.groups.len());
                self.groups.push(PackageGroup {
                    name: package.name,
                    versions: vec![package.version],
                });
            }
        }
    }

    /// Record a non-fatal problem for the summary.
    pub fn add_warning(&mut self, path: PathBuf, err: &NufindError) {
        self.warnings.push(ScanWarning {
            path,
            message: err.to_string(),
        });
    }

    /// Record a file that was skipped due to a parse failure.
    pub fn add_skipped_file(&mut self, path: PathBuf) {
        self.skipped_files.push(path);
    }

    pub fn set_scan_duration(&mut self, duration: Duration) {
        self.duration_ms = duration.as_millis();
        self.completed_at = chrono::Utc::now();
    }

    /// Number of distinct package names.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Versions recorded for a name, if any.
    pub fn versions_of(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&i| self.groups[i].versions.as_slice())
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_empty_report() {
        let report = Report::from_packages([]);
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn exact_duplicates_collapse_to_one_entry() {
        let report = Report::from_packages([
            Package::new("Foo", "1.0.0"),
            Package::new("Foo", "1.0.0"),
            Package::new("Foo", "1.0.0"),
        ]);
        assert_eq!(report.versions_of("Foo"), Some(&["1.0.0".to_string()][..]));
    }

    #[test]
    fn versions_group_under_one_name_in_first_seen_order() {
        let report = Report::from_packages([
            Package::new("Foo", "2.0.0"),
            Package::new("Bar", "0.1.0"),
            Package::new("Foo", "1.0.0"),
        ]);
        assert_eq!(report.len(), 2);
        assert_eq!(report.groups[0].name, "Foo");
        assert_eq!(report.groups[0].versions, vec!["2.0.0", "1.0.0"]);
        assert_eq!(report.groups[1].name, "Bar");
    }

    #[test]
    fn syntactically_distinct_versions_stay_distinct() {
        let report = Report::from_packages([
            Package::new("Foo", "1.2"),
            Package::new("Foo", "1.2.0"),
        ]);
        assert_eq!(report.versions_of("Foo").unwrap().len(), 2);
    }
}
