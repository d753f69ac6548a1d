//! Scan orchestration
//!
//! Ties the walker, the per-format extractors and the report together:
//! walk the tree, extract each manifest (optionally fanned out over a
//! rayon pool), merge everything into one deduplicated report. A file
//! that fails to parse is announced on stderr and skipped; it never
//! aborts the run.

use crate::core::walker::Walker;
use crate::error::Result;
use crate::models::{Package, Report, Settings};
use crate::parsers;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

pub struct Scanner {
    settings: Settings,
}

impl Scanner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run a full scan without progress reporting.
    pub fn scan(&self) -> Result<Report> {
        self.scan_with_progress(|_, _, _| {})
    }

    /// Run a full scan, invoking `progress_fn(current, total, message)`
    /// as work advances.
    pub fn scan_with_progress<F>(&self, progress_fn: F) -> Result<Report>
    where
        F: Fn(usize, usize, &str),
    {
        let start = Instant::now();
        let mut report = Report::new();

        progress_fn(
            0,
            0,
            &format!("Scanning {}", self.settings.scan_path.display()),
        );

        let mut walker = Walker::new(self.settings.clone());
        let manifests = walker.find_manifests()?;
        for (path, err) in walker.take_warnings() {
            report.add_warning(path, &err);
        }
        report.manifests_found = manifests.len();
        progress_fn(
            0,
            manifests.len(),
            &format!("Found {} manifest files", manifests.len()),
        );

        if self.settings.parallel {
            // Fan out per file; collect() keeps index order so the merged
            // report is identical to a sequential run
            let extracted: Vec<(PathBuf, Result<Vec<Package>>)> = manifests
                .into_par_iter()
                .map(|path| {
                    let result = parsers::extract(&path);
                    (path, result)
                })
                .collect();
            let total = extracted.len();
            for (i, (path, result)) in extracted.into_iter().enumerate() {
                progress_fn(i + 1, total, &path.display().to_string());
                merge_file_result(&mut report, path, result);
            }
        } else {
            let total = manifests.len();
            for (i, path) in manifests.into_iter().enumerate() {
                progress_fn(i + 1, total, &path.display().to_string());
                let result = parsers::extract(&path);
                merge_file_result(&mut report, path, result);
            }
        }

        report.set_scan_duration(start.elapsed());
        Ok(report)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

fn merge_file_result(report: &mut Report, path: PathBuf, result: Result<Vec<Package>>) {
    match result {
        Ok(packages) => {
            for package in packages {
                report.add_package(package);
            }
        }
        Err(err) => {
            // The skip notice is the only user-visible signal of a bad file
            eprintln!("Error. Skip file {}", path.display());
            report.add_warning(path.clone(), &err);
            report.add_skipped_file(path);
        }
    }
}
