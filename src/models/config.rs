//! Configuration structures
//!
//! `Settings` is the fully-resolved, immutable configuration for a run.
//! `PartialSettings` is the mergeable form produced by each configuration
//! source (defaults, config file, command line).

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Directory names the walker never descends into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".git", "bin", "obj", ".idea", ".vscode", ".vs", ".rider", "lib",
];

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Resolved configuration for a scan run.
///
/// Built once at startup and never mutated afterwards; the walker and
/// scanner receive it by reference.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root directory to scan
    pub scan_path: PathBuf,
    /// Write the report here instead of stdout
    pub output_file: Option<PathBuf>,
    /// Report rendering
    pub output_format: OutputFormat,
    /// Directory names that are never entered
    pub excluded_dirs: HashSet<String>,
    /// Additional user-supplied glob patterns matched against directory names
    pub exclude_patterns: Vec<String>,
    /// Maximum traversal depth below the root
    pub max_depth: Option<usize>,
    /// Follow symlinked directories
    pub follow_links: bool,
    /// Fan extraction out over a rayon pool
    pub parallel: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub use_colors: bool,
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: default_scan_root(),
            output_file: None,
            output_format: OutputFormat::Text,
            excluded_dirs: DEFAULT_EXCLUDED_DIRS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            follow_links: false,
            parallel: true,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// The directory the executable lives in, falling back to the current
/// directory. Used when `--dir` is not given.
pub fn default_scan_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Partial settings from one configuration source.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub excluded_dirs: Option<Vec<String>>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub parallel: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Overlay `other` on top of this source; fields set in `other` win.
    pub fn merge_from(&mut self, other: PartialSettings) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            scan_path,
            output_file,
            output_format,
            excluded_dirs,
            exclude_patterns,
            max_depth,
            follow_links,
            parallel,
            quiet,
            verbose,
            use_colors,
            show_progress
        );
    }

    /// Resolve into full settings, filling gaps with defaults.
    pub fn into_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            scan_path: self.scan_path.unwrap_or(defaults.scan_path),
            output_file: self.output_file,
            output_format: self.output_format.unwrap_or(defaults.output_format),
            excluded_dirs: self
                .excluded_dirs
                .map(|dirs| dirs.into_iter().collect())
                .unwrap_or(defaults.excluded_dirs),
            exclude_patterns: self.exclude_patterns.unwrap_or_default(),
            max_depth: self.max_depth,
            follow_links: self.follow_links.unwrap_or(defaults.follow_links),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
