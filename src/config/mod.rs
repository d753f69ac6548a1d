//! Configuration loading and merging
//!
//! Settings come from three sources, lowest to highest priority:
//! built-in defaults, an optional TOML config file (`.nufind.toml` in
//! the current directory, or `--config <FILE>`), and the command line.

use crate::cli::Args;
use crate::error::{NufindError, Result};
use crate::models::{OutputFormat, PartialSettings, Settings};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".nufind.toml";

/// Parse a TOML configuration file into partial settings.
pub fn parse_config_file(path: &Path) -> Result<PartialSettings> {
    let content = fs::read_to_string(path).map_err(|e| NufindError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| NufindError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Convert parsed command-line arguments into partial settings.
///
/// Only flags the user actually passed become `Some`, so CLI values
/// override the config file without clobbering its other fields.
pub fn partial_from_args(args: &Args) -> PartialSettings {
    PartialSettings {
        scan_path: args.dir.clone(),
        output_file: args.out.clone(),
        output_format: args.format.map(Into::into),
        excluded_dirs: None,
        exclude_patterns: if args.exclude.is_empty() {
            None
        } else {
            Some(args.exclude.clone())
        },
        max_depth: args.max_depth,
        follow_links: args.follow_links.then_some(true),
        parallel: args.no_parallel.then_some(false),
        quiet: args.quiet.then_some(true),
        verbose: args.verbose.then_some(true),
        use_colors: args.no_colors.then_some(false),
        show_progress: args.no_progress.then_some(false),
    }
}

/// Configuration builder merging sources in priority order.
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Load a config file; missing or malformed files are errors.
    pub fn add_config_file(mut self, path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NufindError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        self.partial.merge_from(parse_config_file(path)?);
        Ok(self)
    }

    /// Load the default config file if one exists; absence is fine.
    pub fn try_add_default_config_file(mut self) -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            self.partial.merge_from(parse_config_file(path)?);
        }
        Ok(self)
    }

    /// Merge a higher-priority source on top.
    pub fn merge(mut self, other: PartialSettings) -> Self {
        self.partial.merge_from(other);
        self
    }

    /// Resolve and validate the final settings.
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.into_settings();
        validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(settings: &Settings) -> Result<()> {
    if !settings.scan_path.is_dir() {
        return Err(NufindError::InvalidPath {
            path: settings.scan_path.clone(),
        });
    }

    for pattern in &settings.exclude_patterns {
        glob::Pattern::new(pattern)?;
    }

    if settings.max_depth == Some(0) {
        return Err(NufindError::config_error("max_depth must be at least 1"));
    }

    if let Some(out) = &settings.output_file {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(NufindError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }
    }

    Ok(())
}

// OutputFormat conversion lives here so models stays clap-free.
impl From<crate::cli::FormatArg> for OutputFormat {
    fn from(value: crate::cli::FormatArg) -> Self {
        match value {
            crate::cli::FormatArg::Text => OutputFormat::Text,
            crate::cli::FormatArg::Json => OutputFormat::Json,
            crate::cli::FormatArg::Csv => OutputFormat::Csv,
        }
    }
}
