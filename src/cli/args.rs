//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// nufind - NuGet dependency declaration finder
#[derive(Parser, Debug)]
#[command(name = "nufind")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find NuGet package dependencies declared across a directory tree")]
#[command(long_about = "nufind walks a directory tree, extracts package declarations from \
.csproj and packages.config manifests, and reports them deduplicated and grouped by package \
name. Build-output, IDE and version-control directories are skipped automatically.")]
#[command(after_help = "EXAMPLES:

    # Scan the directory the binary lives in (default)
    nufind

    # Scan a specific directory
    nufind --dir ./my-solution

    # Save results to a file
    nufind --dir ./my-solution --out packages.txt

    # Skip additional directories and emit JSON
    nufind --exclude 'generated-*' --format json

    # Quiet single-threaded run for CI logs
    nufind --quiet --no-parallel --no-progress
")]
pub struct Args {
    /// Directory to start crawling
    #[arg(long, value_name = "PATH", help = "Root directory to scan (defaults to the directory the executable lives in)")]
    pub dir: Option<PathBuf>,

    /// File to save results
    #[arg(long, value_name = "FILE", help = "Write the report to this file instead of stdout")]
    pub out: Option<PathBuf>,

    /// Exclude directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for directory names to skip, in addition to the built-in set (can be repeated)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse below the root")]
    pub max_depth: Option<usize>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, value_name = "FORMAT", help = "Report format: 'text' for human-readable lines, 'json' or 'csv' for machine processing")]
    pub format: Option<FormatArg>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to a TOML configuration file (defaults to .nufind.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Only print the report itself, no progress or summary")]
    pub quiet: bool,

    /// Show detailed progress information
    #[arg(short, long, help = "Print per-file progress and a scan summary")]
    pub verbose: bool,

    /// Disable parallel extraction
    #[arg(long, help = "Extract manifests one at a time instead of fanning out over a thread pool")]
    pub no_parallel: bool,

    /// Disable the progress bar
    #[arg(long, help = "Disable the progress bar (useful for CI or redirected output)")]
    pub no_progress: bool,

    /// Disable colored output
    #[arg(long, help = "Disable ANSI colors in text output")]
    pub no_colors: bool,

    /// Follow symbolic links during traversal
    #[arg(long, help = "Follow symlinked directories (may revisit trees if links form cycles)")]
    pub follow_links: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_flags_parse() {
        let args = Args::parse_from(["nufind", "--dir", "/tmp", "--out", "result.txt"]);
        assert_eq!(args.dir, Some(PathBuf::from("/tmp")));
        assert_eq!(args.out, Some(PathBuf::from("result.txt")));
        assert!(args.format.is_none());
    }

    #[test]
    fn defaults_leave_everything_unset() {
        let args = Args::parse_from(["nufind"]);
        assert!(args.dir.is_none());
        assert!(args.out.is_none());
        assert!(args.exclude.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn repeated_excludes_accumulate() {
        let args = Args::parse_from(["nufind", "-e", "vendor", "-e", "generated-*"]);
        assert_eq!(args.exclude, vec!["vendor", "generated-*"]);
    }

    #[test]
    fn format_values_parse() {
        let args = Args::parse_from(["nufind", "--format", "json"]);
        assert_eq!(args.format, Some(FormatArg::Json));
    }
}
