//! Report formatters
//!
//! Text output is one line per package name, `name: v1, v2`, in the
//! order the packages were discovered. JSON and CSV renderings are for
//! machine consumption.

use crate::error::{NufindError, Result};
use crate::models::{OutputFormat, Report};
use ansi_term::Colour::Blue;
use ansi_term::Style;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a scan report into a string
    fn format(&self, report: &Report) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for group in &report.groups {
            let versions = group.versions.join(", ");
            if self.use_colors {
                output.push_str(&format!(
                    "{}: {}\n",
                    Blue.bold().paint(&group.name),
                    Style::new().dimmed().paint(&versions)
                ));
            } else {
                output.push_str(&format!("{}: {}\n", group.name, versions));
            }
        }

        if self.verbose && !self.quiet {
            output.push('\n');
            output.push_str(&format!("Manifests found: {}\n", report.manifests_found));
            output.push_str(&format!("Distinct packages: {}\n", report.len()));
            if !report.skipped_files.is_empty() {
                output.push_str(&format!("Skipped files: {}\n", report.skipped_files.len()));
                for path in &report.skipped_files {
                    output.push_str(&format!("  {}\n", path.display()));
                }
            }
            if !report.warnings.is_empty() {
                output.push_str(&format!("Warnings: {}\n", report.warnings.len()));
                for warning in &report.warnings {
                    output.push_str(&format!("  {}\n", warning.message));
                }
            }
            output.push_str(&format!(
                "Scan completed in {}ms at {}\n",
                report.duration_ms,
                report
                    .completed_at
                    .with_timezone(&chrono::Local)
                    .format("%Y-%m-%d %H:%M:%S")
            ));
        }

        Ok(output)
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut rendered = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        rendered.push('\n');
        Ok(rendered)
    }
}

/// CSV formatter, one row per (name, version) pair
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["name", "version"])?;
        for group in &report.groups {
            for version in &group.versions {
                writer.write_record([group.name.as_str(), version.as_str()])?;
            }
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| NufindError::io_error(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| NufindError::CsvSerialize { source: e })
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Csv => Box::new(CsvFormatter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Package;

    fn sample_report() -> Report {
        Report::from_packages([
            Package::new("Newtonsoft.Json", "13.0.1"),
            Package::new("Foo", "1.0.0"),
            Package::new("Foo", "2.0.0"),
        ])
    }

    #[test]
    fn text_renders_one_line_per_name() {
        let output = TextFormatter::new(false, false, false)
            .format(&sample_report())
            .unwrap();
        assert_eq!(output, "Newtonsoft.Json: 13.0.1\nFoo: 1.0.0, 2.0.0\n");
    }

    #[test]
    fn text_verbose_appends_summary() {
        let output = TextFormatter::new(false, true, false)
            .format(&sample_report())
            .unwrap();
        assert!(output.contains("Distinct packages: 2"));
    }

    #[test]
    fn json_round_trips_groups() {
        let output = JsonFormatter::new(true).format(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let groups = value["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1]["name"], "Foo");
        assert_eq!(groups[1]["versions"][1], "2.0.0");
    }

    #[test]
    fn csv_has_header_and_one_row_per_pair() {
        let output = CsvFormatter::new().format(&sample_report()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "name,version");
        assert_eq!(lines.len(), 4);
        assert!(lines.contains(&"Foo,2.0.0"));
    }

    #[test]
    fn empty_report_renders_empty_text() {
        let output = TextFormatter::new(false, false, false)
            .format(&Report::new())
            .unwrap();
        assert!(output.is_empty());
    }
}
