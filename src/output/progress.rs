//! Progress reporting for long-running scans

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter with quiet and verbose modes.
///
/// Shows a spinner until the walker reports a file total, then switches
/// to a bar. In quiet mode nothing is drawn; in verbose mode messages
/// are also printed as plain lines.
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let bar = if quiet {
            None
        } else {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {wide_msg}")
                    .unwrap(),
            );
            bar.enable_steady_tick(Duration::from_millis(100));
            Some(bar)
        };

        Self { quiet, verbose, bar }
    }

    /// Update progress; a zero total keeps the spinner.
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if let Some(bar) = &self.bar {
            if total > 0 && bar.length() != Some(total as u64) {
                bar.disable_steady_tick();
                bar.set_style(
                    ProgressStyle::default_bar()
                        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                        .unwrap()
                        .progress_chars("#>-"),
                );
                bar.set_length(total as u64);
            }
            bar.set_position(current as u64);
            bar.set_message(message.to_string());
        }

        if self.verbose {
            println!("[{}/{}] {}", current, total, message);
        }
    }

    /// Finish and clear the bar.
    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        if self.verbose {
            println!("Finished: {}", message);
        }
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
