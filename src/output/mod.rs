//! Report formatting and writing

mod formatters;
mod progress;
mod writers;

pub use formatters::{create_formatter, CsvFormatter, Formatter, JsonFormatter, TextFormatter};
pub use progress::ProgressReporter;
pub use writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};
