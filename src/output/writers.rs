//! Output writers for stdout and file destinations

use crate::error::{NufindError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| NufindError::StdoutWrite { source: e })
    }
}

/// Writer for file output
#[derive(Debug)]
pub struct FileWriter {
    path: std::path::PathBuf,
}

impl FileWriter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let write_err = |e| NufindError::OutputWrite {
            path: self.path.clone(),
            source: e,
        };
        let mut file = File::create(&self.path).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)
    }
}

/// Create an output writer based on the output file option
pub fn create_writer(output_file: Option<impl AsRef<Path>>) -> Box<dyn OutputWriter> {
    match output_file {
        Some(path) => Box::new(FileWriter::new(path)),
        None => Box::new(StdoutWriter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_writer_writes_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        FileWriter::new(&path).write("Foo: 1.0.0\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Foo: 1.0.0\n");
    }

    #[test]
    fn file_writer_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(matches!(
            FileWriter::new(&path).write("x"),
            Err(NufindError::OutputWrite { .. })
        ));
    }
}
