//! Error types and definitions for nufind
//!
//! Errors are classified by severity: warnings let the scan continue,
//! regular errors fail the current file or directory only, and critical
//! errors terminate the run.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for nufind operations
#[derive(Debug, Error)]
pub enum NufindError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML in a manifest file
    #[error("XML parsing error in {file}: {source}")]
    XmlParse {
        file: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors from --exclude
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV serialization error
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV output was not valid UTF-8
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

impl NufindError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level - the file or subtree is skipped, the scan continues
            NufindError::PermissionDenied { .. } => ErrorSeverity::Warning,
            NufindError::XmlParse { .. } => ErrorSeverity::Warning,
            NufindError::DirectoryTraversal { .. } => ErrorSeverity::Warning,

            // Critical - the run cannot proceed
            NufindError::Config { .. } => ErrorSeverity::Critical,
            NufindError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            NufindError::ConfigRead { .. } => ErrorSeverity::Critical,
            NufindError::ConfigParse { .. } => ErrorSeverity::Critical,
            NufindError::GlobPattern { .. } => ErrorSeverity::Critical,
            NufindError::StdoutWrite { .. } => ErrorSeverity::Critical,
            NufindError::OutputWrite { .. } => ErrorSeverity::Critical,
            NufindError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            NufindError::PermissionDenied { path } => {
                format!(
                    "Cannot access '{}' due to permission denied. Check file permissions.",
                    path.display()
                )
            }
            NufindError::XmlParse { file, source } => {
                format!(
                    "Invalid XML in '{}': {}. The file was skipped.",
                    file.display(),
                    source
                )
            }
            NufindError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid directory path.",
                    path.display()
                )
            }
            NufindError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create a config file or use command line options.",
                    path.display()
                )
            }
            NufindError::OutputDirectoryNotFound { path } => {
                format!(
                    "Output directory '{}' does not exist. Create it first or pick a different --out path.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        NufindError::Io { source }
    }

    /// Create an XML parse error with file context
    pub fn xml_parse_error(file: impl Into<PathBuf>, source: quick_xml::Error) -> Self {
        NufindError::XmlParse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        NufindError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        NufindError::PermissionDenied { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        NufindError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for NufindError {
    fn from(err: std::io::Error) -> Self {
        NufindError::io_error(err)
    }
}

impl From<glob::PatternError> for NufindError {
    fn from(err: glob::PatternError) -> Self {
        NufindError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for NufindError {
    fn from(err: serde_json::Error) -> Self {
        NufindError::JsonSerialize { source: err }
    }
}

impl From<csv::Error> for NufindError {
    fn from(err: csv::Error) -> Self {
        NufindError::Csv { source: err }
    }
}

/// Result type alias for nufind operations
pub type Result<T> = std::result::Result<T, NufindError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn permission_denied_is_warning() {
        let err = NufindError::permission_denied("/some/dir");
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(!err.is_critical());
    }

    #[test]
    fn config_errors_are_critical() {
        let err = NufindError::config_error("bad setting");
        assert!(err.is_critical());

        let err = NufindError::ConfigNotFound {
            path: PathBuf::from(".nufind.toml"),
        };
        assert!(err.is_critical());
    }

    #[test]
    fn io_error_is_regular_error() {
        let err = NufindError::io_error(std::io::Error::other("boom"));
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn user_message_mentions_path() {
        let err = NufindError::InvalidPath {
            path: PathBuf::from("/does/not/exist"),
        };
        assert!(err.user_message().contains("/does/not/exist"));
    }
}
