//! Aviation Weather Report Parser
//!
//! A Rust library for parsing aviation weather messages (METAR / SPECI
//! surface observation reports and TAF terminal aerodrome forecasts) into a
//! structured, strongly-typed in-memory representation.
//!
//! This library provides tools for:
//! - Splitting a report into whitespace-delimited tokens and classifying each
//!   one into a typed group (wind, visibility, clouds, weather phenomena, ...)
//! - Combining adjacent tokens into multi-token logical groups (trend time
//!   spans, integer-plus-fraction visibilities, wind shear runway sequences)
//! - Tracking report structure with a syntactic state machine that assigns
//!   each token to a report part and detects malformed reports
//! - Converting parsed quantities between units on demand
//!
//! Parsing is pure and deterministic: no I/O, no shared state, one structured
//! result per input string. Malformed tokens never abort a parse; they fall
//! through to an opaque plain-text group, and structural problems are reported
//! as a single terminal error alongside the groups parsed so far.
//!
//! ```rust
//! use avwx_parser::{ReportParser, ReportType};
//!
//! let result = ReportParser::parse("METAR UKLL 181830Z 27005MPS CAVOK 10/08 Q1013=");
//! assert_eq!(result.report_type, ReportType::Metar);
//! assert!(result.error.is_none());
//! assert_eq!(result.groups.len(), 7);
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod groups;
        pub mod report_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ReportPart, ReportType};
pub use app::services::groups::Group;
pub use app::services::report_parser::{
    ExtendedReport, GroupInfo, ParsedReport, ReportError, ReportParser,
};
pub use config::Config;

/// Result type alias for the aviation weather parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the application layer (CLI, file handling, output)
///
/// Parse-level problems are never surfaced here: a structurally malformed
/// report is reported through [`ReportError`] inside the parse result, and a
/// group that fails its own invariants is returned with `is_valid() == false`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be read or decoded
    #[error("Report file error in '{file}': {message}")]
    ReportFile { file: String, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input validation error
    #[error("Input validation error: {message}")]
    InputValidation { message: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a report file error
    pub fn report_file(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReportFile {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an input validation error
    pub fn input_validation(message: impl Into<String>) -> Self {
        Self::InputValidation {
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a JSON serialization error
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
