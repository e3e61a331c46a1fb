//! Runtime configuration for the report parsing CLI
//!
//! The parser core is stateless and needs no configuration; this module
//! configures the surrounding application behavior such as batch file
//! discovery and output rendering.

use serde::{Deserialize, Serialize};

/// Configuration for batch processing and output rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// File extension used when discovering report files in batch mode
    pub report_extension: String,

    /// Show progress bars during batch processing
    pub show_progress: bool,

    /// Stop batch processing at the first file that cannot be read
    pub stop_on_error: bool,

    /// Include groups that failed their validity checks in rendered output
    pub show_invalid_groups: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_extension: "txt".to_string(),
            show_progress: true,
            stop_on_error: false,
            show_invalid_groups: true,
        }
    }
}

impl Config {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file extension used for batch report discovery
    pub fn with_report_extension(mut self, extension: impl Into<String>) -> Self {
        self.report_extension = extension.into();
        self
    }

    /// Disable progress reporting
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Abort batch processing on the first unreadable file
    pub fn with_stop_on_error(mut self) -> Self {
        self.stop_on_error = true;
        self
    }
}
