//! Report-level parser for METAR, SPECI and TAF messages
//!
//! This module drives the group recognizers over a whole report and checks
//! its structure along the way.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Tokenization, the dispatch loop and group combining
//! - [`state_machine`] - Report syntax checking and report part tracking
//! - [`stats`] - Aggregate statistics for batch processing
//!
//! Each whitespace-delimited token is parsed under the report part implied
//! by the current state, the state machine transitions on the token's syntax
//! category, and the combiner folds multi-token groups together. A trailing
//! `=` ends the report. Structural violations produce exactly one terminal
//! error; everything parsed up to that point is kept.
//!
//! ## Usage
//!
//! ```rust
//! use avwx_parser::{ReportParser, ReportType};
//!
//! let result = ReportParser::parse("METAR UKLL 181830Z 27005MPS CAVOK 10/08 Q1013=");
//! assert_eq!(result.report_type, ReportType::Metar);
//! assert!(result.error.is_none());
//! ```

pub mod parser;
pub mod state_machine;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::ReportParser;
pub use state_machine::SyntaxCategory;
pub use stats::BatchStats;

use serde::Serialize;

use crate::app::models::{ReportPart, ReportType};
use crate::app::services::groups::Group;

/// Structural errors detected by the report state machine
///
/// At most one terminal error is reported per parse; group-level problems
/// never appear here (an implausible group is returned with
/// `is_valid() == false` instead).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportError {
    #[error("report is empty")]
    EmptyReport,
    #[error("expected report type or location at report start")]
    ExpectedReportTypeOrLocation,
    #[error("expected location after report type")]
    ExpectedLocation,
    #[error("expected report time after location")]
    ExpectedReportTime,
    #[error("expected time span after report time")]
    ExpectedTimeSpan,
    #[error("report ended unexpectedly")]
    UnexpectedReportEnd,
    #[error("unexpected group after NIL")]
    UnexpectedGroupAfterNil,
    #[error("unexpected group after CNL")]
    UnexpectedGroupAfterCnl,
    #[error("unexpected group after maintenance indicator")]
    UnexpectedGroupAfterMaintenanceIndicator,
    #[error("NIL or CNL not allowed in report body")]
    UnexpectedNilOrCnlInReportBody,
    #[error("AMD is allowed in TAF reports only")]
    AmdAllowedInTafOnly,
    #[error("CNL is allowed in TAF reports only")]
    CnlAllowedInTafOnly,
    #[error("maintenance indicator is allowed in METAR reports only")]
    MaintenanceIndicatorAllowedInMetarOnly,
    #[error("internal parser state error")]
    InternalParserState,
}

/// Result of [`ReportParser::parse`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedReport {
    /// Detected report type
    pub report_type: ReportType,
    /// Terminal structural error, if any
    pub error: Option<ReportError>,
    /// Parsed groups in report order
    pub groups: Vec<Group>,
}

/// One parsed group with its parsing context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupInfo {
    /// The parsed group
    pub group: Group,
    /// Report part the group was parsed under
    pub report_part: ReportPart,
    /// Source substring the group was parsed from; combined groups
    /// concatenate their tokens with single spaces
    pub source: String,
}

/// Result of [`ReportParser::extended_parse`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedReport {
    /// Detected report type
    pub report_type: ReportType,
    /// Terminal structural error, if any
    pub error: Option<ReportError>,
    /// Parsed groups with report part and source text
    pub groups: Vec<GroupInfo>,
}
