//! Report syntax state machine
//!
//! Tracks where in a report the parser currently is, maps that position to
//! the report part the dispatcher should parse the next token under, and
//! rejects illegal group orderings with a terminal error. Tokens are
//! classified into a compact set of syntax categories first; everything the
//! state machine does not care about is `Other`.

use serde::Serialize;

use super::ReportError;
use crate::app::models::{ReportPart, ReportType};
use crate::app::services::groups::{FixedGroupType, Group};

/// Compact token classification used by the state machine
///
/// This is deliberately much coarser than the group variants: the state
/// machine only needs to see the structural markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyntaxCategory {
    Other,
    Metar,
    Speci,
    Taf,
    Cor,
    Amd,
    Location,
    ReportTime,
    TimeSpan,
    Cnl,
    Nil,
    Rmk,
    MaintenanceIndicator,
}

/// Classify a parsed group for the state machine
pub fn syntax_category(group: &Group) -> SyntaxCategory {
    match group {
        Group::Fixed(fixed) => match fixed.group_type() {
            FixedGroupType::Metar => SyntaxCategory::Metar,
            FixedGroupType::Speci => SyntaxCategory::Speci,
            FixedGroupType::Taf => SyntaxCategory::Taf,
            FixedGroupType::Cor => SyntaxCategory::Cor,
            FixedGroupType::Amd => SyntaxCategory::Amd,
            FixedGroupType::Nil => SyntaxCategory::Nil,
            FixedGroupType::Cnl => SyntaxCategory::Cnl,
            FixedGroupType::Rmk => SyntaxCategory::Rmk,
            FixedGroupType::MaintenanceIndicator => SyntaxCategory::MaintenanceIndicator,
            _ => SyntaxCategory::Other,
        },
        Group::Location(_) => SyntaxCategory::Location,
        Group::ReportTime(_) => SyntaxCategory::ReportTime,
        Group::Trend(trend) => {
            if trend.is_time_span() {
                SyntaxCategory::TimeSpan
            } else {
                SyntaxCategory::Other
            }
        }
        _ => SyntaxCategory::Other,
    }
}

/// States of the report syntax state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReportTypeOrLocation,
    Correction,
    Location,
    ReportTime,
    TimeSpan,
    ReportBodyBeginMetar,
    /// Entered when an untyped header turns out to be a METAR body; asks
    /// the dispatch loop to re-parse the current token under the new part
    ReportBodyBeginMetarRepeatParse,
    ReportBodyMetar,
    ReportBodyBeginTaf,
    ReportBodyTaf,
    RemarkMetar,
    RemarkTaf,
    MaintenanceIndicator,
    Nil,
    Cnl,
    Error,
}

/// The report syntax checker
///
/// Feed it one syntax category per token via [`transition`], then call
/// [`final_transition`] at end of input. The detected report type and
/// terminal error accumulate inside.
///
/// [`transition`]: StateMachine::transition
/// [`final_transition`]: StateMachine::final_transition
#[derive(Debug)]
pub(super) struct StateMachine {
    state: State,
    report_type: ReportType,
    error: Option<ReportError>,
}

impl StateMachine {
    pub(super) fn new() -> Self {
        Self {
            state: State::ReportTypeOrLocation,
            report_type: ReportType::Unknown,
            error: None,
        }
    }

    pub(super) fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub(super) fn error(&self) -> Option<ReportError> {
        self.error
    }

    pub(super) fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the current token must be re-parsed under the new state
    /// before the cursor advances
    pub(super) fn reparse_required(&self) -> bool {
        self.state == State::ReportBodyBeginMetarRepeatParse
    }

    /// The report part the dispatcher should parse the next token under
    pub(super) fn report_part(&self) -> ReportPart {
        match self.state {
            State::ReportTypeOrLocation
            | State::Correction
            | State::Location
            | State::ReportTime
            | State::TimeSpan => ReportPart::Header,
            State::ReportBodyBeginMetar
            | State::ReportBodyBeginMetarRepeatParse
            | State::ReportBodyMetar => ReportPart::Metar,
            State::ReportBodyBeginTaf | State::ReportBodyTaf => ReportPart::Taf,
            State::RemarkMetar | State::RemarkTaf => ReportPart::Remarks,
            State::MaintenanceIndicator | State::Nil | State::Cnl | State::Error => {
                ReportPart::Unknown
            }
        }
    }

    /// Advance on one token's syntax category
    pub(super) fn transition(&mut self, category: SyntaxCategory) {
        match self.state {
            State::ReportTypeOrLocation => self.from_report_type_or_location(category),
            State::Correction => self.from_correction(category),
            State::Location => {
                if category == SyntaxCategory::Location {
                    self.set_state(State::ReportTime);
                } else {
                    self.set_error(ReportError::ExpectedLocation);
                }
            }
            State::ReportTime => self.from_report_time(category),
            State::TimeSpan => self.from_time_span(category),
            State::ReportBodyBeginMetar | State::ReportBodyBeginMetarRepeatParse => {
                self.from_report_body_begin_metar(category)
            }
            State::ReportBodyMetar => self.from_report_body_metar(category),
            State::ReportBodyBeginTaf => self.from_report_body_begin_taf(category),
            State::ReportBodyTaf => self.from_report_body_taf(category),
            State::RemarkMetar => {
                if category == SyntaxCategory::MaintenanceIndicator {
                    self.set_state(State::MaintenanceIndicator);
                }
            }
            State::RemarkTaf => {
                if category == SyntaxCategory::MaintenanceIndicator {
                    self.set_error(ReportError::MaintenanceIndicatorAllowedInMetarOnly);
                }
            }
            State::MaintenanceIndicator => {
                self.set_error(ReportError::UnexpectedGroupAfterMaintenanceIndicator)
            }
            State::Nil => self.set_error(ReportError::UnexpectedGroupAfterNil),
            State::Cnl => self.set_error(ReportError::UnexpectedGroupAfterCnl),
            State::Error => {}
        }
    }

    /// Check that the report may legally end in the current state
    pub(super) fn final_transition(&mut self) {
        match self.state {
            State::ReportBodyMetar
            | State::ReportBodyTaf
            | State::RemarkMetar
            | State::RemarkTaf
            | State::MaintenanceIndicator
            | State::Nil
            | State::Cnl
            | State::Error => {}
            State::ReportTypeOrLocation => self.set_error(ReportError::EmptyReport),
            State::Correction
            | State::Location
            | State::ReportTime
            | State::TimeSpan
            | State::ReportBodyBeginMetar
            | State::ReportBodyBeginMetarRepeatParse
            | State::ReportBodyBeginTaf => self.set_error(ReportError::UnexpectedReportEnd),
        }
    }

    fn set_state(&mut self, state: State) {
        self.state = state;
    }

    fn set_error(&mut self, error: ReportError) {
        self.state = State::Error;
        self.error = Some(error);
    }

    fn from_report_type_or_location(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Metar | SyntaxCategory::Speci => {
                self.report_type = ReportType::Metar;
                self.set_state(State::Correction);
            }
            SyntaxCategory::Taf => {
                self.report_type = ReportType::Taf;
                self.set_state(State::Correction);
            }
            SyntaxCategory::Location => self.set_state(State::ReportTime),
            _ => self.set_error(ReportError::ExpectedReportTypeOrLocation),
        }
    }

    fn from_correction(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Amd => {
                self.set_state(State::Location);
                if self.report_type != ReportType::Taf {
                    self.set_error(ReportError::AmdAllowedInTafOnly);
                }
            }
            SyntaxCategory::Cor => self.set_state(State::Location),
            SyntaxCategory::Location => self.set_state(State::ReportTime),
            _ => self.set_error(ReportError::ExpectedLocation),
        }
    }

    fn from_report_time(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::ReportTime => {
                if self.report_type == ReportType::Metar {
                    self.set_state(State::ReportBodyBeginMetar);
                } else {
                    self.set_state(State::TimeSpan);
                }
            }
            SyntaxCategory::TimeSpan => {
                if self.report_type == ReportType::Taf {
                    self.set_state(State::ReportBodyBeginTaf);
                } else {
                    self.set_error(ReportError::ExpectedReportTime);
                }
            }
            SyntaxCategory::Nil => self.set_state(State::Nil),
            _ => self.set_error(ReportError::ExpectedReportTime),
        }
    }

    fn from_time_span(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::TimeSpan => {
                self.report_type = ReportType::Taf;
                self.set_state(State::ReportBodyBeginTaf);
            }
            SyntaxCategory::Nil => self.set_state(State::Nil),
            _ => {
                // A report with no explicit type and no second time span is
                // a METAR whose body just started; the current token must
                // be parsed again as METAR body
                if self.report_type == ReportType::Unknown {
                    self.report_type = ReportType::Metar;
                    self.set_state(State::ReportBodyBeginMetarRepeatParse);
                } else {
                    self.set_error(ReportError::ExpectedTimeSpan);
                }
            }
        }
    }

    fn from_report_body_begin_metar(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Nil => self.set_state(State::Nil),
            SyntaxCategory::Cnl => self.set_error(ReportError::CnlAllowedInTafOnly),
            SyntaxCategory::Rmk => self.set_state(State::RemarkMetar),
            SyntaxCategory::MaintenanceIndicator => self.set_state(State::MaintenanceIndicator),
            _ => self.set_state(State::ReportBodyMetar),
        }
    }

    fn from_report_body_metar(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Rmk => self.set_state(State::RemarkMetar),
            SyntaxCategory::MaintenanceIndicator => self.set_state(State::MaintenanceIndicator),
            SyntaxCategory::Nil | SyntaxCategory::Cnl => {
                self.set_error(ReportError::UnexpectedNilOrCnlInReportBody)
            }
            _ => {}
        }
    }

    fn from_report_body_begin_taf(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Nil => self.set_state(State::Nil),
            SyntaxCategory::Cnl => self.set_state(State::Cnl),
            SyntaxCategory::Rmk => self.set_state(State::RemarkTaf),
            SyntaxCategory::MaintenanceIndicator => {
                self.set_error(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
            }
            _ => self.set_state(State::ReportBodyTaf),
        }
    }

    fn from_report_body_taf(&mut self, category: SyntaxCategory) {
        match category {
            SyntaxCategory::Rmk => self.set_state(State::RemarkTaf),
            SyntaxCategory::Nil | SyntaxCategory::Cnl => {
                self.set_error(ReportError::UnexpectedNilOrCnlInReportBody)
            }
            SyntaxCategory::MaintenanceIndicator => {
                self.set_error(ReportError::MaintenanceIndicatorAllowedInMetarOnly)
            }
            _ => {}
        }
    }
}
