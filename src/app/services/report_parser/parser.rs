//! Report tokenization and group dispatch
//!
//! Splits a report into whitespace-delimited tokens and runs each one
//! through the group recognizers under the report part dictated by the
//! state machine, folding multi-token groups together as it goes.

use tracing::{debug, trace};

use super::state_machine::{syntax_category, StateMachine};
use super::{ExtendedReport, GroupInfo, ParsedReport};
use crate::app::models::ReportPart;
use crate::app::services::groups::Group;

/// End-of-report marker optionally terminating the last token
const REPORT_END_CHAR: char = '=';

/// The report parser
///
/// Stateless: both entry points take a report string and return a value.
/// Concurrent parses of independent inputs are safe.
pub struct ReportParser;

impl ReportParser {
    /// Parse a report into its groups
    pub fn parse(report: &str) -> ParsedReport {
        let extended = Self::extended_parse(report);
        ParsedReport {
            report_type: extended.report_type,
            error: extended.error,
            groups: extended.groups.into_iter().map(|info| info.group).collect(),
        }
    }

    /// Parse a report, annotating every group with the report part it was
    /// parsed under and the source substring it came from
    pub fn extended_parse(report: &str) -> ExtendedReport {
        let mut state = StateMachine::new();
        let mut groups: Vec<GroupInfo> = Vec::new();
        let mut report_end = false;

        for token in report.split_whitespace() {
            if report_end || state.is_error() {
                break;
            }
            let mut token = token;
            if token.ends_with(REPORT_END_CHAR) {
                report_end = true;
                token = &token[..token.len() - REPORT_END_CHAR.len_utf8()];
            }
            if token.is_empty() {
                continue;
            }

            // Parse under the current report part, then transition; an
            // untyped header collapsing into a METAR body requires one
            // re-parse of the same token under the new part
            let (group, report_part) = loop {
                let report_part = state.report_part();
                let group = Group::parse(token, report_part);
                state.transition(syntax_category(&group));
                if !state.reparse_required() {
                    break (group, report_part);
                }
                trace!(token, "re-parsing token under detected report body");
            };

            Self::save_group(&mut groups, group, report_part, token);
        }

        state.final_transition();
        if let Some(error) = state.error() {
            debug!(?error, "report parse ended with terminal error");
        }
        ExtendedReport {
            report_type: state.report_type(),
            error: state.error(),
            groups,
        }
    }

    /// Append the new group, or replace the last one when the two combine
    fn save_group(groups: &mut Vec<GroupInfo>, group: Group, report_part: ReportPart, token: &str) {
        if let Some(last) = groups.last_mut() {
            if let Some(merged) = last.group.combine(&group) {
                last.group = merged;
                last.source.push(' ');
                last.source.push_str(token);
                return;
            }
        }
        groups.push(GroupInfo {
            group,
            report_part,
            source: token.to_string(),
        })
    }
}
