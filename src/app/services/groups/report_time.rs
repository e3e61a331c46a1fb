//! Report issue time groups
//!
//! The header time group `DDHHMMZ` giving the day of month, hour and minute
//! the report was issued.

use serde::Serialize;

use crate::app::models::{DayTime, ReportPart};

/// The issue time of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportTimeGroup {
    time: DayTime,
}

impl ReportTimeGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Header {
            return None;
        }
        if token.len() != 7 || !token.ends_with('Z') {
            return None;
        }
        let time = DayTime::from_ddhhmm(&token[..6])?;
        // The issue time always names its day; minute-only forms belong to
        // trend groups
        time.day()?;
        Some(Self { time })
    }

    pub fn time(&self) -> DayTime {
        self.time
    }

    pub fn is_valid(&self) -> bool {
        self.time.is_valid() && self.time.day().is_some()
    }
}
