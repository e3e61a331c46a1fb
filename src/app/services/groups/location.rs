//! Location groups
//!
//! The four-character ICAO location code of the reporting station. Only
//! recognized in the report header; the same shape in a report body is
//! plain text.

use serde::Serialize;

use crate::app::models::ReportPart;
use crate::constants::LOCATION_CODE_LENGTH;

/// A station location code such as `UKLL` or `K2J3`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationGroup {
    code: String,
}

impl LocationGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Header {
            return None;
        }
        let bytes = token.as_bytes();
        if bytes.len() != LOCATION_CODE_LENGTH {
            return None;
        }
        if !bytes[0].is_ascii_uppercase() {
            return None;
        }
        if !bytes[1..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return None;
        }
        Some(Self {
            code: token.to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
