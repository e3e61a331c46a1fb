//! Colour code groups
//!
//! Military aerodrome colour states summarizing visibility and cloud base
//! (`BLU` best through `RED` worst), optionally prefixed with `BLACK` when
//! the aerodrome is closed for non-weather reasons.

use serde::Serialize;

use crate::app::models::ReportPart;

/// Colour state thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ColourCode {
    /// Visibility above 8000 m, cloud base above 2500 ft
    #[default]
    Blue,
    /// Visibility above 5000 m, cloud base above 1500 ft
    White,
    /// Visibility above 3700 m, cloud base above 700 ft
    Green,
    /// Visibility above 2500 m, cloud base above 500 ft
    Yellow1,
    /// Visibility above 1600 m, cloud base above 300 ft
    Yellow2,
    /// Visibility above 800 m, cloud base above 200 ft
    Amber,
    /// Visibility below 800 m or cloud base below 200 ft
    Red,
}

/// An aerodrome colour state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColourCodeGroup {
    code: ColourCode,
    code_black: bool,
}

impl ColourCodeGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        let (code_black, code_str) = match token.strip_prefix("BLACK") {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        let code = match code_str {
            "BLU" => ColourCode::Blue,
            "WHT" => ColourCode::White,
            "GRN" => ColourCode::Green,
            "YLO1" => ColourCode::Yellow1,
            "YLO2" => ColourCode::Yellow2,
            "AMB" => ColourCode::Amber,
            "RED" => ColourCode::Red,
            _ => return None,
        };
        Some(Self { code, code_black })
    }

    pub fn code(&self) -> ColourCode {
        self.code
    }

    /// Whether `BLACK` was reported along with the main code
    pub fn is_code_black(&self) -> bool {
        self.code_black
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
