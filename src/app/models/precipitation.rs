//! Precipitation and deposit depth amounts
//!
//! Three encodings share this type: rainfall amounts in millimetres with one
//! decimal place (`21.6`), runway deposit depth codes where 00..90 are
//! literal millimetres and 92..98 map to fixed depths per Table 1079 in
//! Manual on Codes (WMO No. 306), and remark amounts that are plain digit
//! runs scaled by a per-group factor.

use serde::Serialize;

use crate::constants::{deposit_depth, deposit_depth_mm, MM_PER_INCH};

use super::scan;

/// Whether and how a precipitation amount was reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PrecipitationStatus {
    #[default]
    NotReported,
    Reported,
    /// Deposit depth code 99: depth not reported because the runway is out
    /// of use
    RunwayNotOperational,
}

/// Units a precipitation amount can be expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PrecipitationUnit {
    #[default]
    Mm,
    Inches,
}

/// A precipitation or deposit depth amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Precipitation {
    status: PrecipitationStatus,
    value: f64,
    unit: PrecipitationUnit,
}

impl Precipitation {
    /// Parse a rainfall amount `dd.d` or `ddd.d` in millimetres
    ///
    /// The empty string and the slash placeholders `//./` and `///./` are
    /// not-reported values.
    pub fn from_rainfall_str(s: &str) -> Option<Self> {
        if s.is_empty() || s == "///./" || s == "//./" {
            return Some(Self::default());
        }
        if s.len() != 4 && s.len() != 5 {
            return None;
        }
        if s.as_bytes()[s.len() - 2] != b'.' {
            return None;
        }
        let fract_part = scan::digits(s, s.len() - 1, 1)?;
        let int_part = scan::digits(s, 0, s.len() - 2)?;
        Some(Self {
            status: PrecipitationStatus::Reported,
            value: f64::from(int_part) + 0.1 * f64::from(fract_part),
            unit: PrecipitationUnit::Mm,
        })
    }

    /// Parse a two-digit runway deposit depth code; `//` is not reported
    ///
    /// Codes 00..90 are literal millimetres; 92..98 map to 100..400 mm per
    /// Table 1079; 99 marks the runway as not operational; 91 is reserved
    /// and rejected.
    pub fn from_runway_deposits(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        if s == "//" {
            return Some(Self::default());
        }
        let code = scan::digits(s, 0, 2)?;
        if code == deposit_depth::RESERVED {
            return None;
        }
        if code == deposit_depth::RUNWAY_NOT_OPERATIONAL {
            return Some(Self {
                status: PrecipitationStatus::RunwayNotOperational,
                value: 0.0,
                unit: PrecipitationUnit::Mm,
            });
        }
        let value = deposit_depth_mm(code).unwrap_or(code);
        Some(Self {
            status: PrecipitationStatus::Reported,
            value: f64::from(value),
            unit: PrecipitationUnit::Mm,
        })
    }

    /// Parse a remark amount: three or four digits scaled by `factor`, with
    /// `///` and `////` as not-reported placeholders
    pub fn from_remark_str(s: &str, factor: f64, unit: PrecipitationUnit) -> Option<Self> {
        if s.len() != 3 && s.len() != 4 {
            return None;
        }
        if s == "///" || s == "////" {
            return Some(Self {
                unit,
                ..Self::default()
            });
        }
        let value = scan::all_digits(s)?;
        Some(Self {
            status: PrecipitationStatus::Reported,
            value: f64::from(value) * factor,
            unit,
        })
    }

    pub fn status(&self) -> PrecipitationStatus {
        self.status
    }

    pub fn unit(&self) -> PrecipitationUnit {
        self.unit
    }

    /// The reported amount; absent unless the status is `Reported`
    pub fn amount(&self) -> Option<f64> {
        if self.status != PrecipitationStatus::Reported {
            return None;
        }
        Some(self.value)
    }

    pub fn is_reported(&self) -> bool {
        self.status == PrecipitationStatus::Reported
    }

    /// Convert to the requested unit
    pub fn to_unit(&self, unit: PrecipitationUnit) -> Option<f64> {
        let value = self.amount()?;
        Some(match (self.unit, unit) {
            (a, b) if a == b => value,
            (PrecipitationUnit::Mm, PrecipitationUnit::Inches) => value / MM_PER_INCH,
            (PrecipitationUnit::Inches, PrecipitationUnit::Mm) => value * MM_PER_INCH,
            _ => return None,
        })
    }
}
