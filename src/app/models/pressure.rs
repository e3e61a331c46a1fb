//! Atmospheric pressure values
//!
//! Pressure appears in several wire encodings: `Q1013` (whole hectopascals),
//! `A2992` (hundredths of an inch of mercury), the forecast form
//! `QNH2979INS`, the sea level pressure remark `SLP982` (tenths of a
//! hectopascal above an implied base) and the field elevation remark
//! `QFE750/1000` (millimetres of mercury, with an optional hectopascal
//! repetition that is parsed for shape only).

use serde::Serialize;

use crate::constants::{
    HPA_PER_INHG, HPA_PER_MMHG, INHG_DECIMAL_SHIFT, MM_PER_INCH, SLP_BASE_HIGH, SLP_BASE_LOW,
    SLP_BASE_THRESHOLD, SLP_DECIMAL_SHIFT,
};

use super::scan;

/// Units a pressure can be expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PressureUnit {
    #[default]
    Hectopascal,
    InchesHg,
    MmHg,
}

/// A pressure value, possibly not reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pressure {
    value: Option<f64>,
    unit: PressureUnit,
}

impl Pressure {
    /// Parse `QNNNN` (hectopascals) or `ANNNN` (hundredths of inHg);
    /// `Q////` and `A////` are not reported
    pub fn from_str(s: &str) -> Option<Self> {
        if s.len() != 5 {
            return None;
        }
        if s == "A////" {
            return Some(Self {
                value: None,
                unit: PressureUnit::InchesHg,
            });
        }
        if s == "Q////" {
            return Some(Self {
                value: None,
                unit: PressureUnit::Hectopascal,
            });
        }
        let value = scan::digits(s, 1, 4)?;
        match s.as_bytes()[0] {
            b'A' => Some(Self {
                value: Some(f64::from(value) * INHG_DECIMAL_SHIFT),
                unit: PressureUnit::InchesHg,
            }),
            b'Q' => Some(Self {
                value: Some(f64::from(value)),
                unit: PressureUnit::Hectopascal,
            }),
            _ => None,
        }
    }

    /// Parse the forecast lowest pressure form `QNHNNNNINS`
    pub fn from_forecast_str(s: &str) -> Option<Self> {
        if s.len() != 10 || !s.starts_with("QNH") || !s.ends_with("INS") {
            return None;
        }
        let value = scan::digits(s, 3, 4)?;
        Some(Self {
            value: Some(f64::from(value) * INHG_DECIMAL_SHIFT),
            unit: PressureUnit::InchesHg,
        })
    }

    /// Parse a sea level pressure remark `SLPnnn`
    ///
    /// The three digits are tenths of a hectopascal added to 1000 (values
    /// below 50.0) or 900 (the rest): SLP982 is 998.2 hPa, SLP221 is
    /// 1022.1 hPa.
    pub fn from_slp_str(s: &str) -> Option<Self> {
        if s.len() != 6 || !s.starts_with("SLP") {
            return None;
        }
        let value = scan::digits(s, 3, 3)?;
        let base = if value < SLP_BASE_THRESHOLD {
            SLP_BASE_LOW
        } else {
            SLP_BASE_HIGH
        };
        Some(Self {
            value: Some(f64::from(value) * SLP_DECIMAL_SHIFT + base),
            unit: PressureUnit::Hectopascal,
        })
    }

    /// Parse a field elevation pressure remark `QFEnnn` or `QFEnnn/nnnn`
    ///
    /// The millimetres-of-mercury value is primary; the optional
    /// hectopascal value is checked for shape and otherwise ignored.
    pub fn from_qfe_str(s: &str) -> Option<Self> {
        if s.len() != 6 && s.len() != 11 {
            return None;
        }
        if !s.starts_with("QFE") {
            return None;
        }
        let mm_hg = scan::digits(s, 3, 3)?;
        if s.len() == 11 {
            if s.as_bytes()[6] != b'/' {
                return None;
            }
            scan::digits(s, 7, 4)?;
        }
        Some(Self {
            value: Some(f64::from(mm_hg)),
            unit: PressureUnit::MmHg,
        })
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn unit(&self) -> PressureUnit {
        self.unit
    }

    /// Convert to the requested unit
    pub fn to_unit(&self, unit: PressureUnit) -> Option<f64> {
        let value = self.value?;
        Some(match (self.unit, unit) {
            (a, b) if a == b => value,
            (PressureUnit::Hectopascal, PressureUnit::InchesHg) => value / HPA_PER_INHG,
            (PressureUnit::Hectopascal, PressureUnit::MmHg) => value / HPA_PER_MMHG,
            (PressureUnit::InchesHg, PressureUnit::Hectopascal) => value * HPA_PER_INHG,
            (PressureUnit::InchesHg, PressureUnit::MmHg) => value * MM_PER_INCH,
            (PressureUnit::MmHg, PressureUnit::Hectopascal) => value * HPA_PER_MMHG,
            (PressureUnit::MmHg, PressureUnit::InchesHg) => value / MM_PER_INCH,
            _ => return None,
        })
    }
}
