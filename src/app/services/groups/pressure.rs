//! Pressure groups
//!
//! The observed sea level pressure of a METAR body (`Q1013`, `A2992`), the
//! forecast lowest pressure of a TAF body (`QNH2979INS`), and the remark
//! forms `SLPnnn` (observed sea level pressure) and `QFEnnn[/nnnn]`
//! (observed field elevation pressure).

use serde::Serialize;

use crate::app::models::{Pressure, ReportPart};

/// What the pressure value describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PressureGroupType {
    /// Observed mean sea level pressure
    #[default]
    ObservedQnh,
    /// Forecast lowest sea level pressure
    ForecastLowestQnh,
    /// Observed actual (non-normalized) pressure
    ObservedQfe,
}

/// An atmospheric pressure group
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PressureGroup {
    group_type: PressureGroupType,
    pressure: Pressure,
}

impl PressureGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        match report_part {
            ReportPart::Metar => {
                let pressure = Pressure::from_str(token)?;
                Some(Self {
                    group_type: PressureGroupType::ObservedQnh,
                    pressure,
                })
            }
            ReportPart::Taf => {
                let pressure = Pressure::from_forecast_str(token)?;
                Some(Self {
                    group_type: PressureGroupType::ForecastLowestQnh,
                    pressure,
                })
            }
            ReportPart::Remarks => {
                if let Some(pressure) = Pressure::from_slp_str(token) {
                    return Some(Self {
                        group_type: PressureGroupType::ObservedQnh,
                        pressure,
                    });
                }
                if let Some(pressure) = Pressure::from_qfe_str(token) {
                    return Some(Self {
                        group_type: PressureGroupType::ObservedQfe,
                        pressure,
                    });
                }
                None
            }
            _ => None,
        }
    }

    pub fn group_type(&self) -> PressureGroupType {
        self.group_type
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
