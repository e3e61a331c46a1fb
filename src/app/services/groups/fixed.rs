//! Fixed-token groups
//!
//! Constant tokens whose meaning depends only on where in the report they
//! appear: report type markers and amendment flags in the header, weather
//! status markers in the body, automated-station annotations in the remarks,
//! and the `$` maintenance indicator anywhere.

use serde::Serialize;

use crate::app::models::ReportPart;

/// Which fixed token was recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FixedGroupType {
    /// Report type marker for a scheduled observation
    Metar,
    /// Report type marker for an unscheduled observation
    Speci,
    /// Report type marker for a forecast
    Taf,
    /// Amended forecast
    Amd,
    /// Missing report
    Nil,
    /// Cancelled forecast
    Cnl,
    /// Corrected report
    Cor,
    /// Fully automated report with no human oversight
    Auto,
    /// Aerodrome closed due to snow accumulation
    RunwaySnoclo,
    /// Ceiling and visibility OK
    Cavok,
    /// No significant weather
    Nsw,
    /// Remarks follow
    Rmk,
    /// Forecast wind shear conditions
    Wsconds,
    /// Station requires maintenance
    MaintenanceIndicator,
    /// Automated station without a precipitation discriminator
    Ao1,
    /// Automated station with a precipitation discriminator
    Ao2,
    /// No SPECI reports are issued by this station
    Nospeci,
    /// Pressure falling rapidly
    Presfr,
    /// Pressure rising rapidly
    Presrr,
    /// Runway visual range not reported
    Rvrno,
    /// Present weather identifier inoperative
    Pwino,
    /// Precipitation amount not available
    Pno,
    /// Freezing rain sensor inoperative
    Fzrano,
    /// Lightning detection system inoperative
    Tsno,
    /// Sea level pressure not available
    Slpno,
}

/// A constant token gated by report part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedGroup {
    group_type: FixedGroupType,
}

impl FixedGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        use FixedGroupType::*;
        if report_part == ReportPart::Header {
            match token {
                "METAR" => return Some(Self::new(Metar)),
                "SPECI" => return Some(Self::new(Speci)),
                "TAF" => return Some(Self::new(Taf)),
                "AMD" => return Some(Self::new(Amd)),
                _ => {}
            }
        }
        if matches!(report_part, ReportPart::Header | ReportPart::Metar) && token == "COR" {
            return Some(Self::new(Cor));
        }
        if matches!(
            report_part,
            ReportPart::Header | ReportPart::Metar | ReportPart::Taf
        ) {
            match token {
                "NIL" => return Some(Self::new(Nil)),
                "CNL" => return Some(Self::new(Cnl)),
                _ => {}
            }
        }
        if report_part == ReportPart::Metar {
            match token {
                "AUTO" => return Some(Self::new(Auto)),
                "SNOCLO" | "R/SNOCLO" => return Some(Self::new(RunwaySnoclo)),
                _ => {}
            }
        }
        if report_part == ReportPart::Taf && token == "WSCONDS" {
            return Some(Self::new(Wsconds));
        }
        if matches!(report_part, ReportPart::Metar | ReportPart::Taf) {
            match token {
                "CAVOK" => return Some(Self::new(Cavok)),
                "NSW" => return Some(Self::new(Nsw)),
                "RMK" => return Some(Self::new(Rmk)),
                _ => {}
            }
        }
        if report_part == ReportPart::Remarks {
            match token {
                "AO1" => return Some(Self::new(Ao1)),
                "AO2" => return Some(Self::new(Ao2)),
                "NOSPECI" => return Some(Self::new(Nospeci)),
                "PRESFR" => return Some(Self::new(Presfr)),
                "PRESRR" => return Some(Self::new(Presrr)),
                "RVRNO" => return Some(Self::new(Rvrno)),
                "PWINO" => return Some(Self::new(Pwino)),
                "PNO" => return Some(Self::new(Pno)),
                "FZRANO" => return Some(Self::new(Fzrano)),
                "TSNO" => return Some(Self::new(Tsno)),
                "SLPNO" => return Some(Self::new(Slpno)),
                _ => {}
            }
        }
        if token == "$" {
            return Some(Self::new(MaintenanceIndicator));
        }
        None
    }

    pub fn group_type(&self) -> FixedGroupType {
        self.group_type
    }

    pub fn is_valid(&self) -> bool {
        true
    }

    fn new(group_type: FixedGroupType) -> Self {
        Self { group_type }
    }
}
