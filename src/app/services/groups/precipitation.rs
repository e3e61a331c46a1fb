//! Remark precipitation groups
//!
//! Automated-station precipitation remarks: `P2168` (hourly total in
//! hundredths of an inch), `4/012` (snow depth in inches), `6####` /
//! `7####` (frozen precipitation accumulations), `931###` / `933###`
//! (six-hourly snowfall and water equivalent in tenths of an inch),
//! `I1###` / `I3###` / `I6###` (ice accretion in hundredths of an inch)
//! and `PP###` (accumulation since the last report in tenths of a
//! millimetre). Slash runs report the amount as missing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{Precipitation, PrecipitationUnit, ReportPart};

static REMARK_PRECIPITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([P67])(\d\d\d\d|////)|(4/|93[13]|I[136]|PP)(\d\d\d|///))$").unwrap()
});

/// Which accumulation the remark reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum PrecipitationGroupType {
    /// Total precipitation for the last hour
    #[default]
    TotalPrecipitationHourly,
    /// Snow depth on the ground
    SnowDepthOnGround,
    /// Frozen precipitation over the last three or six hours; the report
    /// time needed to tell the two apart is not part of the group
    FrozenPrecip3Or6Hourly,
    /// Frozen precipitation over the last 24 hours
    FrozenPrecip24Hourly,
    /// Snowfall over the last six hours
    Snow6Hourly,
    /// Water equivalent of the snow on the ground
    WaterEquivOfSnowOnGround,
    /// Ice accretion over the last hour
    IceAccretionLastHour,
    /// Ice accretion over the last three hours
    IceAccretionLast3Hours,
    /// Ice accretion over the last six hours
    IceAccretionLast6Hours,
    /// Precipitation accumulated since the last report
    PrecipitationAccumulationSinceLastReport,
}

/// A precipitation accumulation remark
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PrecipitationGroup {
    group_type: PrecipitationGroupType,
    amount: Precipitation,
}

impl PrecipitationGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Remarks {
            return None;
        }
        let caps = REMARK_PRECIPITATION.captures(token)?;
        // Exactly one of the two type/value capture pairs matches
        let type_str = caps
            .get(1)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());
        let value_str = caps
            .get(2)
            .or_else(|| caps.get(4))
            .map_or("", |m| m.as_str());
        let group_type = Self::type_from_str(type_str)?;
        let amount = Precipitation::from_remark_str(
            value_str,
            Self::factor_from_type(group_type),
            Self::unit_from_type(group_type),
        )?;
        Some(Self { group_type, amount })
    }

    pub fn group_type(&self) -> PrecipitationGroupType {
        self.group_type
    }

    pub fn amount(&self) -> Precipitation {
        self.amount
    }

    pub fn is_valid(&self) -> bool {
        true
    }

    fn type_from_str(s: &str) -> Option<PrecipitationGroupType> {
        match s {
            "P" => Some(PrecipitationGroupType::TotalPrecipitationHourly),
            "4/" => Some(PrecipitationGroupType::SnowDepthOnGround),
            "6" => Some(PrecipitationGroupType::FrozenPrecip3Or6Hourly),
            "7" => Some(PrecipitationGroupType::FrozenPrecip24Hourly),
            "931" => Some(PrecipitationGroupType::Snow6Hourly),
            "933" => Some(PrecipitationGroupType::WaterEquivOfSnowOnGround),
            "I1" => Some(PrecipitationGroupType::IceAccretionLastHour),
            "I3" => Some(PrecipitationGroupType::IceAccretionLast3Hours),
            "I6" => Some(PrecipitationGroupType::IceAccretionLast6Hours),
            "PP" => Some(PrecipitationGroupType::PrecipitationAccumulationSinceLastReport),
            _ => None,
        }
    }

    fn unit_from_type(group_type: PrecipitationGroupType) -> PrecipitationUnit {
        match group_type {
            PrecipitationGroupType::PrecipitationAccumulationSinceLastReport => {
                PrecipitationUnit::Mm
            }
            _ => PrecipitationUnit::Inches,
        }
    }

    fn factor_from_type(group_type: PrecipitationGroupType) -> f64 {
        match group_type {
            PrecipitationGroupType::SnowDepthOnGround => 1.0,
            PrecipitationGroupType::Snow6Hourly
            | PrecipitationGroupType::WaterEquivOfSnowOnGround
            | PrecipitationGroupType::PrecipitationAccumulationSinceLastReport => 0.1,
            _ => 0.01,
        }
    }
}
