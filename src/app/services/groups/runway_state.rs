//! Runway state groups
//!
//! Per-runway surface condition: deposits, contamination extent, deposit
//! depth and surface friction (`R16/290155`), or the special forms
//! `R21/SNOCLO` (closed due to snow) and `R88/CLRD70` (contaminations
//! cleared). Deposits, extent and depth follow Tables 0919, 0519 and 1079
//! in Manual on Codes (WMO No. 306).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{Precipitation, ReportPart, Runway, SurfaceFriction};

static RUNWAY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(R\d\d[RCL]?)/(?:(SNOCLO)|(?:(\d|/)(\d|/)(\d\d|//)|(CLRD))(\d\d|//))$").unwrap()
});

/// Overall status of the runway state report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RunwayStateStatus {
    /// Deposits, extent, depth and friction reported individually
    #[default]
    Normal,
    /// Contaminations have been cleared; only friction is reported
    Clrd,
    /// Runway closed due to snow accumulation
    Snoclo,
}

/// Deposits type, see Table 0919
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Deposits {
    ClearAndDry,
    Damp,
    WetAndWaterPatches,
    RimeAndFrostCovered,
    DrySnow,
    WetSnow,
    Slush,
    Ice,
    CompactedOrRolledSnow,
    FrozenRutsOrRidges,
    #[default]
    NotReported,
}

/// Extent of runway contamination, see Table 0519
///
/// Codes 3, 4, 6, 7 and 8 are reserved; a group carrying one still parses
/// but is marked invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ContaminationExtent {
    None,
    LessThan10Percent,
    From11To25Percent,
    Reserved3,
    Reserved4,
    From26To50Percent,
    Reserved6,
    Reserved7,
    Reserved8,
    MoreThan51Percent,
    #[default]
    NotReported,
}

/// Surface condition of one runway
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RunwayStateGroup {
    runway: Runway,
    status: RunwayStateStatus,
    deposits: Deposits,
    extent: ContaminationExtent,
    deposit_depth: Precipitation,
    surface_friction: SurfaceFriction,
}

impl RunwayStateGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        let caps = RUNWAY_STATE.captures(token)?;
        let runway = Runway::from_str(caps.get(1).map_or("", |m| m.as_str()), false)?;
        if caps.get(2).is_some() {
            return Some(Self::snoclo(runway));
        }
        let surface_friction = SurfaceFriction::from_str(caps.get(7).map_or("", |m| m.as_str()))?;
        if caps.get(6).is_some() {
            return Some(Self::clrd(runway, surface_friction));
        }
        let deposits = Self::deposits_from_str(caps.get(3).map_or("", |m| m.as_str()))?;
        let extent = Self::extent_from_str(caps.get(4).map_or("", |m| m.as_str()))?;
        let deposit_depth =
            Precipitation::from_runway_deposits(caps.get(5).map_or("", |m| m.as_str()))?;
        Some(Self {
            runway,
            status: RunwayStateStatus::Normal,
            deposits,
            extent,
            deposit_depth,
            surface_friction,
        })
    }

    pub fn runway(&self) -> Runway {
        self.runway
    }

    pub fn status(&self) -> RunwayStateStatus {
        self.status
    }

    pub fn deposits(&self) -> Deposits {
        self.deposits
    }

    pub fn contamination_extent(&self) -> ContaminationExtent {
        self.extent
    }

    pub fn deposit_depth(&self) -> Precipitation {
        self.deposit_depth
    }

    pub fn surface_friction(&self) -> SurfaceFriction {
        self.surface_friction
    }

    pub fn is_valid(&self) -> bool {
        self.runway.is_valid()
            && !matches!(
                self.extent,
                ContaminationExtent::Reserved3
                    | ContaminationExtent::Reserved4
                    | ContaminationExtent::Reserved6
                    | ContaminationExtent::Reserved7
                    | ContaminationExtent::Reserved8
            )
    }

    fn snoclo(runway: Runway) -> Self {
        Self {
            runway,
            status: RunwayStateStatus::Snoclo,
            ..Self::default()
        }
    }

    fn clrd(runway: Runway, surface_friction: SurfaceFriction) -> Self {
        Self {
            runway,
            status: RunwayStateStatus::Clrd,
            surface_friction,
            ..Self::default()
        }
    }

    fn deposits_from_str(s: &str) -> Option<Deposits> {
        match s {
            "0" => Some(Deposits::ClearAndDry),
            "1" => Some(Deposits::Damp),
            "2" => Some(Deposits::WetAndWaterPatches),
            "3" => Some(Deposits::RimeAndFrostCovered),
            "4" => Some(Deposits::DrySnow),
            "5" => Some(Deposits::WetSnow),
            "6" => Some(Deposits::Slush),
            "7" => Some(Deposits::Ice),
            "8" => Some(Deposits::CompactedOrRolledSnow),
            "9" => Some(Deposits::FrozenRutsOrRidges),
            "/" => Some(Deposits::NotReported),
            _ => None,
        }
    }

    fn extent_from_str(s: &str) -> Option<ContaminationExtent> {
        match s {
            "0" => Some(ContaminationExtent::None),
            "1" => Some(ContaminationExtent::LessThan10Percent),
            "2" => Some(ContaminationExtent::From11To25Percent),
            "3" => Some(ContaminationExtent::Reserved3),
            "4" => Some(ContaminationExtent::Reserved4),
            "5" => Some(ContaminationExtent::From26To50Percent),
            "6" => Some(ContaminationExtent::Reserved6),
            "7" => Some(ContaminationExtent::Reserved7),
            "8" => Some(ContaminationExtent::Reserved8),
            "9" => Some(ContaminationExtent::MoreThan51Percent),
            "/" => Some(ContaminationExtent::NotReported),
            _ => None,
        }
    }
}
