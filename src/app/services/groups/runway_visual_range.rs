//! Runway visual range groups
//!
//! Per-runway visual range such as `R05/1100`, with an optional variation
//! interval (`R09/0350V0700`), feet unit marker and trend letter
//! (`R06R/4000VP6000FT/U`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{Distance, ReportPart, Runway};

static RVR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(R\d\d[RCL]?)/(////|[PM]?\d\d\d\d)(?:V([PM]?\d\d\d\d))?(FT/?)?([UND/])?$")
        .unwrap()
});

/// Reported tendency of the visual range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RvrTrend {
    #[default]
    None,
    NotReported,
    Upward,
    Neutral,
    Downward,
}

/// Visual range along a runway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunwayVisualRangeGroup {
    runway: Runway,
    visual_range: Distance,
    variable_range: Distance,
    trend: RvrTrend,
}

impl RunwayVisualRangeGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        let caps = RVR.captures(token)?;
        let trend = Self::trend_from_str(caps.get(5).map_or("", |m| m.as_str()))?;
        let unit_feet = caps.get(4).is_some();
        let runway = Runway::from_str(caps.get(1).map_or("", |m| m.as_str()), false)?;
        let visual_range = Distance::from_rvr_str(caps.get(2).map_or("", |m| m.as_str()), unit_feet)?;
        let mut group = Self {
            runway,
            visual_range,
            variable_range: Distance::default(),
            trend,
        };
        if let Some(variable) = caps.get(3) {
            group.variable_range = Distance::from_rvr_str(variable.as_str(), unit_feet)?;
        }
        Some(group)
    }

    pub fn runway(&self) -> Runway {
        self.runway
    }

    /// The single reported range; absent when a variation interval is given
    pub fn visual_range(&self) -> Distance {
        if self.is_variable() {
            return Distance::default();
        }
        self.visual_range
    }

    /// Lower bound of a variable visual range
    pub fn min_visual_range(&self) -> Distance {
        if self.is_variable() {
            return self.visual_range;
        }
        Distance::default()
    }

    /// Upper bound of a variable visual range
    pub fn max_visual_range(&self) -> Distance {
        self.variable_range
    }

    pub fn trend(&self) -> RvrTrend {
        self.trend
    }

    pub fn is_variable(&self) -> bool {
        self.variable_range.is_reported()
    }

    pub fn is_valid(&self) -> bool {
        self.runway.is_valid() && self.visual_range.is_valid() && self.variable_range.is_valid()
    }

    fn trend_from_str(s: &str) -> Option<RvrTrend> {
        match s {
            "" => Some(RvrTrend::None),
            "/" => Some(RvrTrend::NotReported),
            "U" => Some(RvrTrend::Upward),
            "N" => Some(RvrTrend::Neutral),
            "D" => Some(RvrTrend::Downward),
            _ => None,
        }
    }
}
