//! Rainfall groups
//!
//! The Australian rainfall group `RF02.7/010.5` reporting the rain that
//! fell in the last ten minutes and since 9 AM local time, with an optional
//! third value for the last sixty minutes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{Precipitation, ReportPart};

static RAINFALL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^RF(\d\d\.\d|//\./)/(\d\d\d\.\d|///\./)(?:/(\d\d\d\.\d))?$").unwrap()
});

/// Recent rainfall amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RainfallGroup {
    last_10_minutes: Precipitation,
    since_9am: Precipitation,
    last_60_minutes: Precipitation,
}

impl RainfallGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        let caps = RAINFALL.captures(token)?;
        let last_10_minutes =
            Precipitation::from_rainfall_str(caps.get(1).map_or("", |m| m.as_str()))?;
        let since_9am = Precipitation::from_rainfall_str(caps.get(2).map_or("", |m| m.as_str()))?;
        let last_60_minutes =
            Precipitation::from_rainfall_str(caps.get(3).map_or("", |m| m.as_str()))?;
        Some(Self {
            last_10_minutes,
            since_9am,
            last_60_minutes,
        })
    }

    pub fn rainfall_last_10_minutes(&self) -> Precipitation {
        self.last_10_minutes
    }

    pub fn rainfall_since_9am(&self) -> Precipitation {
        self.since_9am
    }

    pub fn rainfall_last_60_minutes(&self) -> Precipitation {
        self.last_60_minutes
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
