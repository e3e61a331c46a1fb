//! Sea surface groups
//!
//! Sea surface temperature with the wave conditions, either as an explicit
//! wave height in decimetres (`W15/H25`) or as a state-of-surface digit
//! (`W15/S4`).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{ReportPart, Temperature, WaveHeight};

static SEA_SURFACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^W(\d\d|//)/([HS](?:\d{1,3}|///|/))$").unwrap());

/// Sea surface temperature and waves
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeaSurfaceGroup {
    surface_temperature: Temperature,
    waves: WaveHeight,
}

impl SeaSurfaceGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        let caps = SEA_SURFACE.captures(token)?;
        let surface_temperature = Temperature::from_str(caps.get(1).map_or("", |m| m.as_str()))?;
        let waves = WaveHeight::from_str(caps.get(2).map_or("", |m| m.as_str()))?;
        Some(Self {
            surface_temperature,
            waves,
        })
    }

    pub fn surface_temperature(&self) -> Temperature {
        self.surface_temperature
    }

    pub fn waves(&self) -> WaveHeight {
        self.waves
    }

    pub fn is_valid(&self) -> bool {
        true
    }
}
