//! Forecast temperature extremes
//!
//! The TAF groups `TXM02/1015Z` and `TN10/1812Z` giving the forecast
//! maximum or minimum temperature and its time of occurrence.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{DayTime, ReportPart, Temperature};

static TEMPERATURE_FORECAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(TX|TN)(M?\d\d)/(\d\d\d\d)Z$").unwrap());

/// Whether the minimum or maximum temperature is forecast
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ForecastPoint {
    #[default]
    Minimum,
    Maximum,
}

/// Forecast minimum or maximum temperature with its time of occurrence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemperatureForecastGroup {
    point: ForecastPoint,
    air_temperature: Temperature,
    time: Option<DayTime>,
}

impl TemperatureForecastGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Taf {
            return None;
        }
        let caps = TEMPERATURE_FORECAST.captures(token)?;
        let point = match caps.get(1).map_or("", |m| m.as_str()) {
            "TX" => ForecastPoint::Maximum,
            "TN" => ForecastPoint::Minimum,
            _ => return None,
        };
        let air_temperature = Temperature::from_str(caps.get(2).map_or("", |m| m.as_str()))?;
        let time = DayTime::from_ddhh(caps.get(3).map_or("", |m| m.as_str()))?;
        Some(Self {
            point,
            air_temperature,
            time: Some(time),
        })
    }

    pub fn point(&self) -> ForecastPoint {
        self.point
    }

    pub fn air_temperature(&self) -> Temperature {
        self.air_temperature
    }

    pub fn time(&self) -> Option<DayTime> {
        self.time
    }

    pub fn is_valid(&self) -> bool {
        self.time.map_or(false, |time| time.is_valid())
    }
}
