//! Temperature and dew point groups
//!
//! The METAR body group `T/Td`, such as `10/08` or `M02/M04`, with `//` for
//! either element when not reported. Exposes the relative humidity derived
//! from the pair.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::{ReportPart, Temperature, TemperatureUnit};

static TEMPERATURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(M?\d\d|//)/(M?\d\d|//)?$").unwrap());

/// Air temperature and dew point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TemperatureGroup {
    air_temperature: Temperature,
    dew_point: Temperature,
}

impl TemperatureGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if report_part != ReportPart::Metar {
            return None;
        }
        let caps = TEMPERATURE.captures(token)?;
        let air_temperature = Temperature::from_str(caps.get(1).map_or("", |m| m.as_str()))?;
        let dew_point = match caps.get(2) {
            Some(m) => Temperature::from_str(m.as_str())?,
            None => Temperature::default(),
        };
        Some(Self {
            air_temperature,
            dew_point,
        })
    }

    pub fn air_temperature(&self) -> Temperature {
        self.air_temperature
    }

    pub fn dew_point(&self) -> Temperature {
        self.dew_point
    }

    /// Relative humidity from the Magnus formula, clamped to 100 when the
    /// dew point exceeds the temperature
    pub fn relative_humidity(&self) -> Option<f64> {
        let temperature = self.air_temperature.to_unit(TemperatureUnit::Celsius)?;
        let dew_point = self.dew_point.to_unit(TemperatureUnit::Celsius)?;
        if temperature < dew_point {
            return Some(100.0);
        }
        let saturation_vapour_pressure =
            6.11 * 10f64.powf(7.5 * temperature / (237.7 + temperature));
        let actual_vapour_pressure = 6.11 * 10f64.powf(7.5 * dew_point / (237.7 + dew_point));
        Some(100.0 * actual_vapour_pressure / saturation_vapour_pressure)
    }

    /// The dew point can never exceed the air temperature; a freezing zero
    /// temperature cannot pair with a non-freezing zero dew point
    pub fn is_valid(&self) -> bool {
        let (Some(temperature), Some(dew_point)) =
            (self.air_temperature.value(), self.dew_point.value())
        else {
            return true;
        };
        if temperature == 0
            && dew_point == 0
            && self.air_temperature.is_freezing()
            && !self.dew_point.is_freezing()
        {
            return false;
        }
        temperature >= dew_point
    }
}
