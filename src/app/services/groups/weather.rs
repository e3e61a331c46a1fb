//! Weather phenomena groups
//!
//! Present, recent or vicinity weather: an optional intensity/proximity
//! qualifier (`-`, `+`, `VC`, `RE`), an optional descriptor (`SH`, `TS`,
//! `FZ`, ...) and up to eight two-letter phenomena (`RA`, `SN`, `FG`, ...).
//! At least one of the three must be present. Precipitation reported with
//! no explicit intensity is implicitly moderate.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::app::models::ReportPart;
use crate::constants::MAX_WEATHER_PHENOMENA;

static WEATHER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(RE|[+-]|VC)?(MI|PR|BC|DR|BL|SH|TS|FZ)?((?:[A-Z][A-Z])*)$").unwrap());

/// Intensity or proximity qualifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WeatherQualifier {
    #[default]
    None,
    /// Recent weather, ended before the observation
    Recent,
    /// In the vicinity of the aerodrome but not at it
    Vicinity,
    Light,
    Moderate,
    Heavy,
}

/// Weather descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WeatherDescriptor {
    #[default]
    None,
    Shallow,
    Partial,
    Patches,
    LowDrifting,
    Blowing,
    Showers,
    Thunderstorm,
    Freezing,
}

/// Two-letter weather phenomena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeatherPhenomenon {
    NotReported,
    Drizzle,
    Rain,
    Snow,
    SnowGrains,
    IceCrystals,
    IcePellets,
    Hail,
    SmallHail,
    Undetermined,
    Mist,
    Fog,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Haze,
    Spray,
    DustWhirls,
    Squalls,
    FunnelCloud,
    Sandstorm,
    Duststorm,
}

/// A weather phenomena group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeatherGroup {
    qualifier: WeatherQualifier,
    descriptor: WeatherDescriptor,
    phenomena: Vec<WeatherPhenomenon>,
}

impl WeatherGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if !matches!(report_part, ReportPart::Metar | ReportPart::Taf) {
            return None;
        }
        if report_part == ReportPart::Metar {
            if token == "RE//" {
                return Some(Self::not_reported_recent());
            }
            if token == "//" {
                return Some(Self::not_reported());
            }
        }
        if token.is_empty() {
            return None;
        }
        let caps = WEATHER.captures(token)?;
        let qualifier = Self::qualifier_from_str(caps.get(1).map_or("", |m| m.as_str()))?;
        let descriptor = Self::descriptor_from_str(caps.get(2).map_or("", |m| m.as_str()))?;
        let weather_str = caps.get(3).map_or("", |m| m.as_str());
        let mut phenomena = Vec::new();
        for chunk in weather_str.as_bytes().chunks(2) {
            let phenomenon = Self::phenomenon_from_str(std::str::from_utf8(chunk).ok()?)?;
            if phenomena.len() >= MAX_WEATHER_PHENOMENA {
                return None;
            }
            phenomena.push(phenomenon);
        }
        let mut group = Self {
            qualifier,
            descriptor,
            phenomena,
        };
        if group.qualifier == WeatherQualifier::None && group.implies_moderate() {
            group.qualifier = WeatherQualifier::Moderate;
        }
        Some(group)
    }

    pub fn qualifier(&self) -> WeatherQualifier {
        self.qualifier
    }

    pub fn descriptor(&self) -> WeatherDescriptor {
        self.descriptor
    }

    pub fn phenomena(&self) -> &[WeatherPhenomenon] {
        &self.phenomena
    }

    pub fn is_valid(&self) -> bool {
        true
    }

    /// Precipitation whose plain form reads as moderate intensity
    fn implies_moderate(&self) -> bool {
        for phenomenon in &self.phenomena {
            match phenomenon {
                WeatherPhenomenon::Drizzle
                | WeatherPhenomenon::Rain
                | WeatherPhenomenon::SnowGrains
                | WeatherPhenomenon::IcePellets
                | WeatherPhenomenon::Undetermined => return true,
                WeatherPhenomenon::Snow => {
                    if self.descriptor != WeatherDescriptor::LowDrifting
                        && self.descriptor != WeatherDescriptor::Blowing
                    {
                        return true;
                    }
                }
                _ => {}
            }
        }
        false
    }

    fn not_reported() -> Self {
        Self {
            phenomena: vec![WeatherPhenomenon::NotReported],
            ..Self::default()
        }
    }

    fn not_reported_recent() -> Self {
        Self {
            qualifier: WeatherQualifier::Recent,
            ..Self::not_reported()
        }
    }

    fn qualifier_from_str(s: &str) -> Option<WeatherQualifier> {
        match s {
            "" => Some(WeatherQualifier::None),
            "RE" => Some(WeatherQualifier::Recent),
            "-" => Some(WeatherQualifier::Light),
            "+" => Some(WeatherQualifier::Heavy),
            "VC" => Some(WeatherQualifier::Vicinity),
            _ => None,
        }
    }

    fn descriptor_from_str(s: &str) -> Option<WeatherDescriptor> {
        match s {
            "" => Some(WeatherDescriptor::None),
            "MI" => Some(WeatherDescriptor::Shallow),
            "PR" => Some(WeatherDescriptor::Partial),
            "BC" => Some(WeatherDescriptor::Patches),
            "DR" => Some(WeatherDescriptor::LowDrifting),
            "BL" => Some(WeatherDescriptor::Blowing),
            "SH" => Some(WeatherDescriptor::Showers),
            "TS" => Some(WeatherDescriptor::Thunderstorm),
            "FZ" => Some(WeatherDescriptor::Freezing),
            _ => None,
        }
    }

    fn phenomenon_from_str(s: &str) -> Option<WeatherPhenomenon> {
        match s {
            "DZ" => Some(WeatherPhenomenon::Drizzle),
            "RA" => Some(WeatherPhenomenon::Rain),
            "SN" => Some(WeatherPhenomenon::Snow),
            "SG" => Some(WeatherPhenomenon::SnowGrains),
            "IC" => Some(WeatherPhenomenon::IceCrystals),
            "PL" => Some(WeatherPhenomenon::IcePellets),
            "GR" => Some(WeatherPhenomenon::Hail),
            "GS" => Some(WeatherPhenomenon::SmallHail),
            "UP" => Some(WeatherPhenomenon::Undetermined),
            "BR" => Some(WeatherPhenomenon::Mist),
            "FG" => Some(WeatherPhenomenon::Fog),
            "FU" => Some(WeatherPhenomenon::Smoke),
            "VA" => Some(WeatherPhenomenon::VolcanicAsh),
            "DU" => Some(WeatherPhenomenon::Dust),
            "SA" => Some(WeatherPhenomenon::Sand),
            "HZ" => Some(WeatherPhenomenon::Haze),
            "PY" => Some(WeatherPhenomenon::Spray),
            "PO" => Some(WeatherPhenomenon::DustWhirls),
            "SQ" => Some(WeatherPhenomenon::Squalls),
            "FC" => Some(WeatherPhenomenon::FunnelCloud),
            "SS" => Some(WeatherPhenomenon::Sandstorm),
            "DS" => Some(WeatherPhenomenon::Duststorm),
            _ => None,
        }
    }
}
