//! Group recognizers for aviation weather reports
//!
//! A report is a sequence of whitespace-delimited tokens; each token carries
//! one logical unit of meaning called a group. This module provides one
//! recognizer per group kind and the [`Group`] sum type tying them together.
//!
//! ## Architecture
//!
//! - Every recognizer exposes `parse(token, report_part)` which either
//!   returns a typed group or declines. Recognition is context-sensitive:
//!   most recognizers only accept tokens in specific report parts.
//! - [`Group::parse`] probes the recognizers in declaration order and falls
//!   back to [`PlainTextGroup`] when none accept. Probe order resolves
//!   ambiguity: a four-character code is a location in the header and plain
//!   text anywhere else.
//! - Some groups span several tokens. [`Group::combine`] asks the previous
//!   group to fold the next one into itself; a `None` result means the two
//!   stay separate.
//!
//! A group whose field values violate its own constraints is still returned
//! by its recognizer; `is_valid()` reports the violation without failing the
//! surrounding parse.

pub mod cloud;
pub mod colour_code;
pub mod fixed;
pub mod location;
pub mod plain_text;
pub mod precipitation;
pub mod pressure;
pub mod rainfall;
pub mod report_time;
pub mod runway_state;
pub mod runway_visual_range;
pub mod sea_surface;
pub mod temperature;
pub mod temperature_forecast;
pub mod trend;
pub mod visibility;
pub mod weather;
pub mod wind;
pub mod wind_shear;

#[cfg(test)]
pub mod tests;

pub use cloud::{CloudAmount, CloudGroup, CloudType};
pub use colour_code::{ColourCode, ColourCodeGroup};
pub use fixed::{FixedGroup, FixedGroupType};
pub use location::LocationGroup;
pub use plain_text::PlainTextGroup;
pub use precipitation::{PrecipitationGroup, PrecipitationGroupType};
pub use pressure::{PressureGroup, PressureGroupType};
pub use rainfall::RainfallGroup;
pub use report_time::ReportTimeGroup;
pub use runway_state::{ContaminationExtent, Deposits, RunwayStateGroup, RunwayStateStatus};
pub use runway_visual_range::{RunwayVisualRangeGroup, RvrTrend};
pub use sea_surface::SeaSurfaceGroup;
pub use temperature::TemperatureGroup;
pub use temperature_forecast::{ForecastPoint, TemperatureForecastGroup};
pub use trend::{TrendGroup, TrendProbability, TrendType};
pub use visibility::VisibilityGroup;
pub use weather::{WeatherDescriptor, WeatherGroup, WeatherPhenomenon, WeatherQualifier};
pub use wind::WindGroup;
pub use wind_shear::WindShearLowLayerGroup;

use serde::Serialize;

use crate::app::models::ReportPart;

/// One parsed group of a METAR or TAF report
///
/// The variant order is the recognizer probe order; `PlainText` is the
/// fallback and is never probed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Group {
    Fixed(FixedGroup),
    Location(LocationGroup),
    ReportTime(ReportTimeGroup),
    Trend(TrendGroup),
    Wind(WindGroup),
    Visibility(VisibilityGroup),
    Cloud(CloudGroup),
    Weather(WeatherGroup),
    Temperature(TemperatureGroup),
    TemperatureForecast(TemperatureForecastGroup),
    Pressure(PressureGroup),
    RunwayVisualRange(RunwayVisualRangeGroup),
    RunwayState(RunwayStateGroup),
    WindShearLowLayer(WindShearLowLayerGroup),
    Rainfall(RainfallGroup),
    SeaSurface(SeaSurfaceGroup),
    ColourCode(ColourCodeGroup),
    Precipitation(PrecipitationGroup),
    PlainText(PlainTextGroup),
}

impl Group {
    /// Classify a single token under the given report part
    ///
    /// Probes each recognizer in variant declaration order and returns the
    /// first success; a token nothing recognizes becomes a plain text group,
    /// which is not a failure indicator.
    pub fn parse(token: &str, report_part: ReportPart) -> Group {
        if let Some(group) = FixedGroup::parse(token, report_part) {
            return Group::Fixed(group);
        }
        if let Some(group) = LocationGroup::parse(token, report_part) {
            return Group::Location(group);
        }
        if let Some(group) = ReportTimeGroup::parse(token, report_part) {
            return Group::ReportTime(group);
        }
        if let Some(group) = TrendGroup::parse(token, report_part) {
            return Group::Trend(group);
        }
        if let Some(group) = WindGroup::parse(token, report_part) {
            return Group::Wind(group);
        }
        if let Some(group) = VisibilityGroup::parse(token, report_part) {
            return Group::Visibility(group);
        }
        if let Some(group) = CloudGroup::parse(token, report_part) {
            return Group::Cloud(group);
        }
        if let Some(group) = WeatherGroup::parse(token, report_part) {
            return Group::Weather(group);
        }
        if let Some(group) = TemperatureGroup::parse(token, report_part) {
            return Group::Temperature(group);
        }
        if let Some(group) = TemperatureForecastGroup::parse(token, report_part) {
            return Group::TemperatureForecast(group);
        }
        if let Some(group) = PressureGroup::parse(token, report_part) {
            return Group::Pressure(group);
        }
        if let Some(group) = RunwayVisualRangeGroup::parse(token, report_part) {
            return Group::RunwayVisualRange(group);
        }
        if let Some(group) = RunwayStateGroup::parse(token, report_part) {
            return Group::RunwayState(group);
        }
        if let Some(group) = WindShearLowLayerGroup::parse(token, report_part) {
            return Group::WindShearLowLayer(group);
        }
        if let Some(group) = RainfallGroup::parse(token, report_part) {
            return Group::Rainfall(group);
        }
        if let Some(group) = SeaSurfaceGroup::parse(token, report_part) {
            return Group::SeaSurface(group);
        }
        if let Some(group) = ColourCodeGroup::parse(token, report_part) {
            return Group::ColourCode(group);
        }
        if let Some(group) = PrecipitationGroup::parse(token, report_part) {
            return Group::Precipitation(group);
        }
        Group::PlainText(PlainTextGroup::new(token))
    }

    /// Try to fold the next group into this one
    ///
    /// Returns the merged group, or `None` when the two do not form a
    /// multi-token group. Only trend, wind, visibility and wind shear groups
    /// merge; everything else always declines.
    pub fn combine(&self, next: &Group) -> Option<Group> {
        match self {
            Group::Trend(group) => group.combine(next),
            Group::Wind(group) => group.combine(next),
            Group::Visibility(group) => group.combine(next),
            Group::WindShearLowLayer(group) => group.combine(next),
            _ => None,
        }
    }

    /// Whether the group satisfies all of its own field constraints
    pub fn is_valid(&self) -> bool {
        match self {
            Group::Fixed(group) => group.is_valid(),
            Group::Location(group) => group.is_valid(),
            Group::ReportTime(group) => group.is_valid(),
            Group::Trend(group) => group.is_valid(),
            Group::Wind(group) => group.is_valid(),
            Group::Visibility(group) => group.is_valid(),
            Group::Cloud(group) => group.is_valid(),
            Group::Weather(group) => group.is_valid(),
            Group::Temperature(group) => group.is_valid(),
            Group::TemperatureForecast(group) => group.is_valid(),
            Group::Pressure(group) => group.is_valid(),
            Group::RunwayVisualRange(group) => group.is_valid(),
            Group::RunwayState(group) => group.is_valid(),
            Group::WindShearLowLayer(group) => group.is_valid(),
            Group::Rainfall(group) => group.is_valid(),
            Group::SeaSurface(group) => group.is_valid(),
            Group::ColourCode(group) => group.is_valid(),
            Group::Precipitation(group) => group.is_valid(),
            Group::PlainText(group) => group.is_valid(),
        }
    }

    /// Short name of the group kind, for rendering and diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Group::Fixed(_) => "fixed",
            Group::Location(_) => "location",
            Group::ReportTime(_) => "report-time",
            Group::Trend(_) => "trend",
            Group::Wind(_) => "wind",
            Group::Visibility(_) => "visibility",
            Group::Cloud(_) => "cloud",
            Group::Weather(_) => "weather",
            Group::Temperature(_) => "temperature",
            Group::TemperatureForecast(_) => "temperature-forecast",
            Group::Pressure(_) => "pressure",
            Group::RunwayVisualRange(_) => "runway-visual-range",
            Group::RunwayState(_) => "runway-state",
            Group::WindShearLowLayer(_) => "wind-shear-low-layer",
            Group::Rainfall(_) => "rainfall",
            Group::SeaSurface(_) => "sea-surface",
            Group::ColourCode(_) => "colour-code",
            Group::Precipitation(_) => "precipitation",
            Group::PlainText(_) => "plain-text",
        }
    }
}
