//! Core data model for aviation weather reports
//!
//! Defines the primitive quantity types shared by all group recognizers
//! (runways, times, temperatures, speeds, distances, directions, pressures,
//! precipitation amounts, surface friction and wave heights) together with
//! the report-level classification enums.
//!
//! Every primitive parses from one fixed-shape substring, stores its value in
//! a canonical unit, and converts to other units on demand. Parsing either
//! succeeds or declines; out-of-range values that still match the shape are
//! kept and flagged through the owning group's validity check.

pub(crate) mod scan;

pub mod direction;
pub mod distance;
pub mod precipitation;
pub mod pressure;
pub mod runway;
pub mod speed;
pub mod surface_friction;
pub mod temperature;
pub mod time;
pub mod wave_height;

pub use direction::{Cardinal, Direction, DirectionStatus};
pub use distance::{Distance, DistanceModifier, DistanceUnit};
pub use precipitation::{Precipitation, PrecipitationStatus, PrecipitationUnit};
pub use pressure::{Pressure, PressureUnit};
pub use runway::{Runway, RunwayDesignator};
pub use speed::{Speed, SpeedUnit};
pub use surface_friction::{BrakingAction, SurfaceFriction, SurfaceFrictionStatus};
pub use temperature::{Temperature, TemperatureUnit};
pub use time::DayTime;
pub use wave_height::{StateOfSurface, WaveHeight, WaveHeightType, WaveHeightUnit};

use serde::{Deserialize, Serialize};

/// Detected kind of an aviation weather report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// Type could not be detected
    Unknown,
    /// Surface observation report (METAR or SPECI)
    Metar,
    /// Terminal aerodrome forecast
    Taf,
}

/// Segment of a report with a distinct grammar
///
/// Group recognizers are context-sensitive: the same token can parse
/// differently (or not at all) depending on the part of the report it
/// appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportPart {
    /// No meaningful part (terminal states)
    Unknown,
    /// Report type, amendment markers, location and issue time
    Header,
    /// Body of a METAR report
    Metar,
    /// Body of a TAF report
    Taf,
    /// Supplementary remarks after the RMK marker
    Remarks,
}
