//! Numeric constants for aviation weather report parsing
//!
//! This module contains unit conversion factors, the WMO code-table mappings
//! used when decoding runway state and sea surface groups, and the structural
//! limits of the report format.

// =============================================================================
// Speed Conversion Factors
// =============================================================================

pub const MPS_PER_KNOT: f64 = 0.514444;
pub const KMH_PER_KNOT: f64 = 1.852;
pub const MPH_PER_KNOT: f64 = 1.150779;

pub const KNOTS_PER_MPS: f64 = 1.943844;
pub const KMH_PER_MPS: f64 = 3.6;
pub const MPH_PER_MPS: f64 = 2.236936;

pub const MPH_PER_KMH: f64 = 0.621371;

pub const KNOTS_PER_MPH: f64 = 0.868976;
pub const MPS_PER_MPH: f64 = 0.44704;
pub const KMH_PER_MPH: f64 = 1.609344;

// =============================================================================
// Distance Conversion Factors
// =============================================================================

pub const METERS_PER_STATUTE_MILE: f64 = 1609.347;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const FEET_PER_STATUTE_MILE: f64 = 5280.0;

/// Cloud heights and wind shear heights are encoded in hundreds of feet
pub const HEIGHT_FACTOR_FEET: u32 = 100;

/// Meter-coded visibility "9999" means 10 km or more
pub const VISIBILITY_MORE_THAN_10KM_CODE: u32 = 9999;
pub const VISIBILITY_10KM_METERS: u32 = 10000;

// =============================================================================
// Pressure Conversion Factors
// =============================================================================

pub const HPA_PER_INHG: f64 = 33.8639;
pub const HPA_PER_MMHG: f64 = 1.3332;
pub const MM_PER_INCH: f64 = 25.4;

/// Inches-of-mercury wire values are integers scaled by 100 (A2992 = 29.92)
pub const INHG_DECIMAL_SHIFT: f64 = 0.01;

/// Sea level pressure remark values are tenths of hPa added to a base
pub const SLP_DECIMAL_SHIFT: f64 = 0.1;
pub const SLP_BASE_LOW: f64 = 1000.0;
pub const SLP_BASE_HIGH: f64 = 900.0;
pub const SLP_BASE_THRESHOLD: u32 = 500;

// =============================================================================
// Precipitation and Wave Height
// =============================================================================

/// Wave heights are encoded in decimetres
pub const WAVE_HEIGHT_DECIMAL_SHIFT: f64 = 0.1;

/// Surface friction coefficients are encoded as hundredths
pub const FRICTION_COEFFICIENT_DECIMAL_SHIFT: f64 = 0.01;

/// Deposit depth codes 91..99, see Table 1079 in Manual on Codes (WMO No. 306)
pub mod deposit_depth {
    /// Code 91 is reserved and must be rejected
    pub const RESERVED: u32 = 91;
    pub const DEPTH_10CM: u32 = 92;
    pub const DEPTH_15CM: u32 = 93;
    pub const DEPTH_20CM: u32 = 94;
    pub const DEPTH_25CM: u32 = 95;
    pub const DEPTH_30CM: u32 = 96;
    pub const DEPTH_35CM: u32 = 97;
    pub const DEPTH_40CM: u32 = 98;
    /// Code 99 means the runway is not operational
    pub const RUNWAY_NOT_OPERATIONAL: u32 = 99;

    /// Millimetre values for the coded depths 92..98
    pub const DEPTH_VALUES_MM: &[(u32, u32)] = &[
        (DEPTH_10CM, 100),
        (DEPTH_15CM, 150),
        (DEPTH_20CM, 200),
        (DEPTH_25CM, 250),
        (DEPTH_30CM, 300),
        (DEPTH_35CM, 350),
        (DEPTH_40CM, 400),
    ];
}

/// Braking action codes 91..99, see Table 0366 in Manual on Codes (WMO No. 306)
pub mod braking_action {
    pub const POOR: u32 = 91;
    pub const MEDIUM_POOR: u32 = 92;
    pub const MEDIUM: u32 = 93;
    pub const MEDIUM_GOOD: u32 = 94;
    pub const GOOD: u32 = 95;
    pub const RESERVED_96: u32 = 96;
    pub const RESERVED_97: u32 = 97;
    pub const RESERVED_98: u32 = 98;
    pub const UNRELIABLE: u32 = 99;

    // Coefficient lower limits (hundredths) for each braking action bucket
    pub const POOR_LOW_LIMIT: u32 = 0;
    pub const MEDIUM_POOR_LOW_LIMIT: u32 = 26;
    pub const MEDIUM_LOW_LIMIT: u32 = 30;
    pub const MEDIUM_GOOD_LOW_LIMIT: u32 = 36;
    pub const GOOD_LOW_LIMIT: u32 = 40;
}

/// Maximum wave heights in decimetres for each state-of-surface digit,
/// see Table 3700 in Manual on Codes (WMO No. 306)
pub mod state_of_surface {
    pub const MAX_CALM_GLASSY: u32 = 0;
    pub const MAX_CALM_RIPPLED: u32 = 1;
    pub const MAX_SMOOTH: u32 = 5;
    pub const MAX_SLIGHT: u32 = 12;
    pub const MAX_MODERATE: u32 = 25;
    pub const MAX_ROUGH: u32 = 40;
    pub const MAX_VERY_ROUGH: u32 = 60;
    pub const MAX_HIGH: u32 = 90;
    pub const MAX_VERY_HIGH: u32 = 140;
    pub const MIN_PHENOMENAL: u32 = 141;
}

// =============================================================================
// Structural Limits
// =============================================================================

/// Location codes are exactly four characters
pub const LOCATION_CODE_LENGTH: usize = 4;

/// Plain text fallback groups keep at most this many characters
pub const PLAIN_TEXT_MAX_LENGTH: usize = 15;

/// A weather group carries at most this many phenomena
pub const MAX_WEATHER_PHENOMENA: usize = 8;

/// Runway numbers above this are sentinels, not headings
pub const MAX_RUNWAY_NUMBER: u32 = 36;

/// Runway number sentinel meaning "all runways"
pub const RUNWAY_ALL: u32 = 88;

/// Runway number sentinel meaning "repetition of last message"
pub const RUNWAY_MESSAGE_REPETITION: u32 = 99;

pub const MAX_DAY: u32 = 31;
pub const MAX_HOUR: u32 = 24;
pub const MAX_MINUTE: u32 = 59;
pub const MAX_DEGREES: u32 = 360;

// =============================================================================
// Cardinal Direction Sectors
// =============================================================================

/// Cardinal direction sectors are 45 degrees wide, centred on the principal
/// directions
pub const CARDINAL_SECTOR_SIZE: u32 = 45;

pub const DEGREES_TRUE_NORTH: u32 = 360;
pub const DEGREES_TRUE_EAST: u32 = 90;
pub const DEGREES_TRUE_SOUTH: u32 = 180;
pub const DEGREES_TRUE_WEST: u32 = 270;
pub const DEGREES_NORTH_EAST: u32 = 45;
pub const DEGREES_SOUTH_EAST: u32 = 135;
pub const DEGREES_SOUTH_WEST: u32 = 225;
pub const DEGREES_NORTH_WEST: u32 = 315;

// =============================================================================
// Helper Functions
// =============================================================================

/// Millimetre value for a runway deposit depth code, if the code maps to one
pub fn deposit_depth_mm(code: u32) -> Option<u32> {
    deposit_depth::DEPTH_VALUES_MM
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, mm)| *mm)
}
