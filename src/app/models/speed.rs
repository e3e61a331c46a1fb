//! Wind speed values
//!
//! Speeds are two or three digits in the unit named by the group suffix
//! (knots, metres per second or kilometres per hour; miles per hour exists
//! only as a conversion target). A three-digit value may not have a leading
//! zero. `//` means not reported.

use serde::Serialize;

use crate::constants::{
    KMH_PER_KNOT, KMH_PER_MPH, KMH_PER_MPS, KNOTS_PER_MPH, KNOTS_PER_MPS, MPH_PER_KMH,
    MPH_PER_KNOT, MPH_PER_MPS, MPS_PER_KNOT, MPS_PER_MPH,
};

use super::scan;

/// Units a speed can be expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SpeedUnit {
    #[default]
    Knots,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

/// A wind or gust speed, possibly not reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Speed {
    value: Option<u32>,
    unit: SpeedUnit,
}

impl Speed {
    /// Parse a 2-3 digit speed in the given unit; empty input and `//` both
    /// produce a not-reported speed
    pub fn from_str(s: &str, unit: SpeedUnit) -> Option<Self> {
        if s.is_empty() || s == "//" {
            return Some(Self::default());
        }
        if s.len() != 2 && s.len() != 3 {
            return None;
        }
        if s.len() == 3 && s.starts_with('0') {
            return None;
        }
        let value = scan::all_digits(s)?;
        Some(Self {
            value: Some(value),
            unit,
        })
    }

    /// Decode a speed unit suffix (`KT`, `MPS` or `KMH`)
    pub fn unit_from_str(s: &str) -> Option<SpeedUnit> {
        match s {
            "KT" => Some(SpeedUnit::Knots),
            "MPS" => Some(SpeedUnit::MetersPerSecond),
            "KMH" => Some(SpeedUnit::KilometersPerHour),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn unit(&self) -> SpeedUnit {
        self.unit
    }

    /// Convert to the requested unit
    pub fn to_unit(&self, unit: SpeedUnit) -> Option<f64> {
        let value = f64::from(self.value?);
        Some(match (self.unit, unit) {
            (a, b) if a == b => value,
            (SpeedUnit::Knots, SpeedUnit::MetersPerSecond) => value * MPS_PER_KNOT,
            (SpeedUnit::Knots, SpeedUnit::KilometersPerHour) => value * KMH_PER_KNOT,
            (SpeedUnit::Knots, SpeedUnit::MilesPerHour) => value * MPH_PER_KNOT,
            (SpeedUnit::MetersPerSecond, SpeedUnit::Knots) => value * KNOTS_PER_MPS,
            (SpeedUnit::MetersPerSecond, SpeedUnit::KilometersPerHour) => value * KMH_PER_MPS,
            (SpeedUnit::MetersPerSecond, SpeedUnit::MilesPerHour) => value * MPH_PER_MPS,
            (SpeedUnit::KilometersPerHour, SpeedUnit::Knots) => value / KMH_PER_KNOT,
            (SpeedUnit::KilometersPerHour, SpeedUnit::MetersPerSecond) => value / KMH_PER_MPS,
            (SpeedUnit::KilometersPerHour, SpeedUnit::MilesPerHour) => value * MPH_PER_KMH,
            (SpeedUnit::MilesPerHour, SpeedUnit::Knots) => value * KNOTS_PER_MPH,
            (SpeedUnit::MilesPerHour, SpeedUnit::MetersPerSecond) => value * MPS_PER_MPH,
            (SpeedUnit::MilesPerHour, SpeedUnit::KilometersPerHour) => value * KMH_PER_MPH,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_speed() {
        let speed = Speed::from_str("05", SpeedUnit::MetersPerSecond).unwrap();
        assert_eq!(speed.value(), Some(5));
        assert_eq!(speed.unit(), SpeedUnit::MetersPerSecond);
    }

    #[test]
    fn test_three_digit_speed() {
        let speed = Speed::from_str("125", SpeedUnit::Knots).unwrap();
        assert_eq!(speed.value(), Some(125));
    }

    #[test]
    fn test_three_digit_leading_zero_rejected() {
        assert!(Speed::from_str("025", SpeedUnit::Knots).is_none());
    }

    #[test]
    fn test_not_reported() {
        let speed = Speed::from_str("//", SpeedUnit::Knots).unwrap();
        assert_eq!(speed.value(), None);
        let speed = Speed::from_str("", SpeedUnit::Knots).unwrap();
        assert_eq!(speed.value(), None);
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(Speed::unit_from_str("KT"), Some(SpeedUnit::Knots));
        assert_eq!(Speed::unit_from_str("MPS"), Some(SpeedUnit::MetersPerSecond));
        assert_eq!(Speed::unit_from_str("KMH"), Some(SpeedUnit::KilometersPerHour));
        assert_eq!(Speed::unit_from_str("MPH"), None);
    }

    #[test]
    fn test_conversions() {
        let ten_knots = Speed::from_str("10", SpeedUnit::Knots).unwrap();
        assert!((ten_knots.to_unit(SpeedUnit::MetersPerSecond).unwrap() - 5.14444).abs() < 0.01);
        assert!((ten_knots.to_unit(SpeedUnit::KilometersPerHour).unwrap() - 18.52).abs() < 0.01);
        assert!((ten_knots.to_unit(SpeedUnit::MilesPerHour).unwrap() - 11.50779).abs() < 0.01);
        assert_eq!(ten_knots.to_unit(SpeedUnit::Knots), Some(10.0));
    }

    #[test]
    fn test_round_trip() {
        let mps = Speed::from_str("12", SpeedUnit::MetersPerSecond).unwrap();
        let knots = mps.to_unit(SpeedUnit::Knots).unwrap();
        assert!((knots * MPS_PER_KNOT - 12.0).abs() < 0.01);
    }
}
