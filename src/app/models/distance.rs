//! Distances, visibilities and heights
//!
//! One distance type covers all the length-like quantities in a report:
//! meter-coded visibility, statute mile visibility with fractions, runway
//! visual range and cloud / wind shear heights in hundreds of feet. A
//! distance holds an optional integer part and an optional fraction, plus a
//! less-than / more-than modifier.

use serde::Serialize;

use crate::constants::{
    FEET_PER_STATUTE_MILE, HEIGHT_FACTOR_FEET, METERS_PER_FOOT, METERS_PER_STATUTE_MILE,
    VISIBILITY_10KM_METERS, VISIBILITY_MORE_THAN_10KM_CODE,
};

use super::scan;

/// Units a distance can be expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DistanceUnit {
    #[default]
    Meters,
    StatuteMiles,
    Feet,
}

/// Qualifier on a reported distance value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DistanceModifier {
    #[default]
    None,
    LessThan,
    MoreThan,
}

/// A distance with optional integer and fractional parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Distance {
    modifier: DistanceModifier,
    integer: Option<u32>,
    numerator: Option<u32>,
    denominator: Option<u32>,
    unit: DistanceUnit,
}

impl Distance {
    /// A reported integer distance in the given unit
    pub fn from_value(value: u32, unit: DistanceUnit) -> Self {
        Self {
            integer: Some(value),
            unit,
            ..Self::default()
        }
    }

    /// A not-reported distance carrying only its unit
    pub fn not_reported(unit: DistanceUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }

    /// Parse a four-digit meter-coded visibility; `////` is not reported and
    /// `9999` normalizes to "more than 10 km"
    pub fn from_meter_str(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        if s == "////" {
            return Some(Self::not_reported(DistanceUnit::Meters));
        }
        let value = scan::digits(s, 0, 4)?;
        let mut distance = Self::from_value(value, DistanceUnit::Meters);
        if value == VISIBILITY_MORE_THAN_10KM_CODE {
            distance.integer = Some(VISIBILITY_10KM_METERS);
            distance.modifier = DistanceModifier::MoreThan;
        }
        Some(distance)
    }

    /// Parse a statute mile visibility: optional `P`/`M` modifier, then
    /// either an integer or a fraction, with a mandatory `SM` suffix
    ///
    /// A numerator no smaller than its denominator is split decimally, so
    /// `13/4SM` reads as one and three quarters rather than thirteen fourths.
    pub fn from_mile_str(s: &str) -> Option<Self> {
        const UNIT_LEN: usize = 2;
        if s.len() < UNIT_LEN + 1 {
            return None;
        }
        if s == "////SM" {
            return Some(Self::not_reported(DistanceUnit::StatuteMiles));
        }
        if !s.ends_with("SM") {
            return None;
        }
        let body_len = s.len() - UNIT_LEN;
        let modifier = Self::modifier_from_char(s.as_bytes()[0] as char);
        let mut distance = Self::not_reported(DistanceUnit::StatuteMiles);
        match s[..body_len].find('/') {
            None => {
                let mut int_pos = 0;
                let mut int_len = body_len;
                if let Some(modifier) = modifier {
                    distance.modifier = modifier;
                    int_pos += 1;
                    int_len -= 1;
                }
                if int_len == 0 || int_len > 2 {
                    return None;
                }
                distance.integer = Some(scan::digits(s, int_pos, int_len)?);
            }
            Some(slash_pos) => {
                let mut num_pos = 0;
                let mut num_len = slash_pos;
                if let Some(modifier) = modifier {
                    distance.modifier = modifier;
                    num_pos += 1;
                    num_len -= 1;
                }
                let den_pos = slash_pos + 1;
                let den_len = body_len - den_pos;
                if num_len == 0 || num_len > 2 || den_len == 0 || den_len > 2 {
                    return None;
                }
                let numerator = scan::digits(s, num_pos, num_len)?;
                let denominator = scan::digits(s, den_pos, den_len)?;
                distance.numerator = Some(numerator);
                distance.denominator = Some(denominator);
                if numerator >= denominator {
                    distance.integer = Some(numerator / 10);
                    distance.numerator = Some(numerator % 10);
                }
            }
        }
        Some(distance)
    }

    /// Parse a three-digit height in hundreds of feet; `///` is not reported
    pub fn from_height_str(s: &str) -> Option<Self> {
        if s.len() != 3 {
            return None;
        }
        if s == "///" {
            return Some(Self::not_reported(DistanceUnit::Feet));
        }
        let value = scan::digits(s, 0, 3)?;
        Some(Self::from_value(value * HEIGHT_FACTOR_FEET, DistanceUnit::Feet))
    }

    /// Parse a runway visual range value: four digits with an optional
    /// `P`/`M` modifier; `////` is not reported
    pub fn from_rvr_str(s: &str, unit_feet: bool) -> Option<Self> {
        let unit = if unit_feet {
            DistanceUnit::Feet
        } else {
            DistanceUnit::Meters
        };
        match s.len() {
            4 => {
                if s == "////" {
                    return Some(Self::not_reported(unit));
                }
                let value = scan::digits(s, 0, 4)?;
                Some(Self::from_value(value, unit))
            }
            5 => {
                let modifier = Self::modifier_from_char(s.as_bytes()[0] as char)?;
                let value = scan::digits(s, 1, 4)?;
                let mut distance = Self::from_value(value, unit);
                distance.modifier = modifier;
                Some(distance)
            }
            _ => None,
        }
    }

    /// Merge a pure integer distance with a pure fraction distance
    ///
    /// Defined only when both are valid, share a unit, carry no modifier,
    /// and are an integer and a fraction respectively.
    pub fn from_integer_and_fraction(integer: &Distance, fraction: &Distance) -> Option<Self> {
        if !integer.is_valid()
            || !fraction.is_valid()
            || integer.modifier != DistanceModifier::None
            || fraction.modifier != DistanceModifier::None
            || integer.unit != fraction.unit
            || !integer.is_integer()
            || !fraction.is_fraction()
        {
            return None;
        }
        let mut result = *integer;
        result.numerator = fraction.numerator;
        result.denominator = fraction.denominator;
        Some(result)
    }

    pub fn integer(&self) -> Option<u32> {
        self.integer
    }

    pub fn numerator(&self) -> Option<u32> {
        self.numerator
    }

    pub fn denominator(&self) -> Option<u32> {
        self.denominator
    }

    pub fn modifier(&self) -> DistanceModifier {
        self.modifier
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Integer part present with no fraction
    pub fn is_integer(&self) -> bool {
        self.integer.is_some() && self.numerator.is_none() && self.denominator.is_none()
    }

    /// Fraction present with no integer part
    pub fn is_fraction(&self) -> bool {
        self.integer.is_none() && self.numerator.is_some() && self.denominator.is_some()
    }

    pub fn is_reported(&self) -> bool {
        self.integer.is_some() || (self.numerator.is_some() && self.denominator.is_some())
    }

    pub fn has_integer(&self) -> bool {
        self.integer.is_some()
    }

    pub fn has_fraction(&self) -> bool {
        self.numerator.is_some() && self.denominator.is_some()
    }

    /// A fraction with a zero numerator or denominator is not a usable value
    pub fn is_valid(&self) -> bool {
        if self.denominator == Some(0) {
            return false;
        }
        if self.numerator == Some(0) {
            return false;
        }
        true
    }

    /// Convert to the requested unit
    pub fn to_unit(&self, unit: DistanceUnit) -> Option<f64> {
        if !self.is_reported() {
            return None;
        }
        let denominator = self.denominator.unwrap_or(1);
        if denominator == 0 {
            return None;
        }
        let value = f64::from(self.integer.unwrap_or(0))
            + f64::from(self.numerator.unwrap_or(0)) / f64::from(denominator);
        Some(match (self.unit, unit) {
            (a, b) if a == b => value,
            (DistanceUnit::Meters, DistanceUnit::StatuteMiles) => value / METERS_PER_STATUTE_MILE,
            (DistanceUnit::Meters, DistanceUnit::Feet) => value / METERS_PER_FOOT,
            (DistanceUnit::StatuteMiles, DistanceUnit::Meters) => value * METERS_PER_STATUTE_MILE,
            (DistanceUnit::StatuteMiles, DistanceUnit::Feet) => value * FEET_PER_STATUTE_MILE,
            (DistanceUnit::Feet, DistanceUnit::Meters) => value * METERS_PER_FOOT,
            (DistanceUnit::Feet, DistanceUnit::StatuteMiles) => value / FEET_PER_STATUTE_MILE,
            _ => return None,
        })
    }

    fn modifier_from_char(c: char) -> Option<DistanceModifier> {
        match c {
            'M' => Some(DistanceModifier::LessThan),
            'P' => Some(DistanceModifier::MoreThan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_visibility() {
        let vis = Distance::from_meter_str("4000").unwrap();
        assert_eq!(vis.integer(), Some(4000));
        assert_eq!(vis.unit(), DistanceUnit::Meters);
        assert_eq!(vis.modifier(), DistanceModifier::None);
    }

    #[test]
    fn test_meter_visibility_9999() {
        let vis = Distance::from_meter_str("9999").unwrap();
        assert_eq!(vis.integer(), Some(10000));
        assert_eq!(vis.modifier(), DistanceModifier::MoreThan);
    }

    #[test]
    fn test_meter_visibility_not_reported() {
        let vis = Distance::from_meter_str("////").unwrap();
        assert!(!vis.is_reported());
        assert_eq!(vis.unit(), DistanceUnit::Meters);
    }

    #[test]
    fn test_mile_integer() {
        let vis = Distance::from_mile_str("10SM").unwrap();
        assert_eq!(vis.integer(), Some(10));
        assert_eq!(vis.unit(), DistanceUnit::StatuteMiles);
        assert!(vis.is_integer());
    }

    #[test]
    fn test_mile_fraction() {
        let vis = Distance::from_mile_str("1/2SM").unwrap();
        assert!(vis.is_fraction());
        assert_eq!(vis.numerator(), Some(1));
        assert_eq!(vis.denominator(), Some(2));
    }

    #[test]
    fn test_mile_modifiers() {
        let vis = Distance::from_mile_str("P6SM").unwrap();
        assert_eq!(vis.modifier(), DistanceModifier::MoreThan);
        assert_eq!(vis.integer(), Some(6));

        let vis = Distance::from_mile_str("M1/4SM").unwrap();
        assert_eq!(vis.modifier(), DistanceModifier::LessThan);
        assert_eq!(vis.numerator(), Some(1));
        assert_eq!(vis.denominator(), Some(4));
    }

    #[test]
    fn test_mile_improper_fraction_splits_decimally() {
        let vis = Distance::from_mile_str("13/4SM").unwrap();
        assert_eq!(vis.integer(), Some(1));
        assert_eq!(vis.numerator(), Some(3));
        assert_eq!(vis.denominator(), Some(4));
        let miles = vis.to_unit(DistanceUnit::StatuteMiles).unwrap();
        assert!((miles - 1.75).abs() < 0.01);
    }

    #[test]
    fn test_mile_not_reported() {
        let vis = Distance::from_mile_str("////SM").unwrap();
        assert!(!vis.is_reported());
        assert_eq!(vis.unit(), DistanceUnit::StatuteMiles);
    }

    #[test]
    fn test_height_in_hundreds_of_feet() {
        let height = Distance::from_height_str("030").unwrap();
        assert_eq!(height.integer(), Some(3000));
        assert_eq!(height.unit(), DistanceUnit::Feet);
        assert!(!Distance::from_height_str("///").unwrap().is_reported());
    }

    #[test]
    fn test_rvr_values() {
        let rvr = Distance::from_rvr_str("1200", false).unwrap();
        assert_eq!(rvr.integer(), Some(1200));
        assert_eq!(rvr.unit(), DistanceUnit::Meters);

        let rvr = Distance::from_rvr_str("P6000", true).unwrap();
        assert_eq!(rvr.modifier(), DistanceModifier::MoreThan);
        assert_eq!(rvr.unit(), DistanceUnit::Feet);

        assert!(!Distance::from_rvr_str("////", false).unwrap().is_reported());
        assert!(Distance::from_rvr_str("120", false).is_none());
    }

    #[test]
    fn test_integer_and_fraction_merge() {
        let one = Distance::from_mile_str("1SM").unwrap();
        let frac = Distance::from_mile_str("3/4SM").unwrap();
        let merged = Distance::from_integer_and_fraction(&one, &frac).unwrap();
        assert_eq!(merged.integer(), Some(1));
        assert_eq!(merged.numerator(), Some(3));
        assert_eq!(merged.denominator(), Some(4));

        // Mixed units do not merge
        let meters = Distance::from_meter_str("4000").unwrap();
        assert!(Distance::from_integer_and_fraction(&meters, &frac).is_none());
        // Two integers do not merge
        assert!(Distance::from_integer_and_fraction(&one, &one).is_none());
        // Modifiers block the merge
        let p6 = Distance::from_mile_str("P6SM").unwrap();
        assert!(Distance::from_integer_and_fraction(&p6, &frac).is_none());
    }

    #[test]
    fn test_zero_fraction_parts_invalid() {
        let vis = Distance::from_mile_str("0/4SM").unwrap();
        assert!(!vis.is_valid());
    }

    #[test]
    fn test_unit_conversions() {
        let mile = Distance::from_mile_str("1SM").unwrap();
        assert!((mile.to_unit(DistanceUnit::Meters).unwrap() - 1609.347).abs() < 0.01);
        assert!((mile.to_unit(DistanceUnit::Feet).unwrap() - 5280.0).abs() < 0.01);

        let meters = Distance::from_meter_str("0300").unwrap();
        assert!((meters.to_unit(DistanceUnit::Feet).unwrap() - 984.252).abs() < 0.01);
    }
}
