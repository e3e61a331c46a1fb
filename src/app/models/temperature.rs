//! Temperature values
//!
//! Temperatures are reported in whole degrees Celsius with an `M` prefix for
//! values below zero. The wire format distinguishes `M00` (a rounded value
//! just below freezing) from `00` (just above), so a separate freezing flag
//! is kept alongside the numeric value. `//` means not reported.

use serde::Serialize;

use super::scan;

/// Units a temperature can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

/// A temperature in degrees Celsius, possibly not reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Temperature {
    value: Option<i32>,
    freezing: bool,
}

impl Temperature {
    /// Parse `NN`, `MNN` or `//`
    pub fn from_str(s: &str) -> Option<Self> {
        if s == "//" {
            return Some(Self::default());
        }
        match s.len() {
            2 => {
                let value = scan::digits(s, 0, 2)?;
                Some(Self {
                    value: Some(value as i32),
                    freezing: false,
                })
            }
            3 => {
                if !s.starts_with('M') {
                    return None;
                }
                let value = scan::digits(s, 1, 2)?;
                Some(Self {
                    value: Some(-(value as i32)),
                    freezing: true,
                })
            }
            _ => None,
        }
    }

    /// The reported value in degrees Celsius
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    /// True for sub-zero values, including the rounded `M00`
    pub fn is_freezing(&self) -> bool {
        self.freezing
    }

    /// Convert to the requested unit
    pub fn to_unit(&self, unit: TemperatureUnit) -> Option<f64> {
        let value = f64::from(self.value?);
        match unit {
            TemperatureUnit::Celsius => Some(value),
            TemperatureUnit::Fahrenheit => Some(value * 1.8 + 32.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_value() {
        let t = Temperature::from_str("10").unwrap();
        assert_eq!(t.value(), Some(10));
        assert!(!t.is_freezing());
    }

    #[test]
    fn test_negative_value() {
        let t = Temperature::from_str("M05").unwrap();
        assert_eq!(t.value(), Some(-5));
        assert!(t.is_freezing());
    }

    #[test]
    fn test_rounded_zero_keeps_freezing_flag() {
        let above = Temperature::from_str("00").unwrap();
        assert_eq!(above.value(), Some(0));
        assert!(!above.is_freezing());

        let below = Temperature::from_str("M00").unwrap();
        assert_eq!(below.value(), Some(0));
        assert!(below.is_freezing());
    }

    #[test]
    fn test_not_reported() {
        let t = Temperature::from_str("//").unwrap();
        assert_eq!(t.value(), None);
        assert_eq!(t.to_unit(TemperatureUnit::Celsius), None);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Temperature::from_str("5").is_none());
        assert!(Temperature::from_str("105").is_none());
        assert!(Temperature::from_str("M5").is_none());
        assert!(Temperature::from_str("P05").is_none());
    }

    #[test]
    fn test_fahrenheit_conversion() {
        let t = Temperature::from_str("10").unwrap();
        let f = t.to_unit(TemperatureUnit::Fahrenheit).unwrap();
        assert!((f - 50.0).abs() < 0.01);

        let m40 = Temperature::from_str("M40").unwrap();
        let f = m40.to_unit(TemperatureUnit::Fahrenheit).unwrap();
        assert!((f + 40.0).abs() < 0.01);
    }
}
