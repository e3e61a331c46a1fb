//! Sea wave heights and state of surface
//!
//! Sea surface groups describe the waves either descriptively, as a single
//! state-of-surface digit per Table 3700 in Manual on Codes (WMO No. 306),
//! or as an explicit wave height in decimetres. The descriptive digit maps
//! to the maximum wave height of its band, so both encodings share one
//! numeric representation.

use serde::Serialize;

use crate::constants::{state_of_surface, METERS_PER_FOOT, WAVE_HEIGHT_DECIMAL_SHIFT};

use super::scan;

/// Which encoding the group used
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WaveHeightType {
    #[default]
    StateOfSurface,
    WaveHeight,
}

/// Units a wave height can be expressed in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WaveHeightUnit {
    #[default]
    Meters,
    Feet,
}

/// Descriptive state of the sea surface, see Table 3700
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StateOfSurface {
    NotReported,
    CalmGlassy,
    CalmRippled,
    Smooth,
    Slight,
    Moderate,
    Rough,
    VeryRough,
    High,
    VeryHigh,
    Phenomenal,
}

/// A wave height in decimetres, possibly not reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WaveHeight {
    kind: WaveHeightType,
    decimeters: Option<u32>,
}

impl WaveHeight {
    /// Parse `Sd` (state-of-surface digit), `Hd`/`Hdd`/`Hddd` (explicit
    /// decimetres), or the not-reported placeholders `S/` and `H///`
    pub fn from_str(s: &str) -> Option<Self> {
        if s.len() < 2 || s.len() > 4 {
            return None;
        }
        if s == "H///" {
            return Some(Self {
                kind: WaveHeightType::WaveHeight,
                decimeters: None,
            });
        }
        if s == "S/" {
            return Some(Self {
                kind: WaveHeightType::StateOfSurface,
                decimeters: None,
            });
        }
        match s.as_bytes()[0] {
            b'S' => {
                if s.len() != 2 {
                    return None;
                }
                let decimeters = Self::height_from_state_char(s.as_bytes()[1] as char)?;
                Some(Self {
                    kind: WaveHeightType::StateOfSurface,
                    decimeters: Some(decimeters),
                })
            }
            b'H' => {
                let decimeters = scan::digits(s, 1, s.len() - 1)?;
                Some(Self {
                    kind: WaveHeightType::WaveHeight,
                    decimeters: Some(decimeters),
                })
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> WaveHeightType {
        self.kind
    }

    pub fn is_reported(&self) -> bool {
        self.decimeters.is_some()
    }

    /// Wave height in metres
    pub fn wave_height(&self) -> Option<f64> {
        Some(f64::from(self.decimeters?) * WAVE_HEIGHT_DECIMAL_SHIFT)
    }

    /// The descriptive band the stored height falls into
    pub fn state_of_surface(&self) -> StateOfSurface {
        let Some(dm) = self.decimeters else {
            return StateOfSurface::NotReported;
        };
        if dm == 0 {
            StateOfSurface::CalmGlassy
        } else if dm <= state_of_surface::MAX_CALM_RIPPLED {
            StateOfSurface::CalmRippled
        } else if dm <= state_of_surface::MAX_SMOOTH {
            StateOfSurface::Smooth
        } else if dm <= state_of_surface::MAX_SLIGHT {
            StateOfSurface::Slight
        } else if dm <= state_of_surface::MAX_MODERATE {
            StateOfSurface::Moderate
        } else if dm <= state_of_surface::MAX_ROUGH {
            StateOfSurface::Rough
        } else if dm <= state_of_surface::MAX_VERY_ROUGH {
            StateOfSurface::VeryRough
        } else if dm <= state_of_surface::MAX_HIGH {
            StateOfSurface::High
        } else if dm <= state_of_surface::MAX_VERY_HIGH {
            StateOfSurface::VeryHigh
        } else {
            StateOfSurface::Phenomenal
        }
    }

    /// Convert the wave height to the requested unit
    pub fn to_unit(&self, unit: WaveHeightUnit) -> Option<f64> {
        let meters = self.wave_height()?;
        match unit {
            WaveHeightUnit::Meters => Some(meters),
            WaveHeightUnit::Feet => Some(meters / METERS_PER_FOOT),
        }
    }

    fn height_from_state_char(c: char) -> Option<u32> {
        match c {
            '0' => Some(state_of_surface::MAX_CALM_GLASSY),
            '1' => Some(state_of_surface::MAX_CALM_RIPPLED),
            '2' => Some(state_of_surface::MAX_SMOOTH),
            '3' => Some(state_of_surface::MAX_SLIGHT),
            '4' => Some(state_of_surface::MAX_MODERATE),
            '5' => Some(state_of_surface::MAX_ROUGH),
            '6' => Some(state_of_surface::MAX_VERY_ROUGH),
            '7' => Some(state_of_surface::MAX_HIGH),
            '8' => Some(state_of_surface::MAX_VERY_HIGH),
            '9' => Some(state_of_surface::MIN_PHENOMENAL),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wave_height() {
        let wh = WaveHeight::from_str("H25").unwrap();
        assert_eq!(wh.kind(), WaveHeightType::WaveHeight);
        assert!((wh.wave_height().unwrap() - 2.5).abs() < 0.001);
        assert_eq!(wh.state_of_surface(), StateOfSurface::Moderate);
    }

    #[test]
    fn test_state_of_surface_digit() {
        let wh = WaveHeight::from_str("S4").unwrap();
        assert_eq!(wh.kind(), WaveHeightType::StateOfSurface);
        assert_eq!(wh.state_of_surface(), StateOfSurface::Moderate);
        assert!((wh.wave_height().unwrap() - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_state_band_boundaries() {
        assert_eq!(
            WaveHeight::from_str("H0").unwrap().state_of_surface(),
            StateOfSurface::CalmGlassy
        );
        assert_eq!(
            WaveHeight::from_str("H1").unwrap().state_of_surface(),
            StateOfSurface::CalmRippled
        );
        assert_eq!(
            WaveHeight::from_str("H5").unwrap().state_of_surface(),
            StateOfSurface::Smooth
        );
        assert_eq!(
            WaveHeight::from_str("H6").unwrap().state_of_surface(),
            StateOfSurface::Slight
        );
        assert_eq!(
            WaveHeight::from_str("H141").unwrap().state_of_surface(),
            StateOfSurface::Phenomenal
        );
    }

    #[test]
    fn test_not_reported_forms() {
        let wh = WaveHeight::from_str("H///").unwrap();
        assert!(!wh.is_reported());
        assert_eq!(wh.state_of_surface(), StateOfSurface::NotReported);
        let wh = WaveHeight::from_str("S/").unwrap();
        assert!(!wh.is_reported());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(WaveHeight::from_str("S25").is_none());
        assert!(WaveHeight::from_str("SX").is_none());
        assert!(WaveHeight::from_str("X25").is_none());
        assert!(WaveHeight::from_str("H").is_none());
        assert!(WaveHeight::from_str("H1234").is_none());
    }

    #[test]
    fn test_feet_conversion() {
        let wh = WaveHeight::from_str("H30").unwrap();
        assert!((wh.to_unit(WaveHeightUnit::Feet).unwrap() - 9.8425).abs() < 0.01);
    }
}
