//! Runway surface friction
//!
//! The two-digit friction field of a runway state group encodes either a
//! friction coefficient in hundredths (00..90) or a braking action code
//! (91..95) per Table 0366 in Manual on Codes (WMO No. 306). Codes 96..98
//! are reserved, 99 marks the measurement as unreliable and `//` means not
//! reported.

use serde::Serialize;

use crate::constants::{braking_action, FRICTION_COEFFICIENT_DECIMAL_SHIFT};

use super::scan;

/// How the friction field was reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SurfaceFrictionStatus {
    #[default]
    NotReported,
    CoefficientReported,
    BrakingActionReported,
    /// Value unreliable or unmeasurable
    Unreliable,
}

/// Braking action buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrakingAction {
    /// Not reported or unreliable
    None,
    /// Friction coefficient below 0.26
    Poor,
    /// Friction coefficient 0.26 to 0.29
    MediumPoor,
    /// Friction coefficient 0.30 to 0.35
    Medium,
    /// Friction coefficient 0.36 to 0.39
    MediumGood,
    /// Friction coefficient above 0.39
    Good,
}

/// A surface friction value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SurfaceFriction {
    status: SurfaceFrictionStatus,
    // 0..=90, hundredths of the friction coefficient
    coefficient: u32,
}

impl SurfaceFriction {
    /// Parse the two-digit friction field; `//` is not reported
    pub fn from_str(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        if s == "//" {
            return Some(Self::default());
        }
        let code = scan::digits(s, 0, 2)?;
        let (status, coefficient) = match code {
            braking_action::POOR => (
                SurfaceFrictionStatus::BrakingActionReported,
                braking_action::POOR_LOW_LIMIT,
            ),
            braking_action::MEDIUM_POOR => (
                SurfaceFrictionStatus::BrakingActionReported,
                braking_action::MEDIUM_POOR_LOW_LIMIT,
            ),
            braking_action::MEDIUM => (
                SurfaceFrictionStatus::BrakingActionReported,
                braking_action::MEDIUM_LOW_LIMIT,
            ),
            braking_action::MEDIUM_GOOD => (
                SurfaceFrictionStatus::BrakingActionReported,
                braking_action::MEDIUM_GOOD_LOW_LIMIT,
            ),
            braking_action::GOOD => (
                SurfaceFrictionStatus::BrakingActionReported,
                braking_action::GOOD_LOW_LIMIT,
            ),
            braking_action::RESERVED_96
            | braking_action::RESERVED_97
            | braking_action::RESERVED_98 => return None,
            braking_action::UNRELIABLE => (SurfaceFrictionStatus::Unreliable, 0),
            _ => (SurfaceFrictionStatus::CoefficientReported, code),
        };
        Some(Self {
            status,
            coefficient,
        })
    }

    pub fn status(&self) -> SurfaceFrictionStatus {
        self.status
    }

    /// The friction coefficient; absent when not reported or unreliable
    pub fn coefficient(&self) -> Option<f64> {
        match self.status {
            SurfaceFrictionStatus::NotReported | SurfaceFrictionStatus::Unreliable => None,
            _ => Some(f64::from(self.coefficient) * FRICTION_COEFFICIENT_DECIMAL_SHIFT),
        }
    }

    /// The braking action bucket this friction value falls into
    pub fn braking_action(&self) -> BrakingAction {
        match self.status {
            SurfaceFrictionStatus::NotReported | SurfaceFrictionStatus::Unreliable => {
                return BrakingAction::None
            }
            _ => {}
        }
        if self.coefficient < braking_action::MEDIUM_POOR_LOW_LIMIT {
            BrakingAction::Poor
        } else if self.coefficient < braking_action::MEDIUM_LOW_LIMIT {
            BrakingAction::MediumPoor
        } else if self.coefficient < braking_action::MEDIUM_GOOD_LOW_LIMIT {
            BrakingAction::Medium
        } else if self.coefficient < braking_action::GOOD_LOW_LIMIT {
            BrakingAction::MediumGood
        } else {
            BrakingAction::Good
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficient_codes() {
        let sf = SurfaceFriction::from_str("55").unwrap();
        assert_eq!(sf.status(), SurfaceFrictionStatus::CoefficientReported);
        assert!((sf.coefficient().unwrap() - 0.55).abs() < 0.001);
        assert_eq!(sf.braking_action(), BrakingAction::Good);
    }

    #[test]
    fn test_braking_action_codes() {
        let cases = [
            ("91", BrakingAction::Poor, 0.00),
            ("92", BrakingAction::MediumPoor, 0.26),
            ("93", BrakingAction::Medium, 0.30),
            ("94", BrakingAction::MediumGood, 0.36),
            ("95", BrakingAction::Good, 0.40),
        ];
        for (code, action, floor) in cases {
            let sf = SurfaceFriction::from_str(code).unwrap();
            assert_eq!(sf.status(), SurfaceFrictionStatus::BrakingActionReported);
            assert_eq!(sf.braking_action(), action);
            assert!((sf.coefficient().unwrap() - floor).abs() < 0.001);
        }
    }

    #[test]
    fn test_reserved_codes_rejected() {
        assert!(SurfaceFriction::from_str("96").is_none());
        assert!(SurfaceFriction::from_str("97").is_none());
        assert!(SurfaceFriction::from_str("98").is_none());
    }

    #[test]
    fn test_unreliable_code() {
        let sf = SurfaceFriction::from_str("99").unwrap();
        assert_eq!(sf.status(), SurfaceFrictionStatus::Unreliable);
        assert_eq!(sf.coefficient(), None);
        assert_eq!(sf.braking_action(), BrakingAction::None);
    }

    #[test]
    fn test_not_reported() {
        let sf = SurfaceFriction::from_str("//").unwrap();
        assert_eq!(sf.status(), SurfaceFrictionStatus::NotReported);
        assert_eq!(sf.coefficient(), None);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(
            SurfaceFriction::from_str("25").unwrap().braking_action(),
            BrakingAction::Poor
        );
        assert_eq!(
            SurfaceFriction::from_str("26").unwrap().braking_action(),
            BrakingAction::MediumPoor
        );
        assert_eq!(
            SurfaceFriction::from_str("29").unwrap().braking_action(),
            BrakingAction::MediumPoor
        );
        assert_eq!(
            SurfaceFriction::from_str("30").unwrap().braking_action(),
            BrakingAction::Medium
        );
        assert_eq!(
            SurfaceFriction::from_str("36").unwrap().braking_action(),
            BrakingAction::MediumGood
        );
        assert_eq!(
            SurfaceFriction::from_str("40").unwrap().braking_action(),
            BrakingAction::Good
        );
    }
}
