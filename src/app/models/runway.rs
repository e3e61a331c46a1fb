//! Runway identifiers
//!
//! Runways are designated by a two-digit heading number (01..36) with an
//! optional L/C/R suffix distinguishing parallel runways. Two sentinel
//! numbers appear in runway state groups: 88 means "all runways" and 99
//! means "repetition of the last message".

use serde::Serialize;

use crate::constants::{MAX_RUNWAY_NUMBER, RUNWAY_ALL, RUNWAY_MESSAGE_REPETITION};

use super::scan;

/// Suffix distinguishing parallel runways
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum RunwayDesignator {
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// A runway identifier parsed from `R(WY)?NN[LCR]?`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Runway {
    number: u32,
    designator: RunwayDesignator,
}

impl Runway {
    /// Parse a runway designation such as `R22`, `R06R` or (when
    /// `allow_rwy_prefix` is set) `RWY22`
    ///
    /// The longer `RWY` prefix only appears in wind shear groups, so it is
    /// rejected unless explicitly enabled.
    pub fn from_str(s: &str, allow_rwy_prefix: bool) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() < 3 || bytes[0] != b'R' {
            return None;
        }
        let mut num_pos = 1;
        if allow_rwy_prefix && bytes.len() > 3 && bytes[1] == b'W' && bytes[2] == b'Y' {
            num_pos += 2;
        }
        let number = scan::digits(s, num_pos, 2)?;
        let dsg_pos = num_pos + 2;
        if bytes.len() > dsg_pos + 1 {
            return None;
        }
        let designator = match bytes.get(dsg_pos) {
            None => RunwayDesignator::None,
            Some(c) => Self::designator_from_char(*c as char)?,
        };
        Some(Self { number, designator })
    }

    /// The "all runways" sentinel used by wind shear groups
    pub fn all_runways() -> Self {
        Self {
            number: RUNWAY_ALL,
            designator: RunwayDesignator::None,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn designator(&self) -> RunwayDesignator {
        self.designator
    }

    /// A runway is valid if its number is a heading (00..36) or one of the
    /// sentinels 88/99 without a parallel-runway designator
    pub fn is_valid(&self) -> bool {
        self.number <= MAX_RUNWAY_NUMBER
            || (self.number == RUNWAY_ALL && self.designator == RunwayDesignator::None)
            || (self.number == RUNWAY_MESSAGE_REPETITION
                && self.designator == RunwayDesignator::None)
    }

    pub fn is_all_runways(&self) -> bool {
        self.number == RUNWAY_ALL && self.designator == RunwayDesignator::None
    }

    pub fn is_message_repetition(&self) -> bool {
        self.number == RUNWAY_MESSAGE_REPETITION && self.designator == RunwayDesignator::None
    }

    fn designator_from_char(c: char) -> Option<RunwayDesignator> {
        match c {
            'L' => Some(RunwayDesignator::Left),
            'C' => Some(RunwayDesignator::Center),
            'R' => Some(RunwayDesignator::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_runway() {
        let runway = Runway::from_str("R22", false).unwrap();
        assert_eq!(runway.number(), 22);
        assert_eq!(runway.designator(), RunwayDesignator::None);
        assert!(runway.is_valid());
    }

    #[test]
    fn test_runway_designators() {
        assert_eq!(
            Runway::from_str("R06L", false).unwrap().designator(),
            RunwayDesignator::Left
        );
        assert_eq!(
            Runway::from_str("R06C", false).unwrap().designator(),
            RunwayDesignator::Center
        );
        assert_eq!(
            Runway::from_str("R06R", false).unwrap().designator(),
            RunwayDesignator::Right
        );
        assert!(Runway::from_str("R06X", false).is_none());
    }

    #[test]
    fn test_rwy_prefix_gated() {
        assert!(Runway::from_str("RWY22", false).is_none());
        let runway = Runway::from_str("RWY22", true).unwrap();
        assert_eq!(runway.number(), 22);
        assert!(Runway::from_str("RWY22L", true).is_some());
    }

    #[test]
    fn test_sentinels() {
        let all = Runway::from_str("R88", false).unwrap();
        assert!(all.is_all_runways());
        assert!(all.is_valid());
        let repeat = Runway::from_str("R99", false).unwrap();
        assert!(repeat.is_message_repetition());
        assert!(repeat.is_valid());
        // Sentinels cannot carry a designator
        assert!(!Runway::from_str("R88R", false).unwrap().is_valid());
    }

    #[test]
    fn test_out_of_range_number_is_invalid() {
        let runway = Runway::from_str("R40", false).unwrap();
        assert!(!runway.is_valid());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Runway::from_str("22", false).is_none());
        assert!(Runway::from_str("R2", false).is_none());
        assert!(Runway::from_str("R221L", false).is_none());
        assert!(Runway::from_str("RXX", false).is_none());
    }

    #[test]
    fn test_all_runways_constructor() {
        let runway = Runway::all_runways();
        assert!(runway.is_all_runways());
        assert!(runway.is_valid());
    }
}
