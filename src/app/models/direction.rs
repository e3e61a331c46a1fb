//! Directions in degrees or as cardinal sectors
//!
//! Wind and visibility directions come either as a three-digit degree value
//! (always a multiple of ten) or as a cardinal such as `NW`. A direction also
//! tracks whether it was omitted, explicitly not reported (`///`), variable
//! (`VRB`) or "no directional variation" (`NDV`).

use serde::Serialize;

use crate::constants::{
    CARDINAL_SECTOR_SIZE, DEGREES_NORTH_EAST, DEGREES_NORTH_WEST, DEGREES_SOUTH_EAST,
    DEGREES_SOUTH_WEST, DEGREES_TRUE_EAST, DEGREES_TRUE_NORTH, DEGREES_TRUE_SOUTH,
    DEGREES_TRUE_WEST, MAX_DEGREES,
};

use super::scan;

/// How a direction was reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DirectionStatus {
    /// Not specified at all
    #[default]
    Omitted,
    /// Specified as `///`
    NotReported,
    /// Specified as `VRB`
    Variable,
    /// Specified as no directional variation
    Ndv,
    /// A value in degrees
    ValueDegrees,
    /// A cardinal direction token
    ValueCardinal,
}

/// Cardinal direction sectors, including the exact "true" directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cardinal {
    /// Not reported or no corresponding sector
    None,
    /// No directional variation
    Ndv,
    N,
    S,
    W,
    E,
    Nw,
    Ne,
    Sw,
    Se,
    TrueN,
    TrueW,
    TrueS,
    TrueE,
}

/// A direction value with its reporting status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Direction {
    degrees: u32,
    status: DirectionStatus,
}

impl Direction {
    /// Parse a cardinal direction token; the empty string is an omitted
    /// direction and `NDV` is recognized specially
    pub fn from_cardinal_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(Self::default());
        }
        if s == "NDV" {
            return Some(Self {
                degrees: 0,
                status: DirectionStatus::Ndv,
            });
        }
        let degrees = match s {
            "N" => DEGREES_TRUE_NORTH,
            "W" => DEGREES_TRUE_WEST,
            "S" => DEGREES_TRUE_SOUTH,
            "E" => DEGREES_TRUE_EAST,
            "NW" => DEGREES_NORTH_WEST,
            "NE" => DEGREES_NORTH_EAST,
            "SW" => DEGREES_SOUTH_WEST,
            "SE" => DEGREES_SOUTH_EAST,
            _ => return None,
        };
        Some(Self {
            degrees,
            status: DirectionStatus::ValueCardinal,
        })
    }

    /// Parse a three-digit degree value ending in zero, `///` or `VRB`; the
    /// empty string is an omitted direction
    pub fn from_degrees_str(s: &str) -> Option<Self> {
        if s.is_empty() {
            return Some(Self::default());
        }
        if s.len() != 3 {
            return None;
        }
        if s == "///" {
            return Some(Self {
                degrees: 0,
                status: DirectionStatus::NotReported,
            });
        }
        if s == "VRB" {
            return Some(Self {
                degrees: 0,
                status: DirectionStatus::Variable,
            });
        }
        if !s.ends_with('0') {
            return None;
        }
        let degrees = scan::digits(s, 0, 3)?;
        Some(Self {
            degrees,
            status: DirectionStatus::ValueDegrees,
        })
    }

    pub fn status(&self) -> DirectionStatus {
        self.status
    }

    /// The degree value, present only when a value was reported
    pub fn degrees(&self) -> Option<u32> {
        if !self.is_value() {
            return None;
        }
        Some(self.degrees)
    }

    pub fn is_value(&self) -> bool {
        matches!(
            self.status,
            DirectionStatus::ValueDegrees | DirectionStatus::ValueCardinal
        )
    }

    pub fn is_valid(&self) -> bool {
        if self.is_value() && self.degrees > MAX_DEGREES {
            return false;
        }
        true
    }

    /// The cardinal sector for this direction
    ///
    /// Sectors are 45 degrees wide and centred on the principal directions,
    /// so N covers 338..360 and 0..22. With `true_directions` set, the exact
    /// values 360, 90, 180 and 270 report as true cardinals instead.
    pub fn cardinal(&self, true_directions: bool) -> Cardinal {
        match self.status {
            DirectionStatus::Omitted
            | DirectionStatus::NotReported
            | DirectionStatus::Variable => return Cardinal::None,
            DirectionStatus::Ndv => return Cardinal::Ndv,
            _ => {}
        }
        if true_directions {
            match self.degrees {
                DEGREES_TRUE_NORTH => return Cardinal::TrueN,
                DEGREES_TRUE_SOUTH => return Cardinal::TrueS,
                DEGREES_TRUE_WEST => return Cardinal::TrueW,
                DEGREES_TRUE_EAST => return Cardinal::TrueE,
                _ => {}
            }
        }
        let half_sector = CARDINAL_SECTOR_SIZE / 2;
        let d = self.degrees;
        if d <= half_sector {
            Cardinal::N
        } else if d <= DEGREES_NORTH_EAST + half_sector {
            Cardinal::Ne
        } else if d <= DEGREES_TRUE_EAST + half_sector {
            Cardinal::E
        } else if d <= DEGREES_SOUTH_EAST + half_sector {
            Cardinal::Se
        } else if d <= DEGREES_TRUE_SOUTH + half_sector {
            Cardinal::S
        } else if d <= DEGREES_SOUTH_WEST + half_sector {
            Cardinal::Sw
        } else if d <= DEGREES_TRUE_WEST + half_sector {
            Cardinal::W
        } else if d <= DEGREES_NORTH_WEST + half_sector {
            Cardinal::Nw
        } else if d <= MAX_DEGREES {
            Cardinal::N
        } else {
            Cardinal::None
        }
    }
}
