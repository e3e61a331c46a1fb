//! Visibility groups
//!
//! Visibility comes meter-coded (`4000`, optionally with a cardinal
//! direction suffix), in statute miles (`10SM`, `1/2SM`, `P6SM`), or as a
//! bare integer digit awaiting a fraction token. The combiner joins the
//! bare integer with a following fraction into one value such as
//! "1 3/4 SM".

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::Group;
use crate::app::models::{Direction, DirectionStatus, Distance, DistanceUnit, ReportPart};

static METER_VISIBILITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d\d\d\d|////)([NSWE][WED]?V?)?$").unwrap());

/// Prevailing or directional visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityGroup {
    visibility: Distance,
    direction: Direction,
    incomplete_integer: bool,
}

impl VisibilityGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if !matches!(report_part, ReportPart::Metar | ReportPart::Taf) {
            return None;
        }
        // A standalone digit is the integer part of a mile visibility,
        // waiting for its fraction
        if token.len() == 1 && token.as_bytes()[0].is_ascii_digit() {
            let value = u32::from(token.as_bytes()[0] - b'0');
            return Some(Self {
                visibility: Distance::from_value(value, DistanceUnit::StatuteMiles),
                direction: Direction::default(),
                incomplete_integer: true,
            });
        }
        if let Some(caps) = METER_VISIBILITY.captures(token) {
            let visibility = Distance::from_meter_str(caps.get(1).map_or("", |m| m.as_str()))?;
            let direction = Direction::from_cardinal_str(caps.get(2).map_or("", |m| m.as_str()))?;
            return Some(Self {
                visibility,
                direction,
                incomplete_integer: false,
            });
        }
        let visibility = Distance::from_mile_str(token)?;
        Some(Self {
            visibility,
            direction: Direction::default(),
            incomplete_integer: false,
        })
    }

    /// Merge an incomplete integer with a following fraction token
    pub fn combine(&self, next: &Group) -> Option<Group> {
        let Group::Visibility(next) = next else {
            return None;
        };
        if self.visibility.unit() != DistanceUnit::StatuteMiles
            || next.visibility.unit() != DistanceUnit::StatuteMiles
        {
            return None;
        }
        if self.incomplete_integer && next.visibility.is_fraction() {
            let merged = Distance::from_integer_and_fraction(&self.visibility, &next.visibility)?;
            let mut combined = *self;
            combined.visibility = merged;
            combined.incomplete_integer = false;
            return Some(Group::Visibility(combined));
        }
        None
    }

    pub fn visibility(&self) -> Distance {
        self.visibility
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Prevailing visibility has no direction (or explicitly no directional
    /// variation)
    pub fn is_prevailing(&self) -> bool {
        matches!(
            self.direction.status(),
            DirectionStatus::Omitted | DirectionStatus::Ndv
        )
    }

    pub fn is_directional(&self) -> bool {
        !self.is_prevailing()
    }

    pub fn is_valid(&self) -> bool {
        !self.incomplete_integer && self.visibility.is_valid() && self.direction.is_valid()
    }
}
