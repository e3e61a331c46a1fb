//! Day/hour/minute times
//!
//! Report times carry no month or year: a report time is a day-of-month with
//! an hour and minute, and trend times may omit the day entirely. Hour 24 is
//! legal and denotes midnight at the end of the day.

use serde::Serialize;

use crate::constants::{MAX_DAY, MAX_HOUR, MAX_MINUTE};

use super::scan;

/// A time of day with an optional day-of-month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTime {
    day: Option<u32>,
    hour: u32,
    minute: u32,
}

impl DayTime {
    /// Parse a six-digit `DDHHMM` time, or a four-digit `HHMM` time with no
    /// day
    pub fn from_ddhhmm(s: &str) -> Option<Self> {
        match s.len() {
            4 => {
                let hour = scan::digits(s, 0, 2)?;
                let minute = scan::digits(s, 2, 2)?;
                Some(Self {
                    day: None,
                    hour,
                    minute,
                })
            }
            6 => {
                let day = scan::digits(s, 0, 2)?;
                let hour = scan::digits(s, 2, 2)?;
                let minute = scan::digits(s, 4, 2)?;
                Some(Self {
                    day: Some(day),
                    hour,
                    minute,
                })
            }
            _ => None,
        }
    }

    /// Parse a four-digit `DDHH` time span boundary (no minute)
    pub fn from_ddhh(s: &str) -> Option<Self> {
        if s.len() != 4 {
            return None;
        }
        let day = scan::digits(s, 0, 2)?;
        let hour = scan::digits(s, 2, 2)?;
        Some(Self {
            day: Some(day),
            hour,
            minute: 0,
        })
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Day must be 1..=31 when present; hour may be 0..=24, minute 0..=59
    pub fn is_valid(&self) -> bool {
        if let Some(day) = self.day {
            if day == 0 || day > MAX_DAY {
                return false;
            }
        }
        self.hour <= MAX_HOUR && self.minute <= MAX_MINUTE
    }
}
