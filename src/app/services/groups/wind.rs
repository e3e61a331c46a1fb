//! Wind groups
//!
//! Two token shapes: surface wind (optionally prefixed with a wind shear
//! height) such as `27005G12KT` or `WS020/27045KT`, and a variable wind
//! sector such as `240V300`. A surface wind and a following sector token
//! merge into one group.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::Group;
use crate::app::models::{Direction, DirectionStatus, Distance, ReportPart, Speed};

static WIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:WS(\d\d\d)/)?(\d\d0|VRB|///)(\d\d\d?|//)(?:G(\d\d\d?))?(KT|MPS|KMH)$")
        .unwrap()
});

static VARIABLE_SECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d\d0)V(\d\d0)$").unwrap());

/// Surface wind, wind shear or variable wind sector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WindGroup {
    direction: Direction,
    wind_speed: Speed,
    gust_speed: Speed,
    wind_shear_height: Distance,
    var_sector_begin: Direction,
    var_sector_end: Direction,
}

impl WindGroup {
    pub fn parse(token: &str, report_part: ReportPart) -> Option<Self> {
        if !matches!(report_part, ReportPart::Metar | ReportPart::Taf) {
            return None;
        }
        if let Some(caps) = WIND.captures(token) {
            let unit = Speed::unit_from_str(caps.get(5).map_or("", |m| m.as_str()))?;
            let mut group = Self::default();
            group.direction = Direction::from_degrees_str(caps.get(2).map_or("", |m| m.as_str()))?;
            group.wind_speed = Speed::from_str(caps.get(3).map_or("", |m| m.as_str()), unit)?;
            group.gust_speed = Speed::from_str(caps.get(4).map_or("", |m| m.as_str()), unit)?;
            if let Some(height) = caps.get(1) {
                group.wind_shear_height = Distance::from_height_str(height.as_str())?;
            }
            return Some(group);
        }
        if let Some(caps) = VARIABLE_SECTOR.captures(token) {
            let mut group = Self::default();
            group.var_sector_begin =
                Direction::from_degrees_str(caps.get(1).map_or("", |m| m.as_str()))?;
            group.var_sector_end =
                Direction::from_degrees_str(caps.get(2).map_or("", |m| m.as_str()))?;
            return Some(group);
        }
        None
    }

    /// Merge a surface wind with a following variable sector token
    pub fn combine(&self, next: &Group) -> Option<Group> {
        let Group::Wind(next) = next else {
            return None;
        };
        if !self.is_surface_wind_group() || !next.is_wind_sector_group() {
            return None;
        }
        let mut combined = *self;
        combined.var_sector_begin = next.var_sector_begin;
        combined.var_sector_end = next.var_sector_end;
        Some(Group::Wind(combined))
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wind_speed(&self) -> Speed {
        self.wind_speed
    }

    pub fn gust_speed(&self) -> Speed {
        self.gust_speed
    }

    pub fn wind_shear_height(&self) -> Distance {
        self.wind_shear_height
    }

    pub fn var_sector_begin(&self) -> Direction {
        self.var_sector_begin
    }

    pub fn var_sector_end(&self) -> Direction {
        self.var_sector_end
    }

    pub fn is_wind_shear(&self) -> bool {
        self.wind_shear_height.is_reported()
    }

    pub fn is_surface_wind(&self) -> bool {
        !self.is_wind_shear()
    }

    pub fn has_variable_sector(&self) -> bool {
        self.is_surface_wind()
            && self.var_sector_begin.status() == DirectionStatus::ValueDegrees
            && self.var_sector_end.status() == DirectionStatus::ValueDegrees
    }

    /// Calm wind: direction 0 degrees, zero speed, no gusts, no shear, no
    /// sector
    pub fn is_calm(&self) -> bool {
        self.direction.status() == DirectionStatus::ValueDegrees
            && self.direction.degrees() == Some(0)
            && self.wind_speed.value() == Some(0)
            && self.gust_speed.value().is_none()
            && !self.wind_shear_height.is_reported()
            && self.var_sector_begin.status() == DirectionStatus::Omitted
            && self.var_sector_end.status() == DirectionStatus::Omitted
    }

    pub fn is_valid(&self) -> bool {
        // A reported gust must exceed the wind speed and cannot be zero
        if self.wind_speed.value().unwrap_or(0) >= self.gust_speed.value().unwrap_or(u32::MAX) {
            return false;
        }
        if self.gust_speed.value() == Some(0) {
            return false;
        }
        // A reported wind shear height cannot be zero
        if self.wind_shear_height.integer() == Some(0) {
            return false;
        }
        self.direction.is_valid()
            && self.wind_shear_height.is_valid()
            && self.var_sector_begin.is_valid()
            && self.var_sector_end.is_valid()
    }

    /// Surface wind with no shear height and no sector yet
    fn is_surface_wind_group(&self) -> bool {
        self.direction.status() != DirectionStatus::Omitted
            && !self.wind_shear_height.is_reported()
            && self.var_sector_begin.status() == DirectionStatus::Omitted
            && self.var_sector_end.status() == DirectionStatus::Omitted
    }

    /// A bare variable sector token: only the sector directions set
    fn is_wind_sector_group(&self) -> bool {
        self.direction.status() == DirectionStatus::Omitted
            && self.wind_speed.value().is_none()
            && self.gust_speed.value().is_none()
            && !self.wind_shear_height.is_reported()
            && self.var_sector_begin.status() == DirectionStatus::ValueDegrees
            && self.var_sector_end.status() == DirectionStatus::ValueDegrees
    }
}
