//! Tests for wind group parsing and the variable sector combiner

use crate::app::models::{DirectionStatus, DistanceUnit, ReportPart, SpeedUnit};
use crate::app::services::groups::{Group, WindGroup};

#[test]
fn test_surface_wind() {
    let wind = WindGroup::parse("27005MPS", ReportPart::Metar).unwrap();
    assert_eq!(wind.direction().degrees(), Some(270));
    assert_eq!(wind.wind_speed().value(), Some(5));
    assert_eq!(wind.wind_speed().unit(), SpeedUnit::MetersPerSecond);
    assert!(wind.is_surface_wind());
    assert!(!wind.is_wind_shear());
    assert!(!wind.is_calm());
    assert!(wind.is_valid());
}

#[test]
fn test_calm_wind() {
    let wind = WindGroup::parse("00000KT", ReportPart::Metar).unwrap();
    assert!(wind.is_calm());
    assert!(wind.is_valid());
}

#[test]
fn test_variable_direction() {
    let wind = WindGroup::parse("VRB02KT", ReportPart::Metar).unwrap();
    assert_eq!(wind.direction().status(), DirectionStatus::Variable);
    assert_eq!(wind.wind_speed().value(), Some(2));
    assert!(!wind.is_calm());
}

#[test]
fn test_not_reported_wind() {
    let wind = WindGroup::parse("/////KT", ReportPart::Metar).unwrap();
    assert_eq!(wind.direction().status(), DirectionStatus::NotReported);
    assert_eq!(wind.wind_speed().value(), None);
}

#[test]
fn test_gusts() {
    let wind = WindGroup::parse("27005G12KT", ReportPart::Metar).unwrap();
    assert_eq!(wind.gust_speed().value(), Some(12));
    assert!(wind.is_valid());

    // Wind speed at or above the gust speed is implausible
    let wind = WindGroup::parse("27015G10KT", ReportPart::Metar).unwrap();
    assert!(!wind.is_valid());

    // A zero gust is implausible
    let wind = WindGroup::parse("27005G00KT", ReportPart::Metar).unwrap();
    assert!(!wind.is_valid());
}

#[test]
fn test_wind_shear_prefix() {
    let wind = WindGroup::parse("WS020/27045KT", ReportPart::Metar).unwrap();
    assert!(wind.is_wind_shear());
    assert_eq!(wind.wind_shear_height().integer(), Some(2000));
    assert_eq!(wind.wind_shear_height().unit(), DistanceUnit::Feet);
    assert!(wind.is_valid());

    // A zero shear height is implausible
    let wind = WindGroup::parse("WS000/27045KT", ReportPart::Metar).unwrap();
    assert!(!wind.is_valid());
}

#[test]
fn test_variable_sector_token() {
    let sector = WindGroup::parse("240V300", ReportPart::Metar).unwrap();
    assert_eq!(sector.var_sector_begin().degrees(), Some(240));
    assert_eq!(sector.var_sector_end().degrees(), Some(300));
    assert!(!sector.has_variable_sector()); // direction itself is omitted
}

#[test]
fn test_surface_wind_combines_with_sector() {
    let wind = WindGroup::parse("27005KT", ReportPart::Metar).unwrap();
    let sector = WindGroup::parse("240V300", ReportPart::Metar).unwrap();
    let combined = wind.combine(&Group::Wind(sector)).unwrap();
    let Group::Wind(combined) = combined else {
        panic!("expected wind group");
    };
    assert!(combined.has_variable_sector());
    assert_eq!(combined.var_sector_begin().degrees(), Some(240));
    assert_eq!(combined.wind_speed().value(), Some(5));
    assert!(combined.is_valid());
}

#[test]
fn test_sector_does_not_combine_twice() {
    let wind = WindGroup::parse("27005KT", ReportPart::Metar).unwrap();
    let sector = WindGroup::parse("240V300", ReportPart::Metar).unwrap();
    let Some(Group::Wind(combined)) = wind.combine(&Group::Wind(sector)) else {
        panic!("expected combined wind group");
    };
    let second_sector = WindGroup::parse("220V320", ReportPart::Metar).unwrap();
    assert!(combined.combine(&Group::Wind(second_sector)).is_none());
}

#[test]
fn test_wind_shear_does_not_take_sector() {
    let shear = WindGroup::parse("WS020/27045KT", ReportPart::Metar).unwrap();
    let sector = WindGroup::parse("240V300", ReportPart::Metar).unwrap();
    assert!(shear.combine(&Group::Wind(sector)).is_none());
}

#[test]
fn test_wind_requires_report_body() {
    assert!(WindGroup::parse("27005KT", ReportPart::Header).is_none());
    assert!(WindGroup::parse("27005KT", ReportPart::Remarks).is_none());
    assert!(WindGroup::parse("27005KT", ReportPart::Taf).is_some());
}

#[test]
fn test_rejects_malformed() {
    // Direction must be a multiple of ten
    assert!(WindGroup::parse("27505KT", ReportPart::Metar).is_none());
    // Unknown unit
    assert!(WindGroup::parse("27005MPH", ReportPart::Metar).is_none());
    // Three-digit speed with a leading zero
    assert!(WindGroup::parse("270015KT", ReportPart::Metar).is_none());
}
