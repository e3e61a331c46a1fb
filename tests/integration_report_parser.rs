//! Integration tests for the report parser public API
//!
//! Exercises full reports end to end through the crate root exports:
//! tokenization, context-sensitive group recognition, multi-token group
//! assembly and the report structure checks.

use avwx_parser::app::models::{
    DistanceUnit, PressureUnit, SpeedUnit, TemperatureUnit,
};
use avwx_parser::app::services::groups::{
    CloudAmount, FixedGroupType, PrecipitationGroupType, TrendProbability, TrendType,
    WeatherPhenomenon, WeatherQualifier,
};
use avwx_parser::{Group, ReportError, ReportParser, ReportPart, ReportType};

#[test]
fn parses_a_typical_european_metar() {
    let result = ReportParser::extended_parse(
        "METAR UKLL 181830Z 27005MPS 240V300 4000 -RA BKN020 10/08 Q1013 NOSIG=",
    );
    assert_eq!(result.report_type, ReportType::Metar);
    assert_eq!(result.error, None);
    // Wind and sector merged: eleven tokens, ten groups
    assert_eq!(result.groups.len(), 10);

    let Group::Wind(wind) = &result.groups[3].group else {
        panic!("expected wind group");
    };
    assert!(wind.has_variable_sector());
    assert_eq!(result.groups[3].source, "27005MPS 240V300");

    let Group::Visibility(visibility) = &result.groups[4].group else {
        panic!("expected visibility group");
    };
    assert_eq!(
        visibility.visibility().to_unit(DistanceUnit::Meters),
        Some(4000.0)
    );

    let Group::Weather(weather) = &result.groups[5].group else {
        panic!("expected weather group");
    };
    assert_eq!(weather.qualifier(), WeatherQualifier::Light);
    assert_eq!(weather.phenomena(), &[WeatherPhenomenon::Rain]);

    let Group::Cloud(cloud) = &result.groups[6].group else {
        panic!("expected cloud group");
    };
    assert_eq!(cloud.amount(), CloudAmount::Broken);

    let Group::Trend(trend) = &result.groups[9].group else {
        panic!("expected trend group");
    };
    assert_eq!(trend.trend_type(), TrendType::Nosig);
}

#[test]
fn parses_a_typical_us_metar_with_remarks() {
    let result = ReportParser::parse(
        "KJFK 181851Z 28016G24KT 10SM FEW055 SCT250 22/12 A3002 RMK AO2 SLP166 T02220117=",
    );
    assert_eq!(result.report_type, ReportType::Metar);
    assert_eq!(result.error, None);

    let Group::Wind(wind) = &result.groups[2] else {
        panic!("expected wind group");
    };
    assert_eq!(wind.wind_speed().unit(), SpeedUnit::Knots);
    assert_eq!(wind.gust_speed().value(), Some(24));

    let Group::Pressure(pressure) = &result.groups[7] else {
        panic!("expected pressure group");
    };
    let hpa = pressure.pressure().to_unit(PressureUnit::Hectopascal).unwrap();
    assert!((hpa - 1016.6).abs() < 1.0);

    // SLP166 in the remarks decodes to 1016.6 hPa
    let Group::Pressure(slp) = &result.groups[10] else {
        panic!("expected sea level pressure group, got {:?}", result.groups[10]);
    };
    assert!((slp.pressure().value().unwrap() - 1016.6).abs() < 0.01);
}

#[test]
fn parses_a_full_taf() {
    let result = ReportParser::extended_parse(
        "TAF AMD KJFK 181120Z 1812/1912 28012KT P6SM SCT050 \
         TEMPO 1812/1814 BKN050 \
         FM181800 30015G25KT P6SM BKN040 \
         PROB30 1900/1904 3SM -SHRA BKN025 \
         TXM02/1815Z TN10/1910Z QNH2979INS=",
    );
    assert_eq!(result.report_type, ReportType::Taf);
    assert_eq!(result.error, None);

    // TEMPO 1812/1814 folds into one group
    let tempo = result
        .groups
        .iter()
        .find(|info| info.source == "TEMPO 1812/1814")
        .expect("combined TEMPO trend");
    let Group::Trend(trend) = &tempo.group else {
        panic!("expected trend group");
    };
    assert_eq!(trend.trend_type(), TrendType::Tempo);

    // PROB30 1900/1904 folds into a probability-qualified time span
    let prob = result
        .groups
        .iter()
        .find(|info| info.source == "PROB30 1900/1904")
        .expect("combined PROB30 span");
    let Group::Trend(trend) = &prob.group else {
        panic!("expected trend group");
    };
    assert_eq!(trend.trend_type(), TrendType::TimeSpan);
    assert_eq!(trend.probability(), TrendProbability::Prob30);

    // The transition group keeps its full time
    let from = result
        .groups
        .iter()
        .find(|info| info.source == "FM181800")
        .expect("FM transition");
    let Group::Trend(trend) = &from.group else {
        panic!("expected trend group");
    };
    assert_eq!(trend.trend_type(), TrendType::From);
    assert_eq!(trend.time_from().unwrap().hour(), 18);

    // Forecast temperature extremes parse in the TAF body
    assert!(result
        .groups
        .iter()
        .any(|info| matches!(info.group, Group::TemperatureForecast(_))));

    // Every group in this TAF is valid
    for info in &result.groups {
        assert!(info.group.is_valid(), "invalid group from {:?}", info.source);
    }
}

#[test]
fn parses_runway_and_sea_groups() {
    let result = ReportParser::parse(
        "METAR UKLL 181830Z 27005MPS R05/1100U R23/290155 W15/H25 RF02.7/010.5 BLACKAMB=",
    );
    assert_eq!(result.error, None);
    assert!(result
        .groups
        .iter()
        .any(|group| matches!(group, Group::RunwayVisualRange(_))));
    assert!(result
        .groups
        .iter()
        .any(|group| matches!(group, Group::RunwayState(_))));
    assert!(result
        .groups
        .iter()
        .any(|group| matches!(group, Group::SeaSurface(_))));
    assert!(result
        .groups
        .iter()
        .any(|group| matches!(group, Group::Rainfall(_))));
    assert!(result
        .groups
        .iter()
        .any(|group| matches!(group, Group::ColourCode(_))));
}

#[test]
fn hourly_precipitation_remark_decodes_in_hundredths_of_an_inch() {
    let result = ReportParser::parse("KJFK 181851Z 22/12 A3002 RMK P2168=");
    assert_eq!(result.error, None);
    let Some(Group::Precipitation(precipitation)) = result.groups.last() else {
        panic!("expected precipitation group last");
    };
    assert_eq!(
        precipitation.group_type(),
        PrecipitationGroupType::TotalPrecipitationHourly
    );
    let inches = precipitation.amount().amount().unwrap();
    assert!((inches - 21.68).abs() < 0.001);
}

#[test]
fn wind_shear_sequences_assemble_across_tokens() {
    let result = ReportParser::extended_parse("METAR UKLL 181830Z WS ALL RWY 27005MPS=");
    assert_eq!(result.error, None);
    let shear = result
        .groups
        .iter()
        .find(|info| info.source == "WS ALL RWY")
        .expect("combined wind shear group");
    let Group::WindShearLowLayer(group) = &shear.group else {
        panic!("expected wind shear group");
    };
    assert!(group.is_valid());
    assert!(group.runway().is_all_runways());
}

#[test]
fn nil_and_cancelled_reports() {
    let nil = ReportParser::parse("METAR UKLL 181830Z NIL=");
    assert_eq!(nil.error, None);
    assert_eq!(nil.report_type, ReportType::Metar);

    let cancelled = ReportParser::parse("TAF KJFK 181120Z 1812/1912 CNL=");
    assert_eq!(cancelled.error, None);
    assert_eq!(cancelled.report_type, ReportType::Taf);

    let trailing = ReportParser::parse("METAR UKLL 181830Z NIL 27005MPS=");
    assert_eq!(trailing.error, Some(ReportError::UnexpectedGroupAfterNil));
}

#[test]
fn ambiguous_headers_resolve_by_context() {
    // With no type marker, a location plus report time reads as a METAR
    let untyped = ReportParser::parse("UKLL 181830Z 27005MPS CAVOK=");
    assert_eq!(untyped.report_type, ReportType::Metar);
    assert_eq!(untyped.error, None);

    // The same header followed by two time spans reads as a TAF
    let taf = ReportParser::parse("KJFK 181120Z 1812/1912 CAVOK=");
    assert_eq!(taf.report_type, ReportType::Taf);
    assert_eq!(taf.error, None);
}

#[test]
fn group_counts_match_token_arithmetic() {
    // (input, number of combines)
    let cases = [
        ("METAR UKLL 181830Z 27005MPS CAVOK 10/08 Q1013=", 0),
        ("METAR UKLL 181830Z 27005KT 240V300 CAVOK=", 1),
        ("METAR KJFK 181830Z 1 3/4SM=", 1),
        ("METAR UKLL 181830Z WS ALL RWY=", 2),
        ("TAF KJFK 181120Z 1812/1912 PROB30 TEMPO 1818/1824 1/2SM=", 2),
    ];
    for (report, combines) in cases {
        let token_count = report.split_whitespace().count();
        let result = ReportParser::parse(report);
        assert_eq!(result.error, None, "report: {report}");
        assert_eq!(
            result.groups.len(),
            token_count - combines,
            "report: {report}"
        );
    }
}

#[test]
fn extended_parse_source_substrings_reassemble_the_report() {
    let report = "METAR UKLL 181830Z 27005KT 240V300 4000NE BKN020CB 10/08 Q1013";
    let result = ReportParser::extended_parse(report);
    assert_eq!(result.error, None);
    let reassembled: Vec<&str> = result
        .groups
        .iter()
        .map(|info| info.source.as_str())
        .collect();
    assert_eq!(reassembled.join(" "), report);
}

#[test]
fn report_parts_progress_monotonically() {
    let result = ReportParser::extended_parse(
        "KJFK 181851Z 28016KT 10SM FEW055 22/12 A3002 RMK AO2 SLP166=",
    );
    assert_eq!(result.error, None);
    let rank = |part: ReportPart| match part {
        ReportPart::Header => 0,
        ReportPart::Metar | ReportPart::Taf => 1,
        ReportPart::Remarks => 2,
        ReportPart::Unknown => 3,
    };
    for window in result.groups.windows(2) {
        assert!(rank(window[0].report_part) <= rank(window[1].report_part));
    }
}

#[test]
fn invalid_groups_do_not_fail_the_parse() {
    // Gust below the wind speed, temperature below dew point: both groups
    // parse but report themselves invalid
    let result = ReportParser::parse("METAR UKLL 181830Z 27020G10KT 10/12 Q1013=");
    assert_eq!(result.error, None);
    let invalid: Vec<bool> = result.groups.iter().map(Group::is_valid).collect();
    assert_eq!(invalid, vec![true, true, true, false, false, true]);
}

#[test]
fn fixed_group_gating_follows_report_type() {
    let result = ReportParser::parse("TAF KJFK 181120Z 1812/1912 WSCONDS=");
    assert_eq!(result.error, None);
    assert!(result.groups.iter().any(|group| matches!(
        group,
        Group::Fixed(fixed) if fixed.group_type() == FixedGroupType::Wsconds
    )));

    // The same token inside a METAR body is just plain text
    let result = ReportParser::parse("METAR UKLL 181830Z WSCONDS=");
    assert_eq!(result.error, None);
    assert!(result
        .groups
        .iter()
        .any(|group| matches!(group, Group::PlainText(_))));
}

#[test]
fn conversions_survive_a_round_trip_within_tolerance() {
    let result = ReportParser::parse("METAR UKLL 181830Z 27010MPS 9999 M05/M08 Q0998=");
    assert_eq!(result.error, None);

    let Group::Wind(wind) = &result.groups[3] else {
        panic!("expected wind group");
    };
    let knots = wind.wind_speed().to_unit(SpeedUnit::Knots).unwrap();
    let back = knots * 0.514444;
    assert!((back - 10.0).abs() < 0.01);

    let Group::Temperature(temperature) = &result.groups[5] else {
        panic!("expected temperature group");
    };
    let fahrenheit = temperature
        .air_temperature()
        .to_unit(TemperatureUnit::Fahrenheit)
        .unwrap();
    assert!((fahrenheit - 23.0).abs() < 0.01);

    let Group::Pressure(pressure) = &result.groups[6] else {
        panic!("expected pressure group");
    };
    let inhg = pressure.pressure().to_unit(PressureUnit::InchesHg).unwrap();
    assert!((inhg * 33.8639 - 998.0).abs() < 0.01);
}

#[test]
fn serializes_to_json() {
    let result = ReportParser::extended_parse("METAR UKLL 181830Z 27005MPS CAVOK 10/08 Q1013=");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["report_type"], "Metar");
    assert!(json["error"].is_null());
    assert_eq!(json["groups"].as_array().unwrap().len(), 7);
}
