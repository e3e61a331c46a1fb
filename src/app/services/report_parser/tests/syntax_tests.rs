//! Tests for syntax category classification

use crate::app::models::ReportPart;
use crate::app::services::groups::Group;
use crate::app::services::report_parser::state_machine::syntax_category;
use crate::app::services::report_parser::SyntaxCategory;

#[test]
fn test_structural_markers() {
    let cases = [
        ("METAR", ReportPart::Header, SyntaxCategory::Metar),
        ("SPECI", ReportPart::Header, SyntaxCategory::Speci),
        ("TAF", ReportPart::Header, SyntaxCategory::Taf),
        ("COR", ReportPart::Header, SyntaxCategory::Cor),
        ("AMD", ReportPart::Header, SyntaxCategory::Amd),
        ("NIL", ReportPart::Header, SyntaxCategory::Nil),
        ("CNL", ReportPart::Taf, SyntaxCategory::Cnl),
        ("RMK", ReportPart::Metar, SyntaxCategory::Rmk),
        ("$", ReportPart::Metar, SyntaxCategory::MaintenanceIndicator),
        ("UKLL", ReportPart::Header, SyntaxCategory::Location),
        ("181830Z", ReportPart::Header, SyntaxCategory::ReportTime),
        ("1812/1912", ReportPart::Header, SyntaxCategory::TimeSpan),
    ];
    for (token, part, expected) in cases {
        let group = Group::parse(token, part);
        assert_eq!(syntax_category(&group), expected, "token: {token}");
    }
}

#[test]
fn test_body_groups_are_other() {
    for (token, part) in [
        ("27005KT", ReportPart::Metar),
        ("CAVOK", ReportPart::Metar),
        ("BECMG", ReportPart::Taf),
        ("NOSIG", ReportPart::Metar),
        ("Q1013", ReportPart::Metar),
        ("FREEFORM", ReportPart::Remarks),
    ] {
        let group = Group::parse(token, part);
        assert_eq!(
            syntax_category(&group),
            SyntaxCategory::Other,
            "token: {token}"
        );
    }
}

#[test]
fn test_only_bare_time_spans_classify_as_time_span() {
    // A bare validity period is a structural marker
    let span = Group::parse("1812/1912", ReportPart::Taf);
    assert_eq!(syntax_category(&span), SyntaxCategory::TimeSpan);

    // Folded into a probability trend it no longer is
    let prob = Group::parse("PROB30", ReportPart::Taf);
    let combined = prob.combine(&span).unwrap();
    assert_eq!(syntax_category(&combined), SyntaxCategory::Other);
}

#[test]
fn test_fixed_body_markers_are_not_structural() {
    for token in ["CAVOK", "NSW", "AUTO"] {
        let group = Group::parse(token, ReportPart::Metar);
        assert!(matches!(group, Group::Fixed(_)), "token: {token}");
        assert_eq!(syntax_category(&group), SyntaxCategory::Other);
    }
}
