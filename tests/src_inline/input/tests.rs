use super::ParseError;
use super::matrix::parse_matrix;
use crate::model::range::{RangeSpec, Status};
use crate::model::risk::RiskThresholds;
use crate::scoring::score_samples;
use crate::tiers::TierSets;

const TWO_SAMPLE_MATRIX: &str = "\
marker,min,max,A,B
glucose,70,100,120,85
THÔNG TIN BỆNH NHÂN
họ tên,An,Bình
";

#[test]
fn test_two_sample_matrix_parses_and_classifies() {
    let records = parse_matrix(TWO_SAMPLE_MATRIX).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sample_id, "A");
    assert_eq!(records[1].sample_id, "B");
    assert_eq!(records[0].name.as_deref(), Some("An"));
    assert_eq!(records[1].name.as_deref(), Some("Bình"));

    let g0 = records[0].biomarkers.get("glucose").unwrap();
    assert_eq!(g0.value, 120.0);
    assert_eq!(
        g0.range,
        RangeSpec::Interval {
            min: 70.0,
            max: 100.0
        }
    );

    let scored = score_samples(records, &TierSets::builtin(), &RiskThresholds::default_v1());
    assert_eq!(
        scored[0].biomarkers.get("glucose").unwrap().status,
        Status::High
    );
    assert_eq!(
        scored[1].biomarkers.get("glucose").unwrap().status,
        Status::Normal
    );
}

#[test]
fn test_missing_marker_is_a_parse_error() {
    let text = "marker,min,max,A\nglucose,70,100,90\n";
    let err = parse_matrix(text).unwrap_err();
    assert!(matches!(err, ParseError::MissingSeparator));
}

#[test]
fn test_empty_text_is_a_parse_error() {
    assert!(matches!(parse_matrix("").unwrap_err(), ParseError::Empty));
    assert!(matches!(
        parse_matrix("\n  \n").unwrap_err(),
        ParseError::Empty
    ));
}

#[test]
fn test_english_and_vietnamese_aliases_dispatch() {
    let text = "\
marker,min,max,S1
glucose,70,100,90
PATIENT INFO
name,Alice
tuổi,52
giới tính,F
mã bệnh nhân,BN-042
";
    let records = parse_matrix(text).unwrap();
    assert_eq!(records[0].name.as_deref(), Some("Alice"));
    assert_eq!(records[0].age, Some(52));
    assert_eq!(records[0].gender.as_deref(), Some("F"));
    assert_eq!(records[0].patient_code.as_deref(), Some("BN-042"));
}

#[test]
fn test_unrecognized_labels_are_ignored() {
    let text = "\
marker,min,max,S1
glucose,70,100,90
patient info
blood type,O+
";
    let records = parse_matrix(text).unwrap();
    assert_eq!(records[0].name, None);
    assert_eq!(records[0].gender, None);
}

#[test]
fn test_short_rows_default_missing_values() {
    let text = "\
marker,min,max,S1,S2
glucose,70,100,90
wbc,4,10
patient info
họ tên,An
";
    let records = parse_matrix(text).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].biomarkers.get("glucose").unwrap().value, 0.0);
    assert_eq!(records[0].biomarkers.get("wbc").unwrap().value, 0.0);
    assert_eq!(records[1].name, None);
}

#[test]
fn test_non_numeric_values_default_to_zero() {
    let text = "\
marker,min,max,S1
glucose,70,100,n/a
patient info
";
    let records = parse_matrix(text).unwrap();
    assert_eq!(records[0].biomarkers.get("glucose").unwrap().value, 0.0);
}

#[test]
fn test_duplicate_marker_rows_overwrite() {
    let text = "\
marker,min,max,S1
glucose,70,100,90
glucose,70,100,140
patient info
";
    let records = parse_matrix(text).unwrap();
    assert_eq!(records[0].biomarkers.len(), 1);
    assert_eq!(records[0].biomarkers.get("glucose").unwrap().value, 140.0);
}

#[test]
fn test_one_sided_range_column() {
    let text = "\
marker,min,max,S1
crp,<5,,7.5
patient info
";
    let records = parse_matrix(text).unwrap();
    let crp = records[0].biomarkers.get("crp").unwrap();
    assert_eq!(crp.range, RangeSpec::LessThan(5.0));
}

#[test]
fn test_unparseable_range_keeps_reading() {
    let text = "\
marker,min,max,S1
troponin,see note,,0.2
patient info
";
    let records = parse_matrix(text).unwrap();
    let reading = records[0].biomarkers.get("troponin").unwrap();
    assert!(matches!(reading.range, RangeSpec::Unparseable(_)));
    assert_eq!(reading.status, Status::Unchecked);
}

#[test]
fn test_blank_sample_header_falls_back_to_index() {
    let text = "\
marker,min,max,,B
glucose,70,100,90,95
patient info
";
    let records = parse_matrix(text).unwrap();
    assert_eq!(records[0].sample_id, "sample_1");
    assert_eq!(records[1].sample_id, "B");
}

#[test]
fn test_marker_on_first_line_yields_no_samples() {
    let records = parse_matrix("patient info\nhọ tên,An\n").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_parse_is_deterministic() {
    let a = parse_matrix(TWO_SAMPLE_MATRIX).unwrap();
    let b = parse_matrix(TWO_SAMPLE_MATRIX).unwrap();
    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.iter().zip(&b) {
        assert_eq!(ra.sample_id, rb.sample_id);
        let names_a: Vec<&str> = ra.biomarkers.iter().map(|r| r.name.as_str()).collect();
        let names_b: Vec<&str> = rb.biomarkers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names_a, names_b);
    }
}
