use super::*;
use crate::model::range::RangeSpec;
use crate::model::record::{BiomarkerReading, SampleRecord};
use crate::model::risk::RiskBucket;

fn reading(name: &str, value: f64, range: RangeSpec) -> BiomarkerReading {
    BiomarkerReading {
        name: name.to_string(),
        value,
        range,
        status: Status::Unchecked,
        tier: crate::tiers::Tier::Standard,
    }
}

fn interval(min: f64, max: f64) -> RangeSpec {
    RangeSpec::Interval { min, max }
}

fn record_with(readings: Vec<BiomarkerReading>) -> SampleRecord {
    let mut record = SampleRecord::new("S1".to_string());
    for r in readings {
        record.biomarkers.insert(r);
    }
    record
}

#[test]
fn test_two_tier1_and_one_tier2_abnormal_scores_21() {
    let record = record_with(vec![
        reading("glucose", 120.0, interval(70.0, 100.0)),
        reading("cholesterol", 250.0, interval(125.0, 200.0)),
        reading("wbc", 12.0, interval(4.0, 10.0)),
    ]);
    let thresholds = RiskThresholds::default_v1();
    let scored = score_record(record, &TierSets::builtin(), &thresholds);

    assert_eq!(scored.risk_score, 21);
    assert_eq!(thresholds.bucket(scored.risk_score), RiskBucket::Medium);
}

#[test]
fn test_score_is_weighted_abnormal_count() {
    let record = record_with(vec![
        reading("glucose", 40.0, interval(70.0, 100.0)),
        reading("hba1c", 9.5, interval(4.0, 5.6)),
        reading("wbc", 2.0, interval(4.0, 10.0)),
        reading("platelets", 100.0, interval(150.0, 400.0)),
        reading("hemoglobin", 14.0, interval(12.0, 17.0)),
    ]);
    let scored = score_record(
        record,
        &TierSets::builtin(),
        &RiskThresholds::default_v1(),
    );

    // two tier-1 abnormal, two tier-2 abnormal, one normal
    assert_eq!(scored.risk_score, 10 * 2 + 2);
    assert_eq!(abnormal_count(&scored), 4);
}

#[test]
fn test_all_normal_scores_zero() {
    let record = record_with(vec![
        reading("glucose", 85.0, interval(70.0, 100.0)),
        reading("wbc", 6.0, interval(4.0, 10.0)),
    ]);
    let thresholds = RiskThresholds::default_v1();
    let scored = score_record(record, &TierSets::builtin(), &thresholds);

    assert_eq!(scored.risk_score, 0);
    assert_eq!(thresholds.bucket(scored.risk_score), RiskBucket::Low);
    for r in scored.biomarkers.iter() {
        assert_eq!(r.status, Status::Normal);
    }
}

#[test]
fn test_unchecked_readings_never_count_as_abnormal() {
    let record = record_with(vec![
        reading(
            "glucose",
            500.0,
            RangeSpec::Unparseable("see note".to_string()),
        ),
        reading("wbc", f64::NAN, interval(4.0, 10.0)),
    ]);
    let scored = score_record(
        record,
        &TierSets::builtin(),
        &RiskThresholds::default_v1(),
    );

    assert_eq!(scored.risk_score, 0);
    assert_eq!(abnormal_count(&scored), 0);
    for r in scored.biomarkers.iter() {
        assert_eq!(r.status, Status::Unchecked);
    }
}

#[test]
fn test_scoring_assigns_tiers_from_sets() {
    let record = record_with(vec![
        reading("glucose", 85.0, interval(70.0, 100.0)),
        reading("wbc", 6.0, interval(4.0, 10.0)),
    ]);
    let scored = score_record(
        record,
        &TierSets::builtin(),
        &RiskThresholds::default_v1(),
    );
    assert_eq!(
        scored.biomarkers.get("glucose").unwrap().tier,
        crate::tiers::Tier::HighImpact
    );
    assert_eq!(
        scored.biomarkers.get("wbc").unwrap().tier,
        crate::tiers::Tier::Standard
    );
}

#[test]
fn test_custom_tier_sets_change_weights() {
    let tiers = TierSets::from_names(["wbc"]);
    let record = record_with(vec![
        reading("glucose", 120.0, interval(70.0, 100.0)),
        reading("wbc", 12.0, interval(4.0, 10.0)),
    ]);
    let scored = score_record(record, &tiers, &RiskThresholds::default_v1());
    assert_eq!(scored.risk_score, 10 + 1);
    assert_eq!(
        scored.biomarkers.get("wbc").unwrap().tier,
        crate::tiers::Tier::HighImpact
    );
}

#[test]
fn test_score_samples_keeps_order() {
    let records = vec![
        record_with(vec![reading("glucose", 120.0, interval(70.0, 100.0))]),
        record_with(vec![reading("glucose", 85.0, interval(70.0, 100.0))]),
    ];
    let scored = score_samples(records, &TierSets::builtin(), &RiskThresholds::default_v1());
    assert_eq!(scored[0].risk_score, 10);
    assert_eq!(scored[1].risk_score, 0);
}
