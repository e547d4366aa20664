use crate::model::range::{Status, classify};
use crate::model::record::SampleRecord;
use crate::model::risk::RiskThresholds;
use crate::tiers::{Tier, TierSets};

/// Classifies every reading and folds the weighted abnormal counts into
/// the record's risk score. Pure record-in/record-out; callers treat the
/// returned record as final.
pub fn score_record(
    mut record: SampleRecord,
    tiers: &TierSets,
    thresholds: &RiskThresholds,
) -> SampleRecord {
    let mut score = 0u32;
    for reading in record.biomarkers.iter_mut() {
        reading.status = classify(reading.value, &reading.range);
        reading.tier = tiers.tier_of(&reading.name);
        if is_abnormal(reading.status) {
            score += match reading.tier {
                Tier::HighImpact => thresholds.tier1_weight,
                Tier::Standard => thresholds.tier2_weight,
            };
        }
    }
    record.risk_score = score;
    record
}

pub fn score_samples(
    records: Vec<SampleRecord>,
    tiers: &TierSets,
    thresholds: &RiskThresholds,
) -> Vec<SampleRecord> {
    records
        .into_iter()
        .map(|record| score_record(record, tiers, thresholds))
        .collect()
}

// Unchecked readings carry no classification and never count as abnormal.
pub fn is_abnormal(status: Status) -> bool {
    matches!(status, Status::High | Status::Low)
}

pub fn abnormal_count(record: &SampleRecord) -> usize {
    record
        .biomarkers
        .iter()
        .filter(|reading| is_abnormal(reading.status))
        .count()
}

#[cfg(test)]
#[path = "../../tests/src_inline/scoring/tests.rs"]
mod tests;
