use tracing::info;

use crate::model::record::SampleRecord;
use crate::model::risk::{RiskBucket, RiskThresholds};
use crate::scoring::score_samples;
use crate::tiers::TierSets;

pub fn run_stage2(
    records: Vec<SampleRecord>,
    tiers: &TierSets,
    thresholds: &RiskThresholds,
) -> Vec<SampleRecord> {
    let scored = score_samples(records, tiers, thresholds);
    let high = scored
        .iter()
        .filter(|r| thresholds.bucket(r.risk_score) == RiskBucket::High)
        .count();
    let medium = scored
        .iter()
        .filter(|r| thresholds.bucket(r.risk_score) == RiskBucket::Medium)
        .count();
    info!(
        "scored {} samples: {} high risk, {} medium risk",
        scored.len(),
        high,
        medium
    );
    scored
}
