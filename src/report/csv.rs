use std::fmt::Write;

use crate::model::record::SampleRecord;
use crate::model::risk::RiskThresholds;
use crate::scoring::abnormal_count;

const EXPORT_HEADER: &str =
    "sample_id,patient_code,name,age,gender,markers,abnormal,risk_score,risk_level";

pub fn export_csv(records: &[SampleRecord], thresholds: &RiskThresholds) -> String {
    let mut out = String::new();
    out.push_str(EXPORT_HEADER);
    out.push('\n');
    for record in records {
        let age = record.age.map(|a| a.to_string()).unwrap_or_default();
        let row = [
            csv_field(&record.sample_id),
            csv_field(record.patient_code.as_deref().unwrap_or("")),
            csv_field(record.name.as_deref().unwrap_or("")),
            age,
            csv_field(record.gender.as_deref().unwrap_or("")),
            record.biomarkers.len().to_string(),
            abnormal_count(record).to_string(),
            record.risk_score.to_string(),
            thresholds.bucket(record.risk_score).label().to_string(),
        ];
        let _ = writeln!(out, "{}", row.join(","));
    }
    out
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
