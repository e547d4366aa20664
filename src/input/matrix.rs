use tracing::{debug, warn};

use crate::input::ParseError;
use crate::input::fields::{apply_field, field_for_label};
use crate::model::range::{RangeSpec, Status, parse_range};
use crate::model::record::{BiomarkerReading, SampleRecord};
use crate::tiers::Tier;

// Lines recognized as the separator between the biomarker matrix and the
// patient-info section, matched by case-insensitive containment.
const SECTION_MARKERS: &[&str] = &["thông tin bệnh nhân", "thong tin benh nhan", "patient info"];

// Column layout of the biomarker section: name, two range bounds, then
// one column per sample.
const SAMPLE_COL_OFFSET: usize = 3;

pub fn parse_matrix(text: &str) -> Result<Vec<SampleRecord>, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::Empty);
    }

    let marker = lines
        .iter()
        .position(|line| is_section_marker(line))
        .ok_or(ParseError::MissingSeparator)?;
    if marker == 0 {
        warn!("matrix file has no biomarker section before the patient info marker");
        return Ok(Vec::new());
    }

    let header = split_row(lines[0]);
    let n_samples = header.len().saturating_sub(SAMPLE_COL_OFFSET);
    let mut records = Vec::with_capacity(n_samples);
    for i in 0..n_samples {
        let id = header
            .get(SAMPLE_COL_OFFSET + i)
            .copied()
            .unwrap_or("")
            .trim();
        let id = if id.is_empty() {
            format!("sample_{}", i + 1)
        } else {
            id.to_string()
        };
        records.push(SampleRecord::new(id));
    }

    for line in &lines[1..marker] {
        parse_biomarker_row(line, &mut records);
    }
    for line in &lines[marker + 1..] {
        parse_metadata_row(line, &mut records);
    }

    Ok(records)
}

fn parse_biomarker_row(line: &str, records: &mut [SampleRecord]) {
    let cols = split_row(line);
    let name = cols.first().copied().unwrap_or("").trim();
    if name.is_empty() {
        return;
    }

    let range_text = join_range(cols.get(1).copied(), cols.get(2).copied());
    let range = parse_range(&range_text);
    if let RangeSpec::Unparseable(raw) = &range {
        warn!(
            "unparseable normal range '{}' for marker '{}'; readings will stay unchecked",
            raw, name
        );
    }

    for (i, record) in records.iter_mut().enumerate() {
        let raw = cols.get(SAMPLE_COL_OFFSET + i).copied().unwrap_or("").trim();
        let value = parse_value(name, raw);
        record.biomarkers.insert(BiomarkerReading {
            name: name.to_string(),
            value,
            range: range.clone(),
            status: Status::Unchecked,
            tier: Tier::Standard,
        });
    }
}

fn parse_metadata_row(line: &str, records: &mut [SampleRecord]) {
    let cols = split_row(line);
    let label = cols.first().copied().unwrap_or("").trim();
    if label.is_empty() {
        return;
    }

    let Some(field) = field_for_label(label) else {
        debug!("ignoring unrecognized patient info label '{}'", label);
        return;
    };
    for (i, record) in records.iter_mut().enumerate() {
        let value = cols.get(1 + i).copied().unwrap_or("").trim();
        if value.is_empty() {
            continue;
        }
        apply_field(record, field, value);
    }
}

fn is_section_marker(line: &str) -> bool {
    let lower = line.to_lowercase();
    SECTION_MARKERS.iter().any(|m| lower.contains(m))
}

fn split_row(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn join_range(first: Option<&str>, second: Option<&str>) -> String {
    let first = first.unwrap_or("").trim();
    let second = second.unwrap_or("").trim();
    if second.is_empty() {
        first.to_string()
    } else {
        format!("{}-{}", first, second)
    }
}

fn parse_value(name: &str, raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "non-numeric value '{}' for marker '{}'; defaulting to 0",
                raw, name
            );
            0.0
        }
    }
}
