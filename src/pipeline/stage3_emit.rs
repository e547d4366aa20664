use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::clock::Clock;
use crate::model::record::SampleRecord;
use crate::model::risk::{RiskBucket, RiskThresholds};
use crate::pipeline::{BatchSummary, OutputFormat, PipelineError};
use crate::report::csv::export_csv;
use crate::report::pdf::{render, write_document};
use crate::report::{ContentBlock, ReportContent, build_filename};

pub struct Stage3Options<'a> {
    pub out_dir: &'a Path,
    pub format: OutputFormat,
    pub prefix: &'a str,
    pub thresholds: &'a RiskThresholds,
}

pub fn run_stage3(
    records: &[SampleRecord],
    opts: &Stage3Options<'_>,
    clock: &dyn Clock,
) -> Result<BatchSummary, PipelineError> {
    fs::create_dir_all(opts.out_dir)?;
    let now = clock.now();
    let date = now.date();

    let mut summary = BatchSummary {
        n_samples: records.len(),
        n_markers: distinct_markers(records),
        csv_path: None,
        pdf_paths: Vec::new(),
    };

    if opts.format.wants_csv() {
        let csv = export_csv(records, opts.thresholds);
        let path = opts
            .out_dir
            .join(build_filename(opts.prefix, "batch", date, "csv"));
        let mut w = BufWriter::new(File::create(&path)?);
        w.write_all(csv.as_bytes())?;
        w.flush()?;
        info!("wrote batch export {}", path.display());
        summary.csv_path = Some(path);
    }

    if opts.format.wants_pdf() {
        for record in records {
            let blocks = build_sample_report(record, opts.thresholds);
            let doc = render(&blocks, now)?;
            let path = opts
                .out_dir
                .join(build_filename(opts.prefix, record.identifier(), date, "pdf"));
            write_document(&doc, &path)?;
            info!(
                "wrote report {} ({} pages, generated {})",
                path.display(),
                doc.page_count,
                doc.generated_at
            );
            summary.pdf_paths.push(path);
        }
    }

    write_batch_summary(records, opts, &summary, now)?;
    Ok(summary)
}

/// The fixed per-sample report shape: title, patient info, result table,
/// then the risk assessment. Every document gets a fresh builder.
pub fn build_sample_report(
    record: &SampleRecord,
    thresholds: &RiskThresholds,
) -> Vec<ContentBlock> {
    let mut content = ReportContent::new();
    content.push_title("Biomarker Analysis Report");
    content.push_space();
    content.push_label_value("Sample", &record.sample_id);
    content.push_space();
    content.patient_info(record);
    content.push_space();
    content.biomarker_table(&record.biomarkers);
    content.push_space();
    content.push_section_header("Risk assessment");
    content.push_label_value("Risk score", &format!("{}/100", record.risk_score));
    content.push_label_value("Risk level", thresholds.bucket(record.risk_score).label());
    content.push_text(
        "Weighted score over abnormal biomarkers: high-impact markers weigh 10, \
         all others weigh 1. Scores above 50 are high risk and scores above 20 \
         are medium risk.",
    );
    content.finish()
}

#[derive(Debug, Serialize)]
struct SummaryFile {
    tool: &'static str,
    version: &'static str,
    generated_at: String,
    n_samples: usize,
    n_markers: usize,
    risk_counts: RiskCounts,
}

#[derive(Debug, Serialize)]
struct RiskCounts {
    low: usize,
    medium: usize,
    high: usize,
}

fn write_batch_summary(
    records: &[SampleRecord],
    opts: &Stage3Options<'_>,
    summary: &BatchSummary,
    now: chrono::NaiveDateTime,
) -> Result<(), PipelineError> {
    let mut counts = RiskCounts {
        low: 0,
        medium: 0,
        high: 0,
    };
    for record in records {
        match opts.thresholds.bucket(record.risk_score) {
            RiskBucket::Low => counts.low += 1,
            RiskBucket::Medium => counts.medium += 1,
            RiskBucket::High => counts.high += 1,
        }
    }
    let file = SummaryFile {
        tool: "labmatrix",
        version: env!("CARGO_PKG_VERSION"),
        generated_at: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        n_samples: summary.n_samples,
        n_markers: summary.n_markers,
        risk_counts: counts,
    };
    let json = serde_json::to_string_pretty(&file)
        .map_err(|e| PipelineError::Io(std::io::Error::other(e)))?;
    let path = opts.out_dir.join("summary.json");
    fs::write(&path, json)?;
    Ok(())
}

fn distinct_markers(records: &[SampleRecord]) -> usize {
    let mut names = BTreeSet::new();
    for record in records {
        for reading in record.biomarkers.iter() {
            names.insert(reading.name.as_str());
        }
    }
    names.len()
}
