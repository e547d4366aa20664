use std::path::PathBuf;

use thiserror::Error;

pub mod stage1_parse;
pub mod stage2_score;
pub mod stage3_emit;

use crate::clock::Clock;
use crate::input::ParseError;
use crate::model::risk::RiskThresholds;
use crate::notify::Notifier;
use crate::report::RenderError;
use crate::tiers::loader::{TierConfigError, load_tiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Pdf,
    Both,
}

impl OutputFormat {
    pub fn wants_csv(&self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn wants_pdf(&self) -> bool {
        matches!(self, OutputFormat::Pdf | OutputFormat::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStage {
    Read,
    Parse,
    Score,
    Render,
    Done,
}

impl ProgressStage {
    pub fn label(&self) -> &'static str {
        match self {
            ProgressStage::Read => "read",
            ProgressStage::Parse => "parse",
            ProgressStage::Score => "score",
            ProgressStage::Render => "render",
            ProgressStage::Done => "done",
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    TierConfig(#[from] TierConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    pub prefix: String,
    pub tier_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct BatchSummary {
    pub n_samples: usize,
    pub n_markers: usize,
    pub csv_path: Option<PathBuf>,
    pub pdf_paths: Vec<PathBuf>,
}

/// Runs the whole batch: read, parse, score, emit. The notifier gets
/// exactly one message per invocation; the progress callback fires once
/// per stage transition.
pub fn run_batch(
    opts: &BatchOptions,
    clock: &dyn Clock,
    notifier: &dyn Notifier,
    mut progress: Option<&mut dyn FnMut(ProgressStage)>,
) -> Result<BatchSummary, PipelineError> {
    match run_batch_inner(opts, clock, &mut progress) {
        Ok(summary) => {
            notifier.success(&format!(
                "analyzed {} samples from {}",
                summary.n_samples,
                opts.input.display()
            ));
            Ok(summary)
        }
        Err(err) => {
            notifier.error(&err.to_string());
            Err(err)
        }
    }
}

fn run_batch_inner(
    opts: &BatchOptions,
    clock: &dyn Clock,
    progress: &mut Option<&mut dyn FnMut(ProgressStage)>,
) -> Result<BatchSummary, PipelineError> {
    let tiers = load_tiers(opts.tier_file.as_deref())?;
    let thresholds = RiskThresholds::default_v1();

    emit(progress, ProgressStage::Read);
    let text = std::fs::read_to_string(&opts.input).map_err(ParseError::Io)?;

    emit(progress, ProgressStage::Parse);
    let records = stage1_parse::run_stage1(&text)?;

    emit(progress, ProgressStage::Score);
    let records = stage2_score::run_stage2(records, &tiers, &thresholds);

    emit(progress, ProgressStage::Render);
    let stage3 = stage3_emit::Stage3Options {
        out_dir: &opts.out_dir,
        format: opts.format,
        prefix: &opts.prefix,
        thresholds: &thresholds,
    };
    let summary = stage3_emit::run_stage3(&records, &stage3, clock)?;

    emit(progress, ProgressStage::Done);
    Ok(summary)
}

fn emit(progress: &mut Option<&mut dyn FnMut(ProgressStage)>, stage: ProgressStage) {
    if let Some(cb) = progress.as_mut() {
        cb(stage);
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/tests.rs"]
mod tests;
