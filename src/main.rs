mod clock;
mod input;
mod model;
mod notify;
mod pipeline;
mod report;
mod scoring;
mod tiers;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::clock::SystemClock;
use crate::notify::LogNotifier;
use crate::pipeline::{BatchOptions, OutputFormat, ProgressStage, run_batch};

#[derive(Parser, Debug)]
#[command(name = "labmatrix")]
#[command(about = "Batch biomarker risk analysis and report rendering", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a two-section matrix CSV and emit reports
    Run {
        /// Path to the matrix CSV file
        #[arg(long)]
        input: PathBuf,

        /// Output directory for generated artifacts
        #[arg(long)]
        out: PathBuf,

        /// Artifacts to generate
        #[arg(long, value_enum, default_value = "both")]
        format: FormatArg,

        /// Filename prefix for generated artifacts
        #[arg(long, default_value = "BioReport")]
        prefix: String,

        /// JSON file overriding the builtin high-impact tier set
        #[arg(long)]
        tiers: Option<PathBuf>,

        /// Log each pipeline stage as it starts
        #[arg(long)]
        progress: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Pdf,
    Both,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Pdf => OutputFormat::Pdf,
            FormatArg::Both => OutputFormat::Both,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), pipeline::PipelineError> {
    let Commands::Run {
        input,
        out,
        format,
        prefix,
        tiers,
        progress,
    } = cli.command;

    let opts = BatchOptions {
        input,
        out_dir: out,
        format: format.into(),
        prefix,
        tier_file: tiers,
    };

    let clock = SystemClock;
    let notifier = LogNotifier;
    let mut log_stage = |stage: ProgressStage| info!("stage: {}", stage.label());
    let progress_cb: Option<&mut dyn FnMut(ProgressStage)> = if progress {
        Some(&mut log_stage)
    } else {
        None
    };

    let summary = run_batch(&opts, &clock, &notifier, progress_cb)?;
    if let Some(path) = &summary.csv_path {
        info!("batch export: {}", path.display());
    }
    info!(
        "done: {} samples, {} markers, {} reports",
        summary.n_samples,
        summary.n_markers,
        summary.pdf_paths.len()
    );
    Ok(())
}
