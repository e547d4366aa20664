use tracing::info;

use crate::input::ParseError;
use crate::input::matrix::parse_matrix;
use crate::model::record::SampleRecord;

pub fn run_stage1(text: &str) -> Result<Vec<SampleRecord>, ParseError> {
    let records = parse_matrix(text)?;
    let n_markers = records.first().map(|r| r.biomarkers.len()).unwrap_or(0);
    info!(
        "parsed matrix: {} samples, {} markers",
        records.len(),
        n_markers
    );
    Ok(records)
}
