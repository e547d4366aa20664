use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::tiers::TierSets;

#[derive(Debug, Deserialize)]
struct TierFile {
    high_impact: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TierConfigError {
    #[error("failed to read tier file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid tier file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("tier file {0} defines no high-impact markers")]
    Empty(String),
}

pub fn load_tiers(path: Option<&Path>) -> Result<TierSets, TierConfigError> {
    let Some(path) = path else {
        return Ok(TierSets::builtin());
    };
    let path_display = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|source| TierConfigError::Io {
        path: path_display.clone(),
        source,
    })?;
    let file: TierFile = serde_json::from_str(&text).map_err(|source| TierConfigError::Parse {
        path: path_display.clone(),
        source,
    })?;
    let sets = TierSets::from_names(file.high_impact.iter().map(String::as_str));
    if sets.high_impact_len() == 0 {
        return Err(TierConfigError::Empty(path_display));
    }
    tracing::info!(
        "loaded tier file {}: {} high-impact markers",
        path_display,
        sets.high_impact_len()
    );
    Ok(sets)
}
