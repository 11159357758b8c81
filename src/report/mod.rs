//! Consumers of the projection table: summaries, exports, run reports

mod summary;
pub mod export;
mod cache;

pub use summary::{Summary, render_table};
pub use export::{csv_bytes, write_csv, write_csv_file, CSV_HEADERS, EXPORT_FILE_NAME};
pub use cache::ExportCache;

use crate::config::SimulationConfig;
use crate::projection::{SimulationResult, YearRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while exporting a projection
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a shell needs to present one run
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub config: SimulationConfig,
    pub summary: Option<Summary>,
    pub years: Vec<YearRecord>,
}

impl RunReport {
    pub fn new(config: SimulationConfig, result: SimulationResult) -> Self {
        let summary = Summary::from_result(&result);
        Self {
            generated_at: Utc::now(),
            config,
            summary,
            years: result.into_records(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
