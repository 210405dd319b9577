//! The three pipeline stages.
//!
//! Each stage reads the previous stage's files under `paths.data_dir`,
//! writes its own outputs through a [`StagedOutput`](crate::dataset::StagedOutput)
//! and returns a serializable report:
//!
//! | Stage | Reads | Writes |
//! |---|---|---|
//! | [`ingestion`] | `data_ingestion.source` | `raw/train.csv`, `raw/test.csv` |
//! | [`preprocessing`] | `raw/` | `interim/*_processed.csv`, `interim/label_encoder.json` |
//! | [`feature_engineering`] | `interim/` | `processed/*_tfidf.csv`, `processed/vectorizer.json` |

pub mod feature_engineering;
pub mod ingestion;
pub mod preprocessing;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::Result;

pub use feature_engineering::FeatureReport;
pub use ingestion::IngestionReport;
pub use preprocessing::PreprocessingReport;

/// Reports of a full run, one per stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub ingestion: IngestionReport,
    pub preprocessing: PreprocessingReport,
    pub feature_engineering: FeatureReport,
}

/// Run all stages in order, stopping at the first failure.
pub fn run_all(config: &PipelineConfig) -> Result<PipelineReport> {
    let ingestion = ingestion::run(config)?;
    let preprocessing = preprocessing::run(config)?;
    let feature_engineering = feature_engineering::run(config)?;

    info!(
        "Pipeline finished: {} rows in, {} features",
        ingestion.rows_loaded, feature_engineering.vocabulary_size
    );

    Ok(PipelineReport {
        ingestion,
        preprocessing,
        feature_engineering,
    })
}
