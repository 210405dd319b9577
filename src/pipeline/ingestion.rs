//! Stage 1: load the raw corpus and split it into train and test tables.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::dataset::{RAW_HEADER, Record, StagedOutput, load_records, train_test_split};
use crate::error::{Result, SpamprepError};

/// Train split written under `raw/`.
pub const TRAIN_FILE: &str = "train.csv";

/// Test split written under `raw/`.
pub const TEST_FILE: &str = "test.csv";

/// Outcome of an ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionReport {
    pub source: PathBuf,
    pub rows_loaded: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub files: Vec<PathBuf>,
    pub completed_at: DateTime<Local>,
}

/// Split already loaded records with the configured fraction and seed.
pub fn split_records(
    config: &PipelineConfig,
    records: Vec<Record>,
) -> Result<(Vec<Record>, Vec<Record>)> {
    let params = &config.data_ingestion;
    train_test_split(records, params.test_size, params.random_state)
}

/// Run ingestion: read `data_ingestion.source`, split it and write
/// `raw/train.csv` and `raw/test.csv`.
pub fn run(config: &PipelineConfig) -> Result<IngestionReport> {
    config.validate()?;
    let params = &config.data_ingestion;
    let source = params
        .source
        .clone()
        .ok_or_else(|| SpamprepError::config("data_ingestion.source is not set"))?;

    let records = load_records(&source, &params.label_column, &params.text_column)?;
    let rows_loaded = records.len();
    debug!("Data loaded from {}", source.display());

    let (train, test) = split_records(config, records)?;
    debug!(
        "Split {rows_loaded} rows into {} train and {} test rows",
        train.len(),
        test.len()
    );

    let mut output = StagedOutput::new(config.raw_dir())?;
    let train_rows = output.stage_table(TRAIN_FILE, RAW_HEADER, train.iter().map(Record::to_row))?;
    let test_rows = output.stage_table(TEST_FILE, RAW_HEADER, test.iter().map(Record::to_row))?;
    let files = output.commit()?;

    info!("Train and test data saved to {}", config.raw_dir().display());

    Ok(IngestionReport {
        source,
        rows_loaded,
        train_rows,
        test_rows,
        files,
        completed_at: Local::now(),
    })
}
