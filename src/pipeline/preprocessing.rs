//! Stage 2: deduplicate, encode labels and normalize message text.
//!
//! The label encoder is fitted on the train split only and the same fitted
//! encoder encodes the test split, so a label missing from train makes the
//! stage fail instead of inventing a code.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::TextNormalizer;
use crate::config::PipelineConfig;
use crate::dataset::{ProcessedRecord, RAW_HEADER, Record, StagedOutput, load_records};
use crate::error::Result;
use crate::pipeline::ingestion;
use crate::preprocessing::{FittedLabelEncoder, LabelEncoder, deduplicate};

/// Processed train split written under `interim/`.
pub const TRAIN_FILE: &str = "train_processed.csv";

/// Processed test split written under `interim/`.
pub const TEST_FILE: &str = "test_processed.csv";

/// Fitted label encoder written under `interim/`.
pub const ENCODER_FILE: &str = "label_encoder.json";

/// Outcome of a preprocessing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessingReport {
    pub train_rows: usize,
    pub test_rows: usize,
    pub train_duplicates_removed: usize,
    pub test_duplicates_removed: usize,
    pub classes: Vec<String>,
    pub files: Vec<PathBuf>,
    pub completed_at: DateTime<Local>,
}

/// Deduplicated, encoded and normalized splits with the encoder that
/// produced their targets.
#[derive(Debug, Clone)]
pub struct PreprocessedSplits {
    pub train: Vec<ProcessedRecord>,
    pub test: Vec<ProcessedRecord>,
    pub encoder: FittedLabelEncoder,
    pub train_duplicates_removed: usize,
    pub test_duplicates_removed: usize,
}

/// Encode and normalize `records` with an already fitted encoder.
pub fn process_records(
    records: &[Record],
    encoder: &FittedLabelEncoder,
    normalizer: &TextNormalizer,
    parallel: bool,
) -> Result<Vec<ProcessedRecord>> {
    let targets = encoder.transform(records.iter().map(|record| record.label.as_str()))?;
    let texts: Vec<Option<&str>> = records.iter().map(|record| record.text.as_deref()).collect();
    let cleaned = normalizer.normalize_batch(&texts, parallel)?;

    Ok(targets
        .into_iter()
        .zip(cleaned)
        .map(|(target, text)| ProcessedRecord::new(target, text))
        .collect())
}

/// Preprocess both splits in memory.
///
/// Duplicates are removed on the raw `(label, text)` rows of each split.
/// The encoder is fitted on the deduplicated train labels.
pub fn preprocess_splits(
    train: Vec<Record>,
    test: Vec<Record>,
    normalizer: &TextNormalizer,
    parallel: bool,
) -> Result<PreprocessedSplits> {
    let (train, train_duplicates_removed) = dedup_counted(train);
    let (test, test_duplicates_removed) = dedup_counted(test);
    debug!(
        "Duplicates removed: {train_duplicates_removed} from train, {test_duplicates_removed} from test"
    );

    let encoder = LabelEncoder::new().fit(train.iter().map(|record| record.label.as_str()))?;
    debug!("Target column encoded with classes {:?}", encoder.classes());

    let train = process_records(&train, &encoder, normalizer, parallel)?;
    let test = process_records(&test, &encoder, normalizer, parallel)?;
    debug!("Text column transformed");

    Ok(PreprocessedSplits {
        train,
        test,
        encoder,
        train_duplicates_removed,
        test_duplicates_removed,
    })
}

/// Run preprocessing on `raw/train.csv` and `raw/test.csv`.
pub fn run(config: &PipelineConfig) -> Result<PreprocessingReport> {
    config.validate()?;
    let raw_dir = config.raw_dir();
    let [label_column, text_column] = RAW_HEADER;
    let train = load_records(raw_dir.join(ingestion::TRAIN_FILE), label_column, text_column)?;
    let test = load_records(raw_dir.join(ingestion::TEST_FILE), label_column, text_column)?;
    debug!("Data loaded from {}", raw_dir.display());

    let normalizer = TextNormalizer::new();
    let splits = preprocess_splits(train, test, &normalizer, config.preprocessing.parallel)?;

    let mut output = StagedOutput::new(config.interim_dir())?;
    let train_rows = output.stage_table(
        TRAIN_FILE,
        RAW_HEADER,
        splits.train.iter().map(ProcessedRecord::to_row),
    )?;
    let test_rows = output.stage_table(
        TEST_FILE,
        RAW_HEADER,
        splits.test.iter().map(ProcessedRecord::to_row),
    )?;
    output.stage_json(ENCODER_FILE, &splits.encoder)?;
    let files = output.commit()?;

    info!("Processed data saved to {}", config.interim_dir().display());

    Ok(PreprocessingReport {
        train_rows,
        test_rows,
        train_duplicates_removed: splits.train_duplicates_removed,
        test_duplicates_removed: splits.test_duplicates_removed,
        classes: splits.encoder.classes().to_vec(),
        files,
        completed_at: Local::now(),
    })
}

fn dedup_counted(records: Vec<Record>) -> (Vec<Record>, usize) {
    let before = records.len();
    let records = deduplicate(records);
    let removed = before - records.len();
    (records, removed)
}
