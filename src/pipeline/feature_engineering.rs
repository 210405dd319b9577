//! Stage 3: fit TF-IDF on the processed train split and vectorize both splits.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::dataset::{ProcessedRecord, StagedOutput, load_processed};
use crate::error::Result;
use crate::feature::{FeatureMatrix, FittedTfIdfVectorizer, TfIdfVectorizer};
use crate::pipeline::preprocessing;

/// Train feature matrix written under `processed/`.
pub const TRAIN_FILE: &str = "train_tfidf.csv";

/// Test feature matrix written under `processed/`.
pub const TEST_FILE: &str = "test_tfidf.csv";

/// Fitted vectorizer state written under `processed/`.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Outcome of a feature engineering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    pub vocabulary_size: usize,
    pub train_shape: (usize, usize),
    pub test_shape: (usize, usize),
    pub files: Vec<PathBuf>,
    pub completed_at: DateTime<Local>,
}

/// Labeled matrices for both splits and the vectorizer fitted on train.
#[derive(Debug, Clone)]
pub struct FeatureSplits {
    pub train: FeatureMatrix,
    pub test: FeatureMatrix,
    pub vectorizer: FittedTfIdfVectorizer,
}

/// Fit on `train` texts, then transform both splits with the same fitted
/// vectorizer and attach the targets as labels.
pub fn vectorize_splits(
    train: &[ProcessedRecord],
    test: &[ProcessedRecord],
    max_features: usize,
) -> Result<FeatureSplits> {
    let train_texts: Vec<&str> = train.iter().map(|record| record.text.as_str()).collect();
    let test_texts: Vec<&str> = test.iter().map(|record| record.text.as_str()).collect();

    let (vectorizer, train_matrix) = TfIdfVectorizer::new()
        .with_max_features(max_features)
        .fit_transform(&train_texts)?;
    let test_matrix = vectorizer.transform(&test_texts)?;
    debug!("TF-IDF applied to train and test data");

    let train_matrix = train_matrix.with_labels(targets(train))?;
    let test_matrix = test_matrix.with_labels(targets(test))?;

    Ok(FeatureSplits {
        train: train_matrix,
        test: test_matrix,
        vectorizer,
    })
}

/// Run feature engineering on the `interim/` processed splits.
pub fn run(config: &PipelineConfig) -> Result<FeatureReport> {
    config.validate()?;
    let interim_dir = config.interim_dir();
    let train = load_processed(interim_dir.join(preprocessing::TRAIN_FILE))?;
    let test = load_processed(interim_dir.join(preprocessing::TEST_FILE))?;
    debug!("Data loaded from {}", interim_dir.display());

    let splits = vectorize_splits(&train, &test, config.feature_engineering.max_features)?;

    let mut output = StagedOutput::new(config.processed_dir())?;
    output.stage_table(TRAIN_FILE, splits.train.header(), splits.train.to_records())?;
    output.stage_table(TEST_FILE, splits.test.header(), splits.test.to_records())?;
    output.stage_json(VECTORIZER_FILE, &splits.vectorizer.state())?;
    let files = output.commit()?;

    info!("Feature data saved to {}", config.processed_dir().display());

    Ok(FeatureReport {
        vocabulary_size: splits.vectorizer.vocabulary_size(),
        train_shape: splits.train.shape(),
        test_shape: splits.test.shape(),
        files,
        completed_at: Local::now(),
    })
}

fn targets(records: &[ProcessedRecord]) -> Vec<u32> {
    records.iter().map(|record| record.target).collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::error::SpamprepError;

    fn processed(rows: &[(u32, &str)]) -> Vec<ProcessedRecord> {
        rows.iter()
            .map(|(target, text)| ProcessedRecord::new(*target, *text))
            .collect()
    }

    #[test]
    fn test_vectorize_scenario() {
        let train = processed(&[(1, "win cash"), (0, "call later"), (1, "win cash")]);
        let test = processed(&[(0, "call prize"), (1, "")]);

        let splits = vectorize_splits(&train, &test, 10).unwrap();

        assert_eq!(
            splits.vectorizer.feature_names(),
            &["call", "cash", "later", "win"]
        );
        assert_eq!(splits.train.shape(), (3, 4));
        assert_eq!(splits.train.labels(), Some(&[1, 0, 1][..]));
        assert_eq!(splits.test.shape(), (2, 4));
        assert_eq!(splits.test.labels(), Some(&[0, 1][..]));

        // "prize" was never fitted, so only "call" carries weight.
        let row = splits.test.row(0).unwrap();
        assert!((row[0] - 1.0).abs() < 1e-9);
        assert_eq!(&row[1..], &[0.0, 0.0, 0.0]);
        assert!(splits.test.row(1).unwrap().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_vocabulary_bounded_by_max_features() {
        let train = processed(&[(1, "win win cash prize"), (0, "call later")]);
        let splits = vectorize_splits(&train, &train, 2).unwrap();

        assert_eq!(splits.vectorizer.vocabulary_size(), 2);
        assert_eq!(splits.train.n_features(), 2);
        assert_eq!(splits.test.n_features(), 2);
    }

    #[test]
    fn test_run_without_processed_data() {
        let dir = TempDir::new().unwrap();
        let config = PipelineConfig::default().with_data_dir(dir.path());

        assert!(matches!(
            run(&config),
            Err(SpamprepError::SourceNotFound(_))
        ));
        assert!(!config.processed_dir().join(TRAIN_FILE).exists());
    }

    #[test]
    fn test_run_writes_matrices() {
        let dir = TempDir::new().unwrap();
        let config = PipelineConfig::default().with_data_dir(dir.path());
        fs::create_dir_all(config.interim_dir()).unwrap();
        fs::write(
            config.interim_dir().join(preprocessing::TRAIN_FILE),
            "target,text\n1,win cash\n0,call later\n1,win cash\n",
        )
        .unwrap();
        fs::write(
            config.interim_dir().join(preprocessing::TEST_FILE),
            "target,text\n0,\n",
        )
        .unwrap();

        let report = run(&config).unwrap();

        assert_eq!(report.vocabulary_size, 4);
        assert_eq!(report.train_shape, (3, 4));
        assert_eq!(report.test_shape, (1, 4));

        let written = fs::read_to_string(config.processed_dir().join(TRAIN_FILE)).unwrap();
        assert!(written.starts_with("0,1,2,3,label\n"));

        let vectorizer =
            FittedTfIdfVectorizer::load(config.processed_dir().join(VECTORIZER_FILE)).unwrap();
        assert_eq!(vectorizer.vocabulary_size(), 4);
    }
}
