//! Pipeline parameters loaded from `params.yaml`.
//!
//! ```yaml
//! data_ingestion:
//!   test_size: 0.2
//!   random_state: 2
//!   source: ./spam.csv
//! preprocessing:
//!   parallel: true
//! feature_engineering:
//!   max_features: 50
//! paths:
//!   data_dir: ./data
//! ```
//!
//! The `data_ingestion` and `feature_engineering` sections are required; the
//! rest fall back to defaults. Loading validates the values, so a stage never
//! starts with parameters it would reject halfway through.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamprepError};

/// All parameters of a pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Split and source settings
    pub data_ingestion: DataIngestionConfig,

    /// Normalization settings
    #[serde(default)]
    pub preprocessing: PreprocessingConfig,

    /// Vectorizer settings
    pub feature_engineering: FeatureEngineeringConfig,

    /// Output locations
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Ingestion parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataIngestionConfig {
    /// Fraction of rows held out for testing, in (0, 1).
    pub test_size: f64,

    /// Seed for the shuffle before splitting.
    pub random_state: u64,

    /// Raw CSV to ingest. The CLI `--source` flag takes precedence.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Column holding the class label.
    #[serde(default = "default_label_column")]
    pub label_column: String,

    /// Column holding the message text.
    #[serde(default = "default_text_column")]
    pub text_column: String,
}

/// Preprocessing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessingConfig {
    /// Normalize records on the rayon thread pool.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

/// Feature engineering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEngineeringConfig {
    /// Upper bound on the vocabulary size.
    pub max_features: usize,
}

/// Directory layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Root of the `raw/`, `interim/` and `processed/` directories.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_label_column() -> String {
    "v1".to_string()
}

fn default_text_column() -> String {
    "v2".to_string()
}

fn default_true() -> bool {
    true
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for DataIngestionConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            random_state: 2,
            source: None,
            label_column: default_label_column(),
            text_column: default_text_column(),
        }
    }
}

impl Default for PreprocessingConfig {
    fn default() -> Self {
        Self {
            parallel: default_true(),
        }
    }
}

impl Default for FeatureEngineeringConfig {
    fn default() -> Self {
        Self { max_features: 50 }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_ingestion: DataIngestionConfig::default(),
            preprocessing: PreprocessingConfig::default(),
            feature_engineering: FeatureEngineeringConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Load and validate parameters from a YAML file.
    ///
    /// A missing file, malformed YAML, a missing required key and an invalid
    /// value are all [`SpamprepError::Config`] errors.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SpamprepError::config(format!("cannot read {}: {e}", path.display()))
        })?;

        let config = Self::from_yaml_str(&content).map_err(|e| match e {
            SpamprepError::Yaml(e) => SpamprepError::config(format!("{}: {e}", path.display())),
            other => other,
        })?;

        info!("Params loaded successfully from {}", path.display());
        Ok(config)
    }

    /// Parse and validate parameters from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: PipelineConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let test_size = self.data_ingestion.test_size;
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(SpamprepError::config(format!(
                "data_ingestion.test_size must be in (0, 1), got {test_size}"
            )));
        }
        if self.feature_engineering.max_features == 0 {
            return Err(SpamprepError::config(
                "feature_engineering.max_features must be at least 1",
            ));
        }
        if self.data_ingestion.label_column.is_empty() || self.data_ingestion.text_column.is_empty()
        {
            return Err(SpamprepError::config(
                "data_ingestion column names must not be empty",
            ));
        }
        Ok(())
    }

    /// Override the data directory.
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, data_dir: P) -> Self {
        self.paths.data_dir = data_dir.into();
        self
    }

    /// Override the ingestion source.
    pub fn with_source<P: Into<PathBuf>>(mut self, source: P) -> Self {
        self.data_ingestion.source = Some(source.into());
        self
    }

    /// Directory of the ingestion outputs.
    pub fn raw_dir(&self) -> PathBuf {
        self.paths.data_dir.join("raw")
    }

    /// Directory of the preprocessing outputs.
    pub fn interim_dir(&self) -> PathBuf {
        self.paths.data_dir.join("interim")
    }

    /// Directory of the feature engineering outputs.
    pub fn processed_dir(&self) -> PathBuf {
        self.paths.data_dir.join("processed")
    }
}
