//! # spamprep
//!
//! Data preparation for SMS spam classification.
//!
//! The crate turns a raw labeled SMS dump into TF-IDF feature matrices in
//! three stages:
//!
//! - **ingestion**: load the raw CSV and write a seeded train/test split
//! - **preprocessing**: drop duplicate rows, encode labels and normalize text
//! - **feature engineering**: fit a vocabulary-bounded TF-IDF vectorizer on
//!   the train split and apply it to both splits
//!
//! ```
//! use spamprep::analysis::TextNormalizer;
//! use spamprep::feature::TfIdfVectorizer;
//!
//! let normalizer = TextNormalizer::new();
//! let corpus: Vec<String> = ["Win cash now!!!", "Call me later", "win cash NOW"]
//!     .iter()
//!     .map(|text| normalizer.normalize(text).unwrap())
//!     .collect();
//! assert_eq!(corpus, vec!["win cash", "call later", "win cash"]);
//!
//! let vectorizer = TfIdfVectorizer::new().with_max_features(10).fit(&corpus).unwrap();
//! assert_eq!(vectorizer.feature_names(), &["call", "cash", "later", "win"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod feature;
pub mod pipeline;
pub mod preprocessing;

pub mod prelude {
    pub use crate::analysis::TextNormalizer;
    pub use crate::config::PipelineConfig;
    pub use crate::dataset::{ProcessedRecord, Record};
    pub use crate::error::{Result, SpamprepError};
    pub use crate::feature::{FeatureMatrix, FittedTfIdfVectorizer, TfIdfVectorizer};
    pub use crate::preprocessing::{FittedLabelEncoder, LabelEncoder};
}
