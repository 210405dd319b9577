//! Feature extraction: TF-IDF vectorization into dense matrices.

pub mod matrix;
pub mod tfidf;

pub use matrix::{FeatureMatrix, LABEL_COLUMN};
pub use tfidf::{FittedTfIdfVectorizer, Norm, TfIdfVectorizer, VectorizerState};
