//! TF-IDF vectorizer for text feature extraction.
//!
//! [`TfIdfVectorizer`] holds configuration only. [`TfIdfVectorizer::fit`]
//! builds the vocabulary and IDF weights from a training corpus and returns
//! a [`FittedTfIdfVectorizer`], the only type that can transform. Its
//! `transform` borrows it immutably, so the vocabulary cannot change after
//! fitting and every corpus it transforms gets the same columns.
//!
//! Weighting:
//!
//! - `tf(t, d)` is the raw count of `t` in `d`
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
//! - rows are scaled to unit L2 norm unless [`Norm::None`] is chosen
//!
//! # Examples
//!
//! ```
//! use spamprep::feature::tfidf::TfIdfVectorizer;
//!
//! let corpus = ["win cash", "call later", "win cash"];
//! let vectorizer = TfIdfVectorizer::new().with_max_features(10);
//! let fitted = vectorizer.fit(&corpus).unwrap();
//!
//! assert_eq!(fitted.feature_names(), ["call", "cash", "later", "win"]);
//!
//! let matrix = fitted.transform(&["free cash"]).unwrap();
//! assert_eq!(matrix.n_features(), 4);
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::tokenizer::regex::DEFAULT_TOKEN_PATTERN;
use crate::error::{Result, SpamprepError};
use crate::feature::matrix::FeatureMatrix;

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale each row to unit Euclidean length.
    #[default]
    L2,
    /// Keep raw TF-IDF weights.
    None,
}

/// Unfitted TF-IDF vectorizer.
#[derive(Clone)]
pub struct TfIdfVectorizer {
    max_features: Option<usize>,
    norm: Norm,
    /// `None` when a custom analyzer was supplied.
    token_pattern: Option<String>,
    /// Built from the default pattern at fit time when unset.
    analyzer: Option<Arc<dyn Analyzer>>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("max_features", &self.max_features)
            .field("norm", &self.norm)
            .field("token_pattern", &self.token_pattern)
            .field(
                "analyzer",
                &self.analyzer.as_ref().map_or("standard", |a| a.name()),
            )
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    /// Create a vectorizer with the default token pattern, L2 norm and an
    /// unbounded vocabulary.
    pub fn new() -> Self {
        TfIdfVectorizer {
            max_features: None,
            norm: Norm::L2,
            token_pattern: Some(DEFAULT_TOKEN_PATTERN.to_string()),
            analyzer: None,
        }
    }

    /// Keep at most `max_features` terms, the most frequent across the
    /// fitting corpus.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Extract terms with a different regex. Fails on an invalid pattern.
    pub fn with_token_pattern(mut self, pattern: &str) -> Result<Self> {
        self.analyzer = Some(Arc::new(StandardAnalyzer::with_token_pattern(pattern)?));
        self.token_pattern = Some(pattern.to_string());
        Ok(self)
    }

    /// Extract terms with any analyzer instead of a token pattern.
    ///
    /// A vectorizer fitted this way can still be saved, but
    /// [`FittedTfIdfVectorizer::load`] cannot rebuild its analyzer.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self.token_pattern = None;
        self
    }

    pub fn max_features(&self) -> Option<usize> {
        self.max_features
    }

    /// Learn the vocabulary and IDF weights from `corpus`.
    ///
    /// Terms are ranked by total count over the corpus, ties broken by the
    /// term itself, and the top `max_features` are kept. Columns are then
    /// ordered lexicographically. An empty corpus, or one without a single
    /// term, is an analysis error.
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) -> Result<FittedTfIdfVectorizer> {
        if corpus.is_empty() {
            return Err(SpamprepError::analysis("cannot fit on an empty corpus"));
        }
        if self.max_features == Some(0) {
            return Err(SpamprepError::config("max_features must be at least 1"));
        }

        let analyzer: Arc<dyn Analyzer> = match &self.analyzer {
            Some(analyzer) => analyzer.clone(),
            None => Arc::new(StandardAnalyzer::new()?),
        };

        let mut term_counts: AHashMap<String, usize> = AHashMap::new();
        let mut document_frequency: AHashMap<String, usize> = AHashMap::new();

        for doc in corpus {
            let tokens = analyzer.analyze_to_strings(doc.as_ref())?;
            let mut unique_tokens = AHashSet::with_capacity(tokens.len());

            for token in tokens {
                *term_counts.entry(token.clone()).or_insert(0) += 1;
                unique_tokens.insert(token);
            }
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        if term_counts.is_empty() {
            return Err(SpamprepError::analysis(
                "empty vocabulary; the corpus contains no terms",
            ));
        }

        let distinct_terms = term_counts.len();
        let mut ranked: Vec<(String, usize)> = term_counts.into_iter().collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(max_features) = self.max_features {
            ranked.truncate(max_features);
        }

        let mut feature_names: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        feature_names.sort_unstable();

        // IDF = ln((N + 1) / (df + 1)) + 1
        let n_documents = corpus.len();
        let idf = feature_names
            .iter()
            .map(|term| {
                let df = document_frequency.get(term).copied().unwrap_or(0);
                ((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0
            })
            .collect();

        debug!(
            "Vectorizer fitted with {} features ({} distinct terms, {} documents)",
            feature_names.len(),
            distinct_terms,
            n_documents
        );

        Ok(FittedTfIdfVectorizer::from_parts(
            feature_names,
            idf,
            n_documents,
            self.norm,
            self.token_pattern.clone(),
            analyzer,
        ))
    }

    /// Fit on `corpus` and transform it.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        corpus: &[S],
    ) -> Result<(FittedTfIdfVectorizer, FeatureMatrix)> {
        let fitted = self.fit(corpus)?;
        let matrix = fitted.transform(corpus)?;
        Ok((fitted, matrix))
    }
}

/// TF-IDF vectorizer with a frozen vocabulary.
#[derive(Clone)]
pub struct FittedTfIdfVectorizer {
    feature_names: Vec<String>,
    vocabulary: AHashMap<String, usize>,
    idf: Vec<f64>,
    n_documents: usize,
    norm: Norm,
    token_pattern: Option<String>,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for FittedTfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FittedTfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("norm", &self.norm)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

/// Persisted form of a fitted vectorizer.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizerState {
    pub feature_names: Vec<String>,
    pub idf: Vec<f64>,
    pub n_documents: usize,
    pub norm: Norm,
    pub token_pattern: Option<String>,
}

impl FittedTfIdfVectorizer {
    fn from_parts(
        feature_names: Vec<String>,
        idf: Vec<f64>,
        n_documents: usize,
        norm: Norm,
        token_pattern: Option<String>,
        analyzer: Arc<dyn Analyzer>,
    ) -> Self {
        let vocabulary = feature_names
            .iter()
            .enumerate()
            .map(|(column, term)| (term.clone(), column))
            .collect();

        FittedTfIdfVectorizer {
            feature_names,
            vocabulary,
            idf,
            n_documents,
            norm,
            token_pattern,
            analyzer,
        }
    }

    /// Turn each document into one row of weights over the fitted vocabulary.
    ///
    /// Terms outside the vocabulary are ignored; an empty document gives an
    /// all-zero row.
    pub fn transform<S: AsRef<str>>(&self, corpus: &[S]) -> Result<FeatureMatrix> {
        let rows = corpus
            .iter()
            .map(|doc| self.transform_one(doc.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        FeatureMatrix::new(self.feature_names.clone(), rows)
    }

    /// Transform a single document into a feature row.
    pub fn transform_one(&self, document: &str) -> Result<Vec<f64>> {
        let mut row = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for token in self.analyzer.analyze(document)? {
            if let Some(&column) = self.vocabulary.get(&token.text) {
                row[column] += 1.0;
            }
        }

        // Apply IDF
        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        if self.norm == Norm::L2 {
            let length = row.iter().map(|value| value * value).sum::<f64>().sqrt();
            if length > 0.0 {
                for value in &mut row {
                    *value /= length;
                }
            }
        }

        Ok(row)
    }

    /// Term to column index.
    pub fn vocabulary(&self) -> &AHashMap<String, usize> {
        &self.vocabulary
    }

    /// Column index to term.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// IDF weight per column.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of documents the vocabulary was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn norm(&self) -> Norm {
        self.norm
    }

    /// The token pattern, or `None` for a custom analyzer.
    pub fn token_pattern(&self) -> Option<&str> {
        self.token_pattern.as_deref()
    }

    /// Serializable snapshot of the fitted state.
    pub fn state(&self) -> VectorizerState {
        VectorizerState {
            feature_names: self.feature_names.clone(),
            idf: self.idf.clone(),
            n_documents: self.n_documents,
            norm: self.norm,
            token_pattern: self.token_pattern.clone(),
        }
    }

    /// Rebuild a fitted vectorizer from a snapshot.
    ///
    /// The snapshot must name a token pattern; vectorizers fitted with a
    /// custom analyzer cannot be restored this way.
    pub fn from_state(state: VectorizerState) -> Result<Self> {
        let pattern = state.token_pattern.ok_or_else(|| {
            SpamprepError::schema("vectorizer state has no token pattern to rebuild its analyzer")
        })?;
        if state.feature_names.len() != state.idf.len() {
            return Err(SpamprepError::schema(format!(
                "{} feature names but {} idf weights",
                state.feature_names.len(),
                state.idf.len()
            )));
        }

        let analyzer = Arc::new(StandardAnalyzer::with_token_pattern(&pattern)?);
        Ok(Self::from_parts(
            state.feature_names,
            state.idf,
            state.n_documents,
            state.norm,
            Some(pattern),
            analyzer,
        ))
    }

    /// Write the fitted state as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.state())?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a vectorizer written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_state(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::analysis::analyzer::EnglishAnalyzer;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_tfidf_vectorizer() {
        let corpus = vec!["win cash", "call later", "win cash"];
        let fitted = TfIdfVectorizer::new()
            .with_max_features(10)
            .fit(&corpus)
            .unwrap();

        assert_eq!(fitted.feature_names(), ["call", "cash", "later", "win"]);
        assert_eq!(fitted.vocabulary_size(), 4);
        assert_eq!(fitted.vocabulary()["win"], 3);
        assert_eq!(fitted.n_documents(), 3);

        // win and cash appear in 2 of 3 documents, call and later in 1.
        assert_close(fitted.idf()[1], (4.0_f64 / 3.0).ln() + 1.0);
        assert_close(fitted.idf()[0], 2.0_f64.ln() + 1.0);

        let matrix = fitted.transform(&corpus).unwrap();
        assert_eq!(matrix.shape(), (3, 4));

        let first = matrix.row(0).unwrap();
        assert_close(first[0], 0.0);
        assert_close(first[1], 1.0 / 2.0_f64.sqrt());
        assert_close(first[3], 1.0 / 2.0_f64.sqrt());
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let corpus = vec!["win win cash", "cash prize", "call"];
        let fitted = TfIdfVectorizer::new()
            .with_max_features(3)
            .fit(&corpus)
            .unwrap();

        // cash and win tie at 2; call beats prize on the tie at 1.
        assert_eq!(fitted.feature_names(), ["call", "cash", "win"]);
    }

    #[test]
    fn test_column_count_is_bounded() {
        let corpus = vec!["free entry in weekly comp", "nah dont think he goes"];
        let fitted = TfIdfVectorizer::new().fit(&corpus).unwrap();
        assert_eq!(fitted.vocabulary_size(), 10);

        let bounded = TfIdfVectorizer::new()
            .with_max_features(50)
            .fit(&corpus)
            .unwrap();
        assert_eq!(bounded.vocabulary_size(), 10);
    }

    #[test]
    fn test_transform_never_grows_vocabulary() {
        let fitted = TfIdfVectorizer::new()
            .fit(&["win cash", "call later"])
            .unwrap();
        let before = fitted.feature_names().to_vec();

        let matrix = fitted
            .transform(&["free prize claim", "", "win free"])
            .unwrap();

        assert_eq!(fitted.feature_names(), before.as_slice());
        assert_eq!(matrix.shape(), (3, 4));
        assert!(matrix.row(0).unwrap().iter().all(|&v| v == 0.0));
        assert!(matrix.row(1).unwrap().iter().all(|&v| v == 0.0));
        // Only "win" is known, so the normalized row is a unit vector on it.
        assert_close(matrix.row(2).unwrap()[3], 1.0);
    }

    #[test]
    fn test_norm_none_keeps_raw_weights() {
        let fitted = TfIdfVectorizer::new()
            .with_norm(Norm::None)
            .fit(&["win win", "cash"])
            .unwrap();

        let row = fitted.transform_one("win win win").unwrap();
        let idf_win = (3.0_f64 / 2.0).ln() + 1.0;
        assert_close(row[1], 3.0 * idf_win);
        assert_close(row[0], 0.0);
    }

    #[test]
    fn test_refit_is_not_additive() {
        let vectorizer = TfIdfVectorizer::new();
        let first = vectorizer.fit(&["win cash"]).unwrap();
        let second = vectorizer.fit(&["call later"]).unwrap();

        assert_eq!(first.feature_names(), ["cash", "win"]);
        assert_eq!(second.feature_names(), ["call", "later"]);
    }

    #[test]
    fn test_fit_errors() {
        let vectorizer = TfIdfVectorizer::new();

        let empty: Vec<&str> = Vec::new();
        assert!(matches!(
            vectorizer.fit(&empty),
            Err(SpamprepError::Analysis(_))
        ));
        assert!(matches!(
            vectorizer.fit(&["", "a b c"]),
            Err(SpamprepError::Analysis(_))
        ));
        assert!(TfIdfVectorizer::new().with_token_pattern("[").is_err());
    }

    #[test]
    fn test_custom_token_pattern_and_analyzer() {
        let fitted = TfIdfVectorizer::new()
            .with_token_pattern(r"\b\w+\b")
            .unwrap()
            .fit(&["u r a winner"])
            .unwrap();
        assert_eq!(fitted.feature_names(), ["a", "r", "u", "winner"]);

        let fitted = TfIdfVectorizer::new()
            .with_analyzer(Arc::new(EnglishAnalyzer::new()))
            .fit(&["Winning prizes now!"])
            .unwrap();
        assert_eq!(fitted.feature_names(), ["prize", "win"]);
        assert_eq!(fitted.token_pattern(), None);
    }

    #[test]
    fn test_fit_transform_matches_fit_then_transform() {
        let corpus = vec!["win cash", "call later", "cash prize"];
        let vectorizer = TfIdfVectorizer::new();

        let (fitted, matrix) = vectorizer.fit_transform(&corpus).unwrap();
        assert_eq!(matrix, fitted.transform(&corpus).unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vectorizer.json");
        let fitted = TfIdfVectorizer::new()
            .with_max_features(3)
            .fit(&["win cash now", "call me later"])
            .unwrap();

        fitted.save(&path).unwrap();
        let loaded = FittedTfIdfVectorizer::load(&path).unwrap();

        assert_eq!(loaded.feature_names(), fitted.feature_names());
        assert_eq!(loaded.idf(), fitted.idf());
        assert_eq!(
            loaded.transform_one("win cash").unwrap(),
            fitted.transform_one("win cash").unwrap()
        );
    }

    #[test]
    fn test_custom_analyzer_state_cannot_be_restored() {
        let fitted = TfIdfVectorizer::new()
            .with_analyzer(Arc::new(EnglishAnalyzer::new()))
            .fit(&["win cash"])
            .unwrap();

        assert!(matches!(
            FittedTfIdfVectorizer::from_state(fitted.state()),
            Err(SpamprepError::Schema(_))
        ));
    }
}
