//! Message text normalizer.
//!
//! [`TextNormalizer`] turns one raw message into one cleaned string: the
//! tokens surviving its analyzer joined by single spaces. It has no state
//! besides the analyzer, so the same input always produces the same output
//! and records can be normalized in any order, or in parallel.
//!
//! # Examples
//!
//! ```
//! use spamprep::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new();
//!
//! assert_eq!(normalizer.normalize("Win cash now!!!").unwrap(), "win cash");
//! assert_eq!(normalizer.normalize("Call me later").unwrap(), "call later");
//! assert_eq!(normalizer.normalize_opt(None).unwrap(), "");
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;

/// Cleans raw message text with an owned analyzer.
#[derive(Clone)]
pub struct TextNormalizer {
    analyzer: Arc<dyn Analyzer>,
}

impl TextNormalizer {
    /// Create a normalizer backed by the [`EnglishAnalyzer`].
    pub fn new() -> Self {
        Self::english()
    }

    /// Create a normalizer backed by the [`EnglishAnalyzer`].
    pub fn english() -> Self {
        Self::with_analyzer(Arc::new(EnglishAnalyzer::new()))
    }

    /// Create a normalizer backed by any analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        TextNormalizer { analyzer }
    }

    /// The analyzer this normalizer runs.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Normalize a single message. Empty input gives an empty string.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let tokens = self.analyzer.analyze_to_strings(text)?;
        Ok(tokens.join(" "))
    }

    /// Normalize a message that may be missing. `None` is treated as the
    /// empty string.
    pub fn normalize_opt(&self, text: Option<&str>) -> Result<String> {
        self.normalize(text.unwrap_or_default())
    }

    /// Normalize a batch of messages, keeping input order.
    ///
    /// With `parallel` set, records are spread over the rayon thread pool.
    /// The output is identical either way.
    pub fn normalize_batch<S>(&self, texts: &[Option<S>], parallel: bool) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        if parallel {
            texts
                .par_iter()
                .map(|text| self.normalize_opt(text.as_ref().map(|s| s.as_ref())))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| self.normalize_opt(text.as_ref().map(|s| s.as_ref())))
                .collect()
        }
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
