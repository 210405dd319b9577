//! Standard analyzer used to split cleaned text into vocabulary terms.
//!
//! The input is lowercased and terms are extracted with a token pattern,
//! [`DEFAULT_TOKEN_PATTERN`] unless another one is given. The default
//! pattern only matches runs of two or more word characters, so one-letter
//! words never become features.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter
//! 2. RegexTokenizer (token pattern)
//!
//! # Examples
//!
//! ```
//! use spamprep::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms = analyzer.analyze_to_strings("Win a FREE prize").unwrap();
//!
//! assert_eq!(terms, vec!["win", "free", "prize"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::regex::{DEFAULT_TOKEN_PATTERN, RegexTokenizer};
use crate::error::Result;

/// An analyzer that lowercases text and extracts terms with a token pattern.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
    pattern: String,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with the default token pattern.
    pub fn new() -> Result<Self> {
        Self::with_token_pattern(DEFAULT_TOKEN_PATTERN)
    }

    /// Create a standard analyzer with a custom token pattern.
    ///
    /// Fails with an analysis error when the pattern is not a valid regex.
    pub fn with_token_pattern(pattern: &str) -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::with_pattern(pattern)?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .with_name("standard");

        Ok(StandardAnalyzer {
            inner: analyzer,
            pattern: pattern.to_string(),
        })
    }

    /// The token pattern terms are extracted with.
    pub fn token_pattern(&self) -> &str {
        &self.pattern
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("pattern", &self.pattern)
            .field("inner", &self.inner)
            .finish()
    }
}
