//! Text analysis module for spamprep.
//!
//! This module provides tokenization, token filtering and the analysis
//! pipelines built from them. Two pipelines matter to the rest of the crate:
//! the [`EnglishAnalyzer`] behind [`TextNormalizer`], which cleans raw SMS
//! messages, and the [`StandardAnalyzer`], which splits cleaned text into
//! vocabulary terms for the TF-IDF vectorizer.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer, StandardAnalyzer};
pub use char_filter::{CharFilter, LowercaseCharFilter};
pub use normalizer::TextNormalizer;
pub use token::{Token, TokenStream};
pub use token_filter::{AlphanumericFilter, Filter, PorterStemmer, StemFilter, Stemmer, StopFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer, UnicodeWordTokenizer};
