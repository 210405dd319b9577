//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the interface shared by the
//! message normalizer and the TF-IDF vectorizer. Analyzers combine char
//! filters, a tokenizer and token filters to turn raw text into tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](super::standard::StandardAnalyzer) - Token pattern + lowercase, used for vectorizing
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//! - [`EnglishAnalyzer`](super::language::english::EnglishAnalyzer) - Message cleaning with stop words and stemming
//!
//! # Examples
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use spamprep::analysis::analyzer::Analyzer;
//! use spamprep::analysis::token::{Token, TokenStream};
//! use spamprep::error::Result;
//!
//! struct ShoutingAnalyzer;
//!
//! impl Analyzer for ShoutingAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .split_whitespace()
//!             .enumerate()
//!             .map(|(i, word)| Token::new(word.to_uppercase(), i))
//!             .collect();
//!         Ok(Box::new(tokens.into_iter()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "shouting"
//!     }
//! }
//!
//! let tokens: Vec<_> = ShoutingAnalyzer.analyze("free entry").unwrap().collect();
//! assert_eq!(tokens[0].text, "FREE");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can be shared by the
/// rayon workers normalizing a dataset.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This performs the complete analysis pipeline, including char filters,
    /// tokenization and all configured token filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for logs and debugging).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the token texts.
    fn analyze_to_strings(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
