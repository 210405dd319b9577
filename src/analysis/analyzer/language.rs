//! Language-specific analyzers.
//!
//! # Available Languages
//!
//! - [`english`] - SMS message cleaning with English stop words and Porter stemming
//!
//! # Examples
//!
//! ```
//! use spamprep::analysis::analyzer::Analyzer;
//! use spamprep::analysis::analyzer::language::english::EnglishAnalyzer;
//!
//! let analyzer = EnglishAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Hello the world").unwrap().collect();
//!
//! // "the" is filtered as a stop word
//! assert_eq!(tokens.len(), 2);
//! ```

pub mod english;
