//! Token filter implementations for token transformation.
//!
//! Filters take the token stream produced by a tokenizer and rewrite or drop
//! tokens. An analyzer applies them in the order they were added:
//!
//! ```text
//! Tokenizer → Alphanumeric → Stop Words → Stemmer
//! ```
//!
//! # Available Filters
//!
//! - [`alphanumeric::AlphanumericFilter`] - Drops tokens that are not purely alphanumeric
//! - [`stop::StopFilter`] - Removes stop words and punctuation tokens
//! - [`stem::StemFilter`] - Reduces words to their stem form

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod alphanumeric;
pub mod stem;
pub mod stop;

pub use alphanumeric::AlphanumericFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
