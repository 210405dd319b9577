//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the whole input string before it reaches the
//! tokenizer, so they can apply transforms that must see the text as a whole
//! (case folding the entire message, for instance).
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware case folding

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseCharFilter;
