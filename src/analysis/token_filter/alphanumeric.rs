//! Alphanumeric filter implementation.
//!
//! Keeps only tokens whose every character is a letter or a digit. This drops
//! standalone punctuation and symbols, and it also drops any token that mixes
//! letters with punctuation, such as `it's` or `3.50`. Those tokens are removed
//! whole; they are not repaired into `its` or `350`.
//!
//! ```
//! use spamprep::analysis::token_filter::{AlphanumericFilter, Filter};
//! use spamprep::analysis::token::Token;
//!
//! let tokens = vec![Token::new("it's", 0), Token::new("free", 1), Token::new("!", 2)];
//! let kept: Vec<_> = AlphanumericFilter::new()
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(kept, vec!["free"]);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens which are not purely alphanumeric.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }

    /// Check whether a word consists of letters and digits only.
    ///
    /// The empty string is not alphanumeric.
    pub fn is_alphanumeric(word: &str) -> bool {
        !word.is_empty() && word.chars().all(char::is_alphanumeric)
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| Self::is_alphanumeric(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_filter() {
        let filter = AlphanumericFilter::new();
        let tokens = vec![
            Token::new("free", 0),
            Token::new("!", 1),
            Token::new("3.50", 2),
            Token::new("2day", 3),
            Token::new("don't", 4),
            Token::new("£", 5),
            Token::new("café", 6),
        ];

        let result: Vec<String> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect();

        assert_eq!(result, vec!["free", "2day", "café"]);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(AlphanumericFilter::is_alphanumeric("abc123"));
        assert!(!AlphanumericFilter::is_alphanumeric(""));
        assert!(!AlphanumericFilter::is_alphanumeric("well-known"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AlphanumericFilter::new().name(), "alphanumeric");
    }
}
