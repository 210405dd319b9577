//! Unicode word tokenizer implementation.
//!
//! Splits text using the Unicode word boundary rules (UAX #29). Unlike naive
//! whitespace splitting, punctuation glued to a word becomes its own token,
//! while word-internal apostrophes and decimal points stay inside the word:
//!
//! ```
//! use spamprep::analysis::tokenizer::Tokenizer;
//! use spamprep::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let texts: Vec<String> = tokenizer
//!     .tokenize("it's £3.50, ok!")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(texts, vec!["it's", "£", "3.50", ",", "ok", "!"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Every segment that is not pure whitespace is emitted, including
/// punctuation and symbol segments. Dropping those is left to the token
/// filters so that each normalization step stays observable on its own.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, segment)| !segment.chars().all(char::is_whitespace))
            .enumerate()
            .map(|(position, (start_offset, segment))| {
                Token::with_offsets(
                    segment,
                    position,
                    start_offset,
                    start_offset + segment.len(),
                )
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
