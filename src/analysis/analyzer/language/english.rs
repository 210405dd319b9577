use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// English message cleaning: lowercase, split on word boundaries, keep
/// alphanumeric tokens, drop stop words and punctuation, then Porter stem.
#[derive(Clone)]
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Same pipeline with a caller-supplied stop filter.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("english");

        Self { inner: analyzer }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_english_analyzer() {
        let analyzer = EnglishAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("Hello the world and test")
            .unwrap()
            .collect();

        // "the" and "and" should be filtered out
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_sms_messages() {
        let analyzer = EnglishAnalyzer::new();

        assert_eq!(
            analyzer.analyze_to_strings("Win cash now!!!").unwrap(),
            vec!["win", "cash"]
        );
        assert_eq!(
            analyzer.analyze_to_strings("Call me later").unwrap(),
            vec!["call", "later"]
        );
        assert_eq!(
            analyzer
                .analyze_to_strings("It's FREE: claim £3.50 prizes 2day")
                .unwrap(),
            vec!["free", "claim", "prize", "2day"]
        );
    }

    #[test]
    fn test_custom_stop_words() {
        let analyzer = EnglishAnalyzer::with_stop_filter(StopFilter::from_words(vec!["cash"]));

        assert_eq!(
            analyzer.analyze_to_strings("win cash now").unwrap(),
            vec!["win", "now"]
        );
    }

    #[test]
    fn test_english_analyzer_name() {
        let analyzer = EnglishAnalyzer::new();

        assert_eq!(analyzer.name(), "english");
    }
}
