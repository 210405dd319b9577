//! Analyzer implementations that combine tokenizers and filters.

mod analyzer;
pub mod language;
mod pipeline;
mod standard;

pub use analyzer::Analyzer;
pub use language::english::EnglishAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;
