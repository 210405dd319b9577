//! Row types moved between pipeline stages.

use serde::{Deserialize, Serialize};

/// Header of the raw split files written by ingestion.
pub const RAW_HEADER: [&str; 2] = ["target", "text"];

/// A raw labeled message.
///
/// The text is optional because the source dump has rows with an empty
/// message cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Raw class label, e.g. `ham` or `spam`.
    pub label: String,
    /// Raw message text.
    pub text: Option<String>,
}

impl Record {
    pub fn new<L, T>(label: L, text: T) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        Record {
            label: label.into(),
            text: Some(text.into()),
        }
    }

    /// A record whose text cell is missing.
    pub fn without_text<L: Into<String>>(label: L) -> Self {
        Record {
            label: label.into(),
            text: None,
        }
    }

    /// The text, or `""` when missing.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// The CSV cells of this record in [`RAW_HEADER`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.label.clone(), self.text_or_empty().to_string()]
    }
}

/// A normalized message with its encoded label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRecord {
    /// Label code from the fitted label encoder.
    pub target: u32,
    /// Stems joined by single spaces.
    pub text: String,
}

impl ProcessedRecord {
    pub fn new<T: Into<String>>(target: u32, text: T) -> Self {
        ProcessedRecord {
            target,
            text: text.into(),
        }
    }

    /// The CSV cells of this record in [`RAW_HEADER`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![self.target.to_string(), self.text.clone()]
    }
}
