//! Label encoding with an explicit fitted state.
//!
//! [`LabelEncoder`] only knows how to fit. Fitting returns a
//! [`FittedLabelEncoder`], which owns the class list and is the only type
//! that can encode or decode, so an encoder can never be used before it has
//! seen its classes. Codes follow the ascending order of the class labels.
//!
//! # Examples
//!
//! ```
//! use spamprep::preprocessing::label_encoder::LabelEncoder;
//!
//! let encoder = LabelEncoder::new().fit(["spam", "ham", "spam"]).unwrap();
//!
//! assert_eq!(encoder.classes(), ["ham", "spam"]);
//! assert_eq!(encoder.transform(["ham", "spam"]).unwrap(), vec![0, 1]);
//! assert!(encoder.transform(["promo"]).is_err());
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamprepError};

/// Unfitted label encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelEncoder;

impl LabelEncoder {
    pub fn new() -> Self {
        LabelEncoder
    }

    /// Learn the distinct labels, sorted ascending.
    ///
    /// Fitting on no labels is an [`SpamprepError::EmptySource`] error.
    pub fn fit<I, S>(&self, labels: I) -> Result<FittedLabelEncoder>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();

        if classes.is_empty() {
            return Err(SpamprepError::empty_source(
                "cannot fit a label encoder on zero labels",
            ));
        }

        Ok(FittedLabelEncoder::from_sorted(classes.into_iter().collect()))
    }

    /// Fit on `labels` and encode them in one pass.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        labels: &[S],
    ) -> Result<(FittedLabelEncoder, Vec<u32>)> {
        let fitted = self.fit(labels)?;
        let codes = fitted.transform(labels)?;
        Ok((fitted, codes))
    }
}

/// Label encoder with a frozen class list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EncoderState", into = "EncoderState")]
pub struct FittedLabelEncoder {
    classes: Vec<String>,
    codes: AHashMap<String, u32>,
}

impl PartialEq for FittedLabelEncoder {
    fn eq(&self, other: &Self) -> bool {
        self.classes == other.classes
    }
}

/// Persisted form of a fitted encoder.
#[derive(Serialize, Deserialize)]
struct EncoderState {
    classes: Vec<String>,
}

impl TryFrom<EncoderState> for FittedLabelEncoder {
    type Error = SpamprepError;

    fn try_from(state: EncoderState) -> Result<Self> {
        if state.classes.is_empty() {
            return Err(SpamprepError::schema("label encoder has no classes"));
        }
        if state.classes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(SpamprepError::schema(
                "label encoder classes must be unique and sorted",
            ));
        }
        Ok(FittedLabelEncoder::from_sorted(state.classes))
    }
}

impl From<FittedLabelEncoder> for EncoderState {
    fn from(encoder: FittedLabelEncoder) -> Self {
        EncoderState {
            classes: encoder.classes,
        }
    }
}

impl FittedLabelEncoder {
    fn from_sorted(classes: Vec<String>) -> Self {
        let codes = classes
            .iter()
            .enumerate()
            .map(|(code, class)| (class.clone(), code as u32))
            .collect();

        FittedLabelEncoder { classes, codes }
    }

    /// Class labels in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Encode a single label.
    pub fn encode(&self, label: &str) -> Result<u32> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| SpamprepError::unmapped_label(format!("'{label}'")))
    }

    /// Decode a single code.
    pub fn decode(&self, code: u32) -> Result<&str> {
        self.classes
            .get(code as usize)
            .map(String::as_str)
            .ok_or_else(|| SpamprepError::unmapped_label(format!("code {code}")))
    }

    /// Encode labels. A label not seen while fitting is an
    /// [`SpamprepError::UnmappedLabel`] error.
    pub fn transform<I, S>(&self, labels: I) -> Result<Vec<u32>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.encode(label.as_ref()))
            .collect()
    }

    /// Decode codes back into labels.
    pub fn inverse_transform(&self, codes: &[u32]) -> Result<Vec<String>> {
        codes
            .iter()
            .map(|&code| self.decode(code).map(str::to_string))
            .collect()
    }

    /// Write the class list as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read an encoder written by [`save`](Self::save).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
