//! Dense feature matrix with an optional label column.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpamprepError};

/// Name of the trailing label column in persisted matrices.
pub const LABEL_COLUMN: &str = "label";

/// Rows of feature weights sharing one column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureMatrix {
    feature_names: Vec<String>,
    rows: Vec<Vec<f64>>,
    labels: Option<Vec<u32>>,
}

impl FeatureMatrix {
    /// Create a matrix without labels. Every row must have one value per
    /// feature name.
    pub fn new(feature_names: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let width = feature_names.len();
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(SpamprepError::schema(format!(
                "row {index} has {} values, expected {width}",
                row.len()
            )));
        }

        Ok(FeatureMatrix {
            feature_names,
            rows,
            labels: None,
        })
    }

    /// Attach one label per row.
    pub fn with_labels(mut self, labels: Vec<u32>) -> Result<Self> {
        if labels.len() != self.rows.len() {
            return Err(SpamprepError::schema(format!(
                "{} labels for {} rows",
                labels.len(),
                self.rows.len()
            )));
        }
        self.labels = Some(labels);
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// `(rows, feature columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_features())
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn labels(&self) -> Option<&[u32]> {
        self.labels.as_deref()
    }

    /// Column names for CSV output: `0..n-1`, then `label` when labels are
    /// attached.
    pub fn header(&self) -> Vec<String> {
        let mut header: Vec<String> = (0..self.n_features()).map(|i| i.to_string()).collect();
        if self.labels.is_some() {
            header.push(LABEL_COLUMN.to_string());
        }
        header
    }

    /// Rows rendered as CSV cells, label last when present.
    pub fn to_records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.rows.iter().enumerate().map(move |(index, row)| {
            let mut cells: Vec<String> = row.iter().map(|value| value.to_string()).collect();
            if let Some(labels) = &self.labels {
                cells.push(labels[index].to_string());
            }
            cells
        })
    }
}
