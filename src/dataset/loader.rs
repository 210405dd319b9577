//! CSV readers for raw and processed datasets.
//!
//! The raw SMS dump uses `v1` for the label and `v2` for the message and
//! carries a few mostly-empty trailing columns, so rows are read flexibly and
//! only the two named columns are kept. Cells that are not valid UTF-8 are
//! decoded lossily instead of failing the whole file.

use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use log::debug;

use crate::dataset::record::{ProcessedRecord, Record};
use crate::error::{Result, SpamprepError};

/// Load labeled records from a CSV file with a header row.
///
/// Fails with [`SpamprepError::SourceNotFound`] when the file does not exist,
/// [`SpamprepError::Schema`] when a named column is absent and
/// [`SpamprepError::EmptySource`] when there are no data rows. An empty text
/// cell is loaded as `None`.
pub fn load_records<P: AsRef<Path>>(
    path: P,
    label_column: &str,
    text_column: &str,
) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SpamprepError::source_not_found(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.byte_headers()?.clone();
    let label_index = column_index(&headers, label_column, path)?;
    let text_index = column_index(&headers, text_column, path)?;

    let mut records = Vec::new();
    for (row, result) in reader.byte_records().enumerate() {
        let byte_record = result?;
        let label = cell(&byte_record, label_index).ok_or_else(|| {
            SpamprepError::schema(format!(
                "row {} of {} has no '{label_column}' value",
                row + 1,
                path.display()
            ))
        })?;
        let text = cell(&byte_record, text_index);

        records.push(Record { label, text });
    }

    if records.is_empty() {
        return Err(SpamprepError::empty_source(path.display().to_string()));
    }

    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load processed records (`target,text`) written by the preprocessing stage.
///
/// An empty text cell becomes `""`. A target that is not a label code is a
/// schema error.
pub fn load_processed<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessedRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(SpamprepError::source_not_found(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.byte_headers()?.clone();
    let target_index = column_index(&headers, "target", path)?;
    let text_index = column_index(&headers, "text", path)?;

    let mut records = Vec::new();
    for (row, result) in reader.byte_records().enumerate() {
        let byte_record = result?;
        let target = cell(&byte_record, target_index)
            .and_then(|value| value.trim().parse::<u32>().ok())
            .ok_or_else(|| {
                SpamprepError::schema(format!(
                    "row {} of {} has no valid 'target' code",
                    row + 1,
                    path.display()
                ))
            })?;
        let text = cell(&byte_record, text_index).unwrap_or_default();

        records.push(ProcessedRecord { target, text });
    }

    debug!(
        "Loaded {} processed records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

fn column_index(headers: &ByteRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| String::from_utf8_lossy(header).trim() == column)
        .ok_or_else(|| {
            SpamprepError::schema(format!(
                "column '{column}' not found in {}",
                path.display()
            ))
        })
}

/// A non-empty cell decoded as UTF-8, lossily.
fn cell(record: &ByteRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|bytes| !bytes.is_empty())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_records_with_trailing_columns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spam.csv");
        fs::write(
            &path,
            "v1,v2,,,\nham,Go until jurong point,,,\nspam,\"Free entry, win!\",,,\nham,\n",
        )
        .unwrap();

        let records = load_records(&path, "v1", "v2").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new("ham", "Go until jurong point"));
        assert_eq!(records[1], Record::new("spam", "Free entry, win!"));
        assert_eq!(records[2], Record::without_text("ham"));
    }

    #[test]
    fn test_load_records_lossy_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.csv");
        fs::write(&path, b"v1,v2\nspam,\xa3100 prize\n").unwrap();

        let records = load_records(&path, "v1", "v2").unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].text_or_empty().ends_with("100 prize"));
    }

    #[test]
    fn test_load_records_errors() {
        let dir = TempDir::new().unwrap();

        let missing = load_records(dir.path().join("nope.csv"), "v1", "v2");
        assert!(matches!(missing, Err(SpamprepError::SourceNotFound(_))));

        let path = dir.path().join("header_only.csv");
        fs::write(&path, "v1,v2\n").unwrap();
        let empty = load_records(&path, "v1", "v2");
        assert!(matches!(empty, Err(SpamprepError::EmptySource(_))));

        let path = dir.path().join("wrong_columns.csv");
        fs::write(&path, "label,message\nham,hi\n").unwrap();
        let schema = load_records(&path, "v1", "v2");
        assert!(matches!(schema, Err(SpamprepError::Schema(_))));
    }

    #[test]
    fn test_load_processed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("train_processed.csv");
        fs::write(&path, "target,text\n1,win cash\n0,\n").unwrap();

        let records = load_processed(&path).unwrap();

        assert_eq!(
            records,
            vec![ProcessedRecord::new(1, "win cash"), ProcessedRecord::new(0, "")]
        );

        fs::write(&path, "target,text\nspam,win cash\n").unwrap();
        assert!(matches!(
            load_processed(&path),
            Err(SpamprepError::Schema(_))
        ));
    }
}
