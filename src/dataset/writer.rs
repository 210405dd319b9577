//! Staged output for stage results.
//!
//! A stage writes every table into a temporary file next to its final
//! location. Nothing replaces existing outputs until [`StagedOutput::commit`]
//! renames the temporary files into place, so a stage that fails halfway
//! leaves the previous outputs untouched. A commit that fails partway puts
//! the previous outputs back. Dropping a `StagedOutput` without committing
//! removes the temporary files.
//!
//! # Examples
//!
//! ```
//! use spamprep::dataset::writer::StagedOutput;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let mut output = StagedOutput::new(dir.path().join("raw")).unwrap();
//! output
//!     .stage_table("train.csv", ["target", "text"], vec![vec!["spam", "win cash"]])
//!     .unwrap();
//!
//! assert!(!dir.path().join("raw/train.csv").exists());
//! let written = output.commit().unwrap();
//! assert_eq!(written.len(), 1);
//! assert!(written[0].exists());
//! ```

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use tempfile::{NamedTempFile, TempPath};

use crate::error::Result;

/// Files staged in one directory, persisted together.
#[derive(Debug)]
pub struct StagedOutput {
    dir: PathBuf,
    staged: Vec<(PathBuf, NamedTempFile)>,
}

impl StagedOutput {
    /// Stage outputs into `dir`, creating it if needed.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        Ok(StagedOutput {
            dir,
            staged: Vec::new(),
        })
    }

    /// The directory outputs are committed to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Whether nothing has been staged yet.
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Stage a CSV table with a header row. Returns the number of data rows.
    pub fn stage_table<H, I, R>(&mut self, name: &str, header: H, rows: I) -> Result<usize>
    where
        H: IntoIterator,
        H::Item: AsRef<[u8]>,
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        let mut file = NamedTempFile::new_in(&self.dir)?;
        let mut count = 0;
        {
            let mut writer = csv::Writer::from_writer(file.as_file_mut());
            writer.write_record(header)?;
            for row in rows {
                writer.write_record(row)?;
                count += 1;
            }
            writer.flush()?;
        }

        debug!("Staged {count} rows for {name}");
        self.push(name, file);
        Ok(count)
    }

    /// Stage a value as pretty-printed JSON.
    pub fn stage_json<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
        let mut file = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        debug!("Staged {name}");
        self.push(name, file);
        Ok(())
    }

    /// Move every staged file to its final path and return those paths in
    /// staging order.
    ///
    /// Existing outputs are moved aside before anything is persisted. If one
    /// file fails, the files already moved in are removed and the previous
    /// outputs restored, so the directory never mixes old and new outputs.
    pub fn commit(self) -> Result<Vec<PathBuf>> {
        for (_, file) in &self.staged {
            file.as_file().sync_all()?;
        }

        let mut backups = Vec::new();
        let mut written = Vec::with_capacity(self.staged.len());
        if let Err(e) = persist_all(&self.dir, self.staged, &mut backups, &mut written) {
            warn!(
                "Commit to {} failed, restoring previous outputs",
                self.dir.display()
            );
            rollback(backups, &written);
            return Err(e);
        }

        debug!("Committed {} files to {}", written.len(), self.dir.display());
        Ok(written)
    }

    fn push(&mut self, name: &str, file: NamedTempFile) {
        let target = self.dir.join(name);
        // Restaging a name replaces the earlier temp file.
        self.staged.retain(|(existing, _)| existing != &target);
        self.staged.push((target, file));
    }
}

fn persist_all(
    dir: &Path,
    staged: Vec<(PathBuf, NamedTempFile)>,
    backups: &mut Vec<(PathBuf, TempPath)>,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for (target, _) in &staged {
        if target.is_file() {
            let backup = NamedTempFile::new_in(dir)?.into_temp_path();
            fs::rename(target, &backup)?;
            backups.push((target.clone(), backup));
        }
    }

    for (target, file) in staged {
        file.persist(&target).map_err(|e| e.error)?;
        written.push(target);
    }
    Ok(())
}

/// Undo a partial commit. Failures are logged; the commit error is what the
/// caller sees.
fn rollback(backups: Vec<(PathBuf, TempPath)>, written: &[PathBuf]) {
    for target in written {
        if backups.iter().any(|(original, _)| original == target) {
            continue;
        }
        if let Err(e) = fs::remove_file(target) {
            warn!("Failed to remove {}: {e}", target.display());
        }
    }

    for (target, backup) in backups {
        if let Err(e) = backup.persist(&target) {
            warn!("Failed to restore {}: {}", target.display(), e.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_commit_writes_tables_and_json() {
        let dir = TempDir::new().unwrap();
        let mut output = StagedOutput::new(dir.path().join("interim")).unwrap();

        let rows = vec![
            vec!["1".to_string(), "win cash".to_string()],
            vec!["0".to_string(), "call later".to_string()],
        ];
        let count = output
            .stage_table("train_processed.csv", ["target", "text"], rows)
            .unwrap();
        assert_eq!(count, 2);

        let mut classes = BTreeMap::new();
        classes.insert("ham", 0);
        output.stage_json("label_encoder.json", &classes).unwrap();
        assert_eq!(output.len(), 2);

        let written = output.commit().unwrap();
        assert_eq!(written.len(), 2);

        let csv = fs::read_to_string(dir.path().join("interim/train_processed.csv")).unwrap();
        assert_eq!(csv, "target,text\n1,win cash\n0,call later\n");

        let json = fs::read_to_string(dir.path().join("interim/label_encoder.json")).unwrap();
        assert!(json.contains("\"ham\": 0"));
    }

    #[test]
    fn test_drop_without_commit_leaves_previous_output() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("train.csv");
        fs::write(&target, "target,text\nham,old\n").unwrap();

        {
            let mut output = StagedOutput::new(dir.path()).unwrap();
            output
                .stage_table("train.csv", ["target", "text"], vec![vec!["spam", "new"]])
                .unwrap();
        }

        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "target,text\nham,old\n"
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_commit_restores_previous_outputs() {
        let dir = TempDir::new().unwrap();
        let train = dir.path().join("train.csv");
        fs::write(&train, "target,text\nham,old\n").unwrap();
        // A directory squatting on the last output name makes its rename fail.
        fs::create_dir(dir.path().join("vectorizer.json")).unwrap();

        let mut output = StagedOutput::new(dir.path()).unwrap();
        output
            .stage_table("train.csv", ["target", "text"], vec![vec!["spam", "new"]])
            .unwrap();
        output
            .stage_table("test.csv", ["target", "text"], vec![vec!["ham", "new"]])
            .unwrap();
        output.stage_json("vectorizer.json", &["win"]).unwrap();

        assert!(output.commit().is_err());
        assert_eq!(
            fs::read_to_string(&train).unwrap(),
            "target,text\nham,old\n"
        );
        assert!(!dir.path().join("test.csv").exists());

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["train.csv", "vectorizer.json"]);
    }

    #[test]
    fn test_restage_replaces() {
        let dir = TempDir::new().unwrap();
        let mut output = StagedOutput::new(dir.path()).unwrap();

        output
            .stage_table("test.csv", ["a"], vec![vec!["1"]])
            .unwrap();
        output
            .stage_table("test.csv", ["a"], vec![vec!["2"]])
            .unwrap();
        assert_eq!(output.len(), 1);

        output.commit().unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("test.csv")).unwrap(),
            "a\n2\n"
        );
    }
}
