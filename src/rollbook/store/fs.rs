use super::{parse_records, render_records, RecordStore};
use crate::error::{RollbookError, Result};
use crate::model::Student;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Stores the roster in a single delimited text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RollbookError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("students");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    fn write_tmp(&self, tmp: &Path, content: &str) -> Result<()> {
        let mut file = File::create(tmp).map_err(RollbookError::Io)?;
        file.write_all(content.as_bytes())
            .map_err(RollbookError::Io)?;
        file.sync_all().map_err(RollbookError::Io)?;
        Ok(())
    }

    /// Renames `tmp` over the target. If the first rename fails, removes the
    /// target and tries once more.
    fn replace_target(&self, tmp: &Path) -> Result<()> {
        let first = match fs::rename(tmp, &self.path) {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        warn!(
            path = %self.path.display(),
            error = %first,
            "rename over target failed, removing target and retrying"
        );
        let _ = fs::remove_file(&self.path);
        fs::rename(tmp, &self.path).map_err(RollbookError::Io)
    }
}

impl RecordStore for FileStore {
    fn load(&self) -> Result<Vec<Student>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RollbookError::Io(e)),
        };
        let students = parse_records(&content);
        debug!(path = %self.path.display(), count = students.len(), "loaded records");
        Ok(students)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let tmp = self.tmp_path(&dir);
        let content = render_records(students);

        let outcome = self
            .write_tmp(&tmp, &content)
            .and_then(|_| self.replace_target(&tmp));
        if outcome.is_err() {
            let _ = fs::remove_file(&tmp);
        } else {
            debug!(path = %self.path.display(), count = students.len(), "saved records");
        }
        outcome
    }
}
