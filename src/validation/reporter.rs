use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::models::{AuditFailure, AuditResult, FileError};

/// Collects failures per file path for a whole run.
///
/// Each path gets exactly one `FileError`, kept in first-seen order.
#[derive(Debug, Default)]
pub struct Reporter {
    files: Vec<FileError>,
    index: HashMap<PathBuf, usize>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &Path, failure: AuditFailure) {
        let index = match self.index.get(path) {
            Some(&index) => index,
            None => {
                self.files.push(FileError::new(path));
                self.index.insert(path.to_path_buf(), self.files.len() - 1);
                self.files.len() - 1
            }
        };
        self.files[index].failures.push(failure);
    }

    pub fn record_all(&mut self, path: &Path, failures: impl IntoIterator<Item = AuditFailure>) {
        for failure in failures {
            self.record(path, failure);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn finalize(self) -> AuditResult {
        AuditResult::from_files(self.files)
    }
}
