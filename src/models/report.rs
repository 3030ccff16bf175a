//! Audit outcome types

use std::fmt::{self, Write as _};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error_utils::display_path;

/// A key whose translated value lost one or more placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderDiff {
    pub key: String,
    pub missing: Vec<String>,
}

impl fmt::Display for PlaceholderDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' does not contain [{}]", self.key, self.missing.join(", "))
    }
}

/// One reason a file failed the audit.
///
/// `Display` is the single report line for the category. The fields carry
/// the individual differences, which are logged rather than reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditFailure {
    #[error("Base language file not found.")]
    BaseFileMissing,

    #[error("Base language file contains a single % character.")]
    BaseStrayPercent { keys: Vec<String> },

    #[error("Directory could not be read: {reason}")]
    UnreadableDirectory { reason: String },

    #[error("File could not be parsed: {reason}")]
    ParseFailure { reason: String },

    #[error("Keys are not matched")]
    KeyMismatch {
        missing: Vec<String>,
        extra: Vec<String>,
    },

    #[error("Comments are not matched")]
    CommentMismatch {
        missing: Vec<(String, String)>,
        extra: Vec<(String, String)>,
    },

    #[error("Placeholders are not matched")]
    PlaceholderMismatch { diffs: Vec<PlaceholderDiff> },

    #[error("Contains a single % character")]
    StrayPercent { keys: Vec<String> },
}

/// All failures recorded against one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub path: PathBuf,
    pub failures: Vec<AuditFailure>,
}

impl FileError {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            failures: Vec::new(),
        }
    }

    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.failures.iter().map(ToString::to_string)
    }
}

/// Outcome of a whole run. No file errors means success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditResult {
    files: Vec<FileError>,
}

impl AuditResult {
    pub(crate) fn from_files(files: Vec<FileError>) -> Self {
        Self { files }
    }

    pub fn is_success(&self) -> bool {
        self.files.is_empty()
    }

    /// File errors in the order their paths were first seen
    pub fn files(&self) -> &[FileError] {
        &self.files
    }

    pub fn file(&self, path: &Path) -> Option<&FileError> {
        self.files.iter().find(|file| file.path == path)
    }

    /// Render the final report. Paths under `root` are shown relative to it.
    pub fn render(&self, root: Option<&Path>) -> String {
        if self.is_success() {
            return "✅ No errors found!\n".to_string();
        }

        let mut out = String::from("🚨 Errors found:\n");
        for file in &self.files {
            let _ = writeln!(out, "  {}:", display_path(&file.path, root));
            for message in file.messages() {
                let _ = writeln!(out, "    {message}");
            }
        }
        out
    }
}
