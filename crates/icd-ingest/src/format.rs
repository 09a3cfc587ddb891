//! Extension-based file format detection.

use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Supported dataset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.xlsx` spreadsheet workbook.
    Workbook,
    /// `.csv` delimited text with a header row.
    Delimited,
    /// `.txt` with one diagnosis code per line, no header.
    PlainText,
}

impl FileFormat {
    /// Detect the format from the file extension (case-insensitive).
    ///
    /// Anything other than the three supported extensions is rejected rather
    /// than guessed at.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(OsStr::to_str).unwrap_or("");
        if extension.eq_ignore_ascii_case("xlsx") {
            Ok(FileFormat::Workbook)
        } else if extension.eq_ignore_ascii_case("csv") {
            Ok(FileFormat::Delimited)
        } else if extension.eq_ignore_ascii_case("txt") {
            Ok(FileFormat::PlainText)
        } else {
            Err(IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
            })
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileFormat::Workbook => "workbook",
            FileFormat::Delimited => "delimited text",
            FileFormat::PlainText => "plain text",
        };
        f.write_str(label)
    }
}
