#![deny(unsafe_code)]

use crate::ModelError;

/// Header name of the diagnosis column, matched case-insensitively.
pub const DIAGNOSIS_COLUMN: &str = "Diagnosis";

/// An in-memory tabular dataset: one header row plus string-valued data rows.
///
/// Every cell is a string. Ragged rows are tolerated; a cell missing from a
/// short row reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the diagnosis column, if the dataset has one.
    pub fn diagnosis_index(&self) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(DIAGNOSIS_COLUMN))
    }

    /// Like [`Dataset::diagnosis_index`], but surfaces the headers that were
    /// actually present when the column is missing.
    pub fn require_diagnosis_index(&self) -> Result<usize, ModelError> {
        self.diagnosis_index()
            .ok_or_else(|| ModelError::MissingDiagnosisColumn {
                headers: self.headers.clone(),
            })
    }

    /// Cell value at `(row, column)`; the empty string for cells a ragged row
    /// does not carry.
    pub fn cell<'a>(&self, row: &'a [String], column: usize) -> &'a str {
        row.get(column).map(String::as_str).unwrap_or("")
    }
}
