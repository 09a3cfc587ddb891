//! Line-oriented plain-text (.txt) reading.

use std::path::Path;

use icd_model::{DIAGNOSIS_COLUMN, Dataset};

use crate::error::{IngestError, Result};
use crate::normalize::normalize_cell;

/// Read a plain-text file as one diagnosis code per line.
///
/// There is no header row in the file; a single `Diagnosis` column is
/// synthesized. Blank lines are skipped.
pub fn read_text(path: &Path) -> Result<Dataset> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows: Vec<Vec<String>> = contents
        .lines()
        .map(normalize_cell)
        .filter(|line| !line.is_empty())
        .map(|line| vec![line])
        .collect();

    Ok(Dataset::new(vec![DIAGNOSIS_COLUMN.to_string()], rows))
}
