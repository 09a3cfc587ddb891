//! Delimited-text (.csv) reading.

use std::path::Path;

use csv::ReaderBuilder;

use icd_model::Dataset;

use crate::error::{IngestError, Result};
use crate::normalize::{normalize_cell, normalize_header};

/// Read a CSV file into a [`Dataset`].
///
/// The first record is the header row. Records may be ragged; rows that are
/// entirely empty are dropped.
pub fn read_delimited(path: &Path) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if index == 0 {
            headers = record.iter().map(normalize_header).collect();
            continue;
        }
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_csv(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn header_row_and_cells_are_normalized() {
        let (_dir, path) = write_csv("\u{feff}Patient, Diagnosis \nP-001, 1A00 \n");
        let dataset = read_delimited(&path).unwrap();
        assert_eq!(dataset.headers, vec!["Patient", "Diagnosis"]);
        assert_eq!(dataset.rows, vec![vec!["P-001", "1A00"]]);
    }

    #[test]
    fn empty_rows_are_dropped_and_ragged_rows_kept() {
        let (_dir, path) = write_csv("Diagnosis,Site\n1A00,Lagos\n,\n2B11\n");
        let dataset = read_delimited(&path).unwrap();
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[1], vec!["2B11"]);
    }

    #[test]
    fn header_only_file_yields_zero_records() {
        let (_dir, path) = write_csv("Diagnosis\n");
        let dataset = read_delimited(&path).unwrap();
        assert_eq!(dataset.headers, vec!["Diagnosis"]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_delimited(&dir.path().join("absent.csv")).is_err());
    }
}
