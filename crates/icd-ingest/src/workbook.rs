//! Spreadsheet (.xlsx) reading.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use icd_model::Dataset;

use crate::error::{IngestError, Result};
use crate::normalize::{normalize_cell, normalize_header};

/// Read the first worksheet of a workbook into a [`Dataset`].
///
/// The first row is the header row; every cell is stringified. Rows that are
/// entirely empty are dropped.
pub fn read_workbook(path: &Path) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut cells = range.rows();
    let headers: Vec<String> = match cells.next() {
        Some(row) => row
            .iter()
            .map(|cell| normalize_header(&cell_to_string(cell)))
            .collect(),
        None => Vec::new(),
    };
    let rows: Vec<Vec<String>> = cells
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|row| !row.iter().all(String::is_empty))
        .collect();

    Ok(Dataset::new(headers, rows))
}

/// Render a workbook cell the way it reads as text.
///
/// Whole-number floats drop the trailing `.0` so numeric-looking codes keep
/// their original digits.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => normalize_cell(value),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_float(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => format_float(value.as_f64()),
        Data::DateTimeIso(value) | Data::DurationIso(value) => value.clone(),
        Data::Error(value) => value.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
