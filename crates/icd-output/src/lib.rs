//! Filtered-dataset export.
//!
//! Serializes a [`Dataset`] back to delimited text, either to a file (the
//! downloadable result) or to an in-memory buffer. The header row is
//! preserved and rows are written in dataset order.

use std::io;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use icd_model::Dataset;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write csv {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to serialize csv: {0}")]
    Serialize(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Write `dataset` to `path` as CSV: header row first, then data rows.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    write_into(dataset, &mut writer).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `dataset` to CSV bytes in memory.
pub fn csv_bytes(dataset: &Dataset) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    write_into(dataset, &mut writer)?;
    writer
        .into_inner()
        .map_err(|error| OutputError::Serialize(io::Error::other(error.to_string()).into()))
}

fn write_into<W: io::Write>(dataset: &Dataset, writer: &mut csv::Writer<W>) -> csv::Result<()> {
    if !dataset.headers.is_empty() {
        writer.write_record(&dataset.headers)?;
    }
    for row in &dataset.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
