//! Dataset ingestion.
//!
//! Loads an uploaded dataset file into the in-memory [`Dataset`] model.
//! Three formats are accepted, dispatched on the file extension:
//!
//! - **`.xlsx`**: first worksheet, header row plus stringified cells
//! - **`.csv`**: header row plus data records
//! - **`.txt`**: one diagnosis code per line, `Diagnosis` header synthesized

pub mod delimited;
pub mod error;
pub mod format;
mod normalize;
pub mod text;
pub mod workbook;

pub use delimited::read_delimited;
pub use error::{IngestError, Result};
pub use format::FileFormat;
pub use text::read_text;
pub use workbook::read_workbook;

use std::path::Path;

use tracing::info;

use icd_model::Dataset;

/// Detect the format of `path` and load it into a [`Dataset`].
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let format = FileFormat::from_path(path)?;
    let dataset = match format {
        FileFormat::Workbook => read_workbook(path)?,
        FileFormat::Delimited => read_delimited(path)?,
        FileFormat::PlainText => read_text(path)?,
    };
    info!(
        path = %path.display(),
        format = %format,
        records = dataset.len(),
        "dataset loaded"
    );
    Ok(dataset)
}
