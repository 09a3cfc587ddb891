pub mod code;
pub mod dataset;
pub mod error;

pub use code::{CodeRange, DiagnosisCode};
pub use dataset::{DIAGNOSIS_COLUMN, Dataset};
pub use error::{ModelError, Result};
