use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("diagnosis code is empty: {0:?}")]
    EmptyDiagnosisCode(String),
    #[error("dataset has no Diagnosis column (found: {})", .headers.join(", "))]
    MissingDiagnosisColumn { headers: Vec<String> },
}

pub type Result<T> = std::result::Result<T, ModelError>;
