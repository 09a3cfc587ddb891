#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// An alphanumeric diagnosis identifier (e.g. `1A00`).
///
/// Construction trims surrounding whitespace and upper-cases ASCII letters so
/// user input compares the same way regardless of how it was typed. Ordering
/// is the plain byte-wise string ordering; codes are never interpreted
/// numerically.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DiagnosisCode(String);

impl DiagnosisCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyDiagnosisCode(value));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosisCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An inclusive code interval `[start, end]`.
///
/// A degenerate interval (`start > end`) is representable; filtering with one
/// matches nothing, which callers treat as an ordinary empty result.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CodeRange {
    pub start: DiagnosisCode,
    pub end: DiagnosisCode,
}

impl CodeRange {
    pub fn new(start: DiagnosisCode, end: DiagnosisCode) -> Self {
        Self { start, end }
    }

    /// Parse a range from raw user input.
    pub fn parse(start: &str, end: &str) -> Result<Self, ModelError> {
        Ok(Self::new(DiagnosisCode::new(start)?, DiagnosisCode::new(end)?))
    }

    pub fn is_degenerate(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive membership test under byte-wise string ordering.
    pub fn contains(&self, value: &str) -> bool {
        self.start.as_str() <= value && value <= self.end.as_str()
    }
}

impl fmt::Display for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
