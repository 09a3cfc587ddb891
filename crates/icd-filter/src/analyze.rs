#![deny(unsafe_code)]

use icd_model::{CodeRange, Dataset, ModelError};
use icd_standards::{CategoryRange, classify_range};

use crate::filter::filter_dataset;

/// The result of one submission: the filtered subset plus everything the
/// caller needs to report on it.
#[derive(Debug, Clone)]
pub struct FilterSummary {
    /// The normalized range that was queried.
    pub range: CodeRange,
    /// The chapter fully containing the range, when one exists.
    pub category: Option<&'static CategoryRange>,
    /// Row count of the input dataset.
    pub total_records: usize,
    /// The rows inside the range, input order preserved.
    pub filtered: Dataset,
}

impl FilterSummary {
    pub fn matched_records(&self) -> usize {
        self.filtered.len()
    }
}

/// Classify the range and filter the dataset in one pass over the input.
///
/// A range no chapter contains is not an error; the summary simply carries
/// no category and filtering proceeds.
pub fn analyze_dataset(dataset: &Dataset, range: &CodeRange) -> Result<FilterSummary, ModelError> {
    let category = classify_range(range);
    let filtered = filter_dataset(dataset, range)?;
    Ok(FilterSummary {
        range: range.clone(),
        category,
        total_records: dataset.len(),
        filtered,
    })
}
