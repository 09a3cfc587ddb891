use std::path::PathBuf;

use icd_filter::FilterSummary;

/// Everything one processed submission produced, ready for display.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub dataset_path: PathBuf,
    pub summary: FilterSummary,
    pub export: Option<PathBuf>,
}
