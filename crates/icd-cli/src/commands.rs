use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info_span, warn};

use icd_filter::analyze_dataset;
use icd_ingest::load_dataset;
use icd_model::CodeRange;
use icd_output::write_csv;
use icd_standards::chapters;

use crate::cli::AnalyzeArgs;
use crate::summary::{apply_table_style, header_cell};
use crate::types::AnalysisOutcome;

/// Default export filename, written next to the input dataset.
const DEFAULT_EXPORT_NAME: &str = "filtered_diagnosis.csv";

pub fn run_categories() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Start"),
        header_cell("End"),
    ]);
    apply_table_style(&mut table);
    for chapter in chapters() {
        table.add_row(vec![chapter.name, chapter.start, chapter.end]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisOutcome> {
    let export_to = if args.dry_run {
        None
    } else {
        Some(
            args.output
                .clone()
                .unwrap_or_else(|| default_output_path(&args.dataset)),
        )
    };
    run_submission(&args.dataset, &args.start, &args.end, export_to)
}

/// Process one submission: load, classify, filter, export.
///
/// Shared by the one-shot `analyze` command and the interactive session.
pub fn run_submission(
    dataset_path: &Path,
    start: &str,
    end: &str,
    export_to: Option<PathBuf>,
) -> Result<AnalysisOutcome> {
    let span = info_span!("submission", dataset = %dataset_path.display());
    let _guard = span.enter();

    let range = CodeRange::parse(start, end).context("parse diagnosis-code range")?;
    let dataset = load_dataset(dataset_path)
        .with_context(|| format!("load dataset {}", dataset_path.display()))?;
    let summary = analyze_dataset(&dataset, &range).context("filter dataset")?;
    if summary.category.is_none() {
        warn!(range = %summary.range, "range does not match any predefined category");
    }

    let export = match export_to {
        Some(path) => {
            write_csv(&summary.filtered, &path)
                .with_context(|| format!("write filtered rows to {}", path.display()))?;
            Some(path)
        }
        None => None,
    };

    Ok(AnalysisOutcome {
        dataset_path: dataset_path.to_path_buf(),
        summary,
        export,
    })
}

pub fn default_output_path(dataset: &Path) -> PathBuf {
    dataset.with_file_name(DEFAULT_EXPORT_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_export_lands_next_to_the_dataset() {
        assert_eq!(
            default_output_path(Path::new("/data/study/codes.txt")),
            Path::new("/data/study/filtered_diagnosis.csv")
        );
    }

    #[test]
    fn submission_filters_and_exports() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("codes.txt");
        std::fs::write(&input, "1A00\n9Z99\n1B50\n").unwrap();
        let export = dir.path().join("filtered.csv");

        let outcome = run_submission(&input, "1a00", "1h0z", Some(export.clone())).unwrap();

        assert_eq!(outcome.summary.total_records, 3);
        assert_eq!(outcome.summary.matched_records(), 2);
        assert_eq!(
            outcome.summary.category.unwrap().name,
            "Certain infectious or parasitic diseases"
        );
        assert_eq!(
            std::fs::read_to_string(&export).unwrap(),
            "Diagnosis\n1A00\n1B50\n"
        );
    }

    #[test]
    fn dry_submission_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("codes.txt");
        std::fs::write(&input, "1A00\n").unwrap();

        let outcome = run_submission(&input, "1A00", "1H0Z", None).unwrap();
        assert!(outcome.export.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn blank_code_fails_the_submission() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("codes.txt");
        std::fs::write(&input, "1A00\n").unwrap();
        assert!(run_submission(&input, "  ", "1H0Z", None).is_err());
    }

    #[test]
    fn unknown_extension_fails_the_submission() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("codes.parquet");
        std::fs::write(&input, "1A00\n").unwrap();
        assert!(run_submission(&input, "1A00", "1H0Z", None).is_err());
    }
}
