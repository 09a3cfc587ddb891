#![deny(unsafe_code)]

use icd_model::{CodeRange, Dataset, ModelError};

/// Keep exactly the rows whose `Diagnosis` value lies in `range`, inclusive,
/// preserving input order.
///
/// The pass is pure: the input dataset is untouched and the same input always
/// produces the same output. A degenerate range keeps nothing. The only
/// failure is a dataset without a `Diagnosis` column.
pub fn filter_dataset(dataset: &Dataset, range: &CodeRange) -> Result<Dataset, ModelError> {
    let column = dataset.require_diagnosis_index()?;
    let rows: Vec<Vec<String>> = dataset
        .rows
        .iter()
        .filter(|row| range.contains(dataset.cell(row, column)))
        .cloned()
        .collect();
    Ok(Dataset::new(dataset.headers.clone(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes_dataset(codes: &[&str]) -> Dataset {
        Dataset::new(
            vec!["Diagnosis".to_string()],
            codes.iter().map(|code| vec![(*code).to_string()]).collect(),
        )
    }

    fn range(start: &str, end: &str) -> CodeRange {
        CodeRange::parse(start, end).unwrap()
    }

    #[test]
    fn rows_inside_the_range_are_kept_in_order() {
        let dataset = codes_dataset(&["1A00", "9Z99", "1B50"]);
        let filtered = filter_dataset(&dataset, &range("1A00", "1H0Z")).unwrap();
        assert_eq!(filtered.rows, vec![vec!["1A00"], vec!["1B50"]]);
    }

    #[test]
    fn bounds_are_inclusive_and_neighbors_excluded() {
        let dataset = codes_dataset(&["1A01", "2A00", "1H0Z"]);
        let filtered = filter_dataset(&dataset, &range("1A00", "1H0Z")).unwrap();
        assert_eq!(filtered.rows, vec![vec!["1A01"], vec!["1H0Z"]]);
    }

    #[test]
    fn other_columns_are_carried_through_untouched() {
        let dataset = Dataset::new(
            vec!["Patient".to_string(), "Diagnosis".to_string()],
            vec![
                vec!["P-001".to_string(), "1A00".to_string()],
                vec!["P-002".to_string(), "9Z99".to_string()],
            ],
        );
        let filtered = filter_dataset(&dataset, &range("1A00", "1H0Z")).unwrap();
        assert_eq!(filtered.headers, dataset.headers);
        assert_eq!(filtered.rows, vec![vec!["P-001", "1A00"]]);
    }

    #[test]
    fn empty_dataset_filters_to_empty_without_error() {
        let dataset = codes_dataset(&[]);
        let filtered = filter_dataset(&dataset, &range("1A00", "1H0Z")).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn degenerate_range_filters_to_empty() {
        let dataset = codes_dataset(&["1A00", "1B50"]);
        let filtered = filter_dataset(&dataset, &range("1H0Z", "1A00")).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn missing_diagnosis_column_is_an_error() {
        let dataset = Dataset::new(vec!["Code".to_string()], vec![vec!["1A00".to_string()]]);
        assert!(matches!(
            filter_dataset(&dataset, &range("1A00", "1H0Z")),
            Err(ModelError::MissingDiagnosisColumn { .. })
        ));
    }

    #[test]
    fn filtering_a_filter_result_is_a_fixpoint() {
        let dataset = codes_dataset(&["1A00", "9Z99", "1B50", "2A00"]);
        let bounds = range("1A00", "1H0Z");
        let once = filter_dataset(&dataset, &bounds).unwrap();
        let twice = filter_dataset(&once, &bounds).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn rows_missing_the_diagnosis_cell_are_excluded() {
        let dataset = Dataset::new(
            vec!["Patient".to_string(), "Diagnosis".to_string()],
            vec![
                vec!["P-001".to_string(), "1A00".to_string()],
                vec!["P-002".to_string()],
            ],
        );
        let filtered = filter_dataset(&dataset, &range("1A00", "1H0Z")).unwrap();
        assert_eq!(filtered.rows.len(), 1);
    }
}
