//! Property tests for the range filter.

use proptest::prelude::*;

use icd_filter::filter_dataset;
use icd_model::{CodeRange, Dataset};

fn codes_dataset(codes: &[String]) -> Dataset {
    Dataset::new(
        vec!["Diagnosis".to_string()],
        codes.iter().map(|code| vec![code.clone()]).collect(),
    )
}

proptest! {
    #[test]
    fn filtering_is_idempotent(
        codes in prop::collection::vec("[0-9A-Z]{1,5}", 0..50),
        start in "[0-9A-Z]{1,5}",
        end in "[0-9A-Z]{1,5}",
    ) {
        let dataset = codes_dataset(&codes);
        let range = CodeRange::parse(&start, &end).unwrap();
        let once = filter_dataset(&dataset, &range).unwrap();
        let twice = filter_dataset(&once, &range).unwrap();
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn degenerate_range_filters_to_empty(
        codes in prop::collection::vec("[0-9A-Z]{1,5}", 0..50),
        a in "[0-9A-Z]{1,5}",
        b in "[0-9A-Z]{1,5}",
    ) {
        prop_assume!(a != b);
        let (start, end) = if a > b { (a, b) } else { (b, a) };
        let range = CodeRange::parse(&start, &end).unwrap();
        prop_assert!(range.is_degenerate());
        let filtered = filter_dataset(&codes_dataset(&codes), &range).unwrap();
        prop_assert!(filtered.is_empty());
    }

    #[test]
    fn filter_agrees_with_the_naive_predicate(
        codes in prop::collection::vec("[0-9A-Z]{1,5}", 0..50),
        start in "[0-9A-Z]{1,5}",
        end in "[0-9A-Z]{1,5}",
    ) {
        let dataset = codes_dataset(&codes);
        let range = CodeRange::parse(&start, &end).unwrap();
        let filtered = filter_dataset(&dataset, &range).unwrap();

        let expected: Vec<String> = codes
            .iter()
            .filter(|code| start.as_str() <= code.as_str() && code.as_str() <= end.as_str())
            .cloned()
            .collect();
        let actual: Vec<String> = filtered.rows.iter().map(|row| row[0].clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}
