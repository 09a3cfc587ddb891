#![deny(unsafe_code)]

use icd_model::CodeRange;

use crate::chapters::{CategoryRange, chapters};

/// Find the chapter that fully contains the queried range.
///
/// Chapters are scanned in declaration order and the first match wins; the
/// table is disjoint, so at most one chapter can contain a given range. A
/// range spanning two chapters matches neither and reports `None`, which is
/// an expected outcome rather than an error.
pub fn classify_range(range: &CodeRange) -> Option<&'static CategoryRange> {
    chapters().iter().find(|chapter| chapter.contains_range(range))
}
