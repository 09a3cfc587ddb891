//! ICD-11 chapter standards.
//!
//! The fixed table of top-level chapter ranges and the classifier that maps
//! a queried diagnosis-code range onto the chapter that fully contains it.

pub mod chapters;
pub mod classify;

pub use chapters::{CHAPTERS, CategoryRange, chapters};
pub use classify::classify_range;
