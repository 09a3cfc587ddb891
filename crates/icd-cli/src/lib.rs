//! CLI library components for the Diagnosis Code Analyzer.

pub mod logging;
