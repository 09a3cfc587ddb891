//! Interactive submission loop.
//!
//! Prompts for a dataset path and a code range, processes the submission,
//! and repeats. Submission failures are rendered and the loop keeps going;
//! only end of input (or a blank path) ends the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::commands::{default_output_path, run_submission};
use crate::summary::print_outcome;

pub fn run_session() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Diagnosis Code Analyzer - blank dataset path quits.");
    loop {
        let Some(dataset) = prompt(&mut lines, "Dataset file (.xlsx, .csv, .txt): ")? else {
            break;
        };
        if dataset.is_empty() {
            break;
        }
        let Some(start) = prompt(&mut lines, "Start diagnosis code (e.g. 1A00): ")? else {
            break;
        };
        let Some(end) = prompt(&mut lines, "End diagnosis code (e.g. 1H0Z): ")? else {
            break;
        };

        let path = PathBuf::from(dataset);
        let export = default_output_path(&path);
        match run_submission(&path, &start, &end, Some(export)) {
            Ok(outcome) => print_outcome(&outcome),
            Err(error) => eprintln!("error: {error:#}"),
        }
        println!();
    }
    Ok(())
}

fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
