//! Batch validation of identifier lists.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use rutcheck::rut::{self, ValidationResult};

use crate::formatters;

/// Outcome counts for a batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Validate every non-empty line of `input`, returning per-line results and
/// counts. Lines are trimmed before validation; blank lines are skipped.
pub fn validate_lines(input: &str) -> (Vec<(String, ValidationResult)>, BatchSummary) {
    let mut results = Vec::new();
    let mut summary = BatchSummary::default();

    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = rut::validate_detailed(line);
        summary.total += 1;
        if result.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
        results.push((line.to_string(), result));
    }

    (results, summary)
}

/// Read batch input from a file, or from stdin when the path is `-`.
fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        if atty::is(atty::Stream::Stdin) {
            anyhow::bail!("no input piped to stdin; pass a file or pipe identifiers");
        }
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Failed to read input file: {}", file.display()))
    }
}

/// Validate one identifier per line, print outcomes and a count summary,
/// exit non-zero if any line failed.
pub fn cmd_batch(file: &Path, json: bool, quiet: bool) -> Result<()> {
    let input = read_input(file)?;
    let (results, summary) = validate_lines(&input);

    if json {
        let values: Vec<&ValidationResult> = results.iter().map(|(_, r)| r).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        if !quiet {
            for (value, result) in &results {
                println!("{}", formatters::format_check_line(value, result));
            }
            println!();
        }
        println!("{}", formatters::format_batch_summary(&summary));
    }

    if summary.invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}
