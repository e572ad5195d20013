//! Identifier validation commands: `check` and `dv`.

use anyhow::Result;

use rutcheck::rut::{self, ValidationResult};

use crate::formatters;

/// Validate each value, print one line per outcome, exit non-zero if any
/// value failed.
pub fn cmd_check(values: &[String], json: bool, quiet: bool) -> Result<()> {
    let results: Vec<ValidationResult> =
        values.iter().map(|v| rut::validate_detailed(v)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if !quiet {
        for (value, result) in values.iter().zip(&results) {
            println!("{}", formatters::format_check_line(value, result));
        }
    }

    if results.iter().any(|r| !r.valid) {
        std::process::exit(1);
    }

    Ok(())
}

/// Compute the check digit for a numeric body and print the completed
/// identifier (or just the verifier with --bare).
pub fn cmd_dv(body: &str, bare: bool) -> Result<()> {
    let body = rut::normalize(body);

    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("body must contain only digits, e.g. 12345678");
    }

    let verifier = rut::compute_check_digit(&body);

    if bare {
        println!("{}", verifier);
    } else {
        println!("{}-{}", body, verifier);
    }

    Ok(())
}
