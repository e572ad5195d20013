//! RUT normalization and check-digit validation.
//!
//! A RUT is the Chilean national identifier: a 7-8 digit body, a hyphen, and
//! a single verifier character computed with a modulus-11 weighted checksum.
//! All functions here are pure and never panic on user input; malformed input
//! is reported through return values, never through errors.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Shape of a normalized RUT: 7 or 8 digit body, hyphen, verifier digit or K.
/// Anchored at both ends.
const RUT_PATTERN: &str = r"^[0-9]{7,8}-[0-9K]$";

/// Outcome of [`validate_detailed`].
///
/// `normalized` carries the input as it was actually checked, so callers can
/// echo the canonical form back to the user (or persist it) regardless of
/// how the value was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the identifier passed format and checksum validation
    pub valid: bool,
    /// Human-readable reason for the outcome
    pub message: String,
    /// The normalized identifier ("" when the input was empty)
    pub normalized: String,
}

/// Normalize a raw identifier: strip periods and whitespace, upper-case.
///
/// `"12.345.678-k"` becomes `"12345678-K"`. Empty input yields an empty
/// string. Idempotent.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check that a normalized identifier has the exact shape `DDDDDDDD-C`
/// (7 or 8 digits, hyphen, digit or `K`).
pub fn check_format(normalized: &str) -> bool {
    let re = match Regex::new(RUT_PATTERN) {
        Ok(r) => r,
        Err(_) => return false,
    };
    re.is_match(normalized)
}

/// Compute the verifier character for a numeric body.
///
/// Digits are weighted right-to-left with multipliers cycling 2 through 7;
/// the weighted sum is reduced modulo 11 and mapped to `'0'`-`'9'` or `'K'`.
/// Characters that are not ASCII digits contribute nothing; the validation
/// pipeline only passes bodies that already satisfied [`check_format`].
pub fn compute_check_digit(body: &str) -> char {
    let mut sum = 0u32;
    let mut multiplier = 2u32;

    for c in body.chars().rev() {
        if let Some(d) = c.to_digit(10) {
            sum += d * multiplier;
            multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
        }
    }

    // remainder is 0..=10, so 11 - remainder is 1..=11
    match 11 - sum % 11 {
        11 => '0',
        10 => 'K',
        n => char::from_digit(n, 10).unwrap_or('0'),
    }
}

/// Validate a raw identifier: normalize, check the shape, verify the
/// check digit. Empty input is invalid.
pub fn validate(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }

    let normalized = normalize(raw);
    if !check_format(&normalized) {
        return false;
    }

    // check_format guarantees exactly one hyphen
    match normalized.split_once('-') {
        Some((body, verifier)) => verifier.chars().next() == Some(compute_check_digit(body)),
        None => false,
    }
}

/// Validate a raw identifier and report the outcome with a message.
///
/// Same pipeline as [`validate`], but each failure point yields a
/// [`ValidationResult`] instead of collapsing to a boolean, so callers can
/// tell the user whether the problem was emptiness, shape, or the verifier.
pub fn validate_detailed(raw: &str) -> ValidationResult {
    if raw.is_empty() {
        return ValidationResult {
            valid: false,
            message: "identifier must not be empty".to_string(),
            normalized: String::new(),
        };
    }

    let normalized = normalize(raw);

    if !check_format(&normalized) {
        return ValidationResult {
            valid: false,
            message: "invalid format, expected DDDDDDDD-C".to_string(),
            normalized,
        };
    }

    if !validate(&normalized) {
        return ValidationResult {
            valid: false,
            message: "check digit incorrect".to_string(),
            normalized,
        };
    }

    ValidationResult {
        valid: true,
        message: "identifier valid".to_string(),
        normalized,
    }
}
