//! Tests for the public validation API: normalization behavior, format
//! checking, and check-digit arithmetic across body ranges.

use rutcheck::rut;

#[test]
fn test_known_valid_identifiers() {
    for input in [
        "18771667-5",
        "12345678-5",
        "1234567-4",
        "15007536-K",
        "10000004-0",
        "12.345.678-5",
        " 18771667-5 ",
        "15007536-k",
    ] {
        assert!(rut::validate(input), "expected {} to be valid", input);
    }
}

#[test]
fn test_known_invalid_identifiers() {
    for input in [
        "",
        "invalido",
        "18771667-9",  // wrong check digit
        "12345678-K",  // verifier for this body is 5
        "1234567-8",   // verifier for this body is 4
        "12345678",    // no verifier
        "123456-7",    // 6-digit body
        "123456789-1", // 9-digit body
        "12345678-",   // hyphen without verifier
        "1234a678-5",  // letter in body
    ] {
        assert!(!rut::validate(input), "expected {} to be invalid", input);
    }
}

#[test]
fn test_normalize_is_idempotent() {
    for raw in [
        "",
        "12.345.678-k",
        " 18 771 667 - 5 ",
        "invalido",
        "ALREADY-NORMAL",
        "1234567-4",
    ] {
        let once = rut::normalize(raw);
        assert_eq!(rut::normalize(&once), once, "normalize({:?}) not stable", raw);
    }
}

#[test]
fn test_validity_is_invariant_under_normalization() {
    for raw in [
        "12.345.678-5",
        "12345678-5",
        "18771667-9",
        "15007536-k",
        "invalido",
        " 1234567-4",
    ] {
        assert_eq!(
            rut::validate(&rut::normalize(raw)),
            rut::validate(raw),
            "normalization changed validity of {:?}",
            raw
        );
    }
}

#[test]
fn test_check_digit_codomain() {
    // 7-digit and 8-digit body sweeps: the verifier is always a digit or K
    for body in (1_000_000u32..1_000_500).chain(10_000_000..10_000_500) {
        let verifier = rut::compute_check_digit(&body.to_string());
        assert!(
            verifier.is_ascii_digit() || verifier == 'K',
            "body {} produced verifier {:?}",
            body,
            verifier
        );
    }
}

#[test]
fn test_constructed_identifiers_validate() {
    for body in (1_000_000u32..1_000_200).chain(99_999_900..100_000_000) {
        let verifier = rut::compute_check_digit(&body.to_string());
        let candidate = format!("{}-{}", body, verifier);
        assert!(
            rut::validate(&candidate),
            "constructed {} did not validate",
            candidate
        );
    }
}

#[test]
fn test_detailed_reports_format_error_not_checksum() {
    let result = rut::validate_detailed("invalido");
    assert!(!result.valid);
    assert_eq!(result.message, "invalid format, expected DDDDDDDD-C");
}

#[test]
fn test_detailed_empty_input() {
    let result = rut::validate_detailed("");
    assert!(!result.valid);
    assert_eq!(result.message, "identifier must not be empty");
    assert_eq!(result.normalized, "");
}

#[test]
fn test_detailed_success_carries_normalized_form() {
    let result = rut::validate_detailed("12.345.678-5");
    assert!(result.valid);
    assert_eq!(result.normalized, "12345678-5");
    assert_eq!(result.message, "identifier valid");
}

#[test]
fn test_detailed_checksum_error() {
    let result = rut::validate_detailed("12.345.678-6");
    assert!(!result.valid);
    assert_eq!(result.message, "check digit incorrect");
    assert_eq!(result.normalized, "12345678-6");
}
