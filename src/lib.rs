//! # rutcheck - Chilean RUT validation
//!
//! Validation of Chilean national identifier numbers (RUT): normalization of
//! user-typed input, syntactic format checking, and modulus-11 check-digit
//! verification.
//!
//! ## Overview
//!
//! Everything lives in the [`rut`] module as pure functions. Each call is an
//! independent, synchronous computation with no I/O and no shared state, so
//! the library is safe to call from any number of threads without
//! coordination. Failure is always expressed through return values; nothing
//! here panics on user input.
//!
//! The host application decides what to do with an outcome - the bundled
//! `rutcheck` binary prints it, a web form might map it onto field styling.
//!
//! ## Example
//!
//! ```
//! use rutcheck::rut;
//!
//! // Punctuated and mixed-case input normalizes before checking
//! assert!(rut::validate("12.345.678-5"));
//! assert!(!rut::validate("18771667-9"));
//!
//! let result = rut::validate_detailed("18771667-9");
//! assert!(!result.valid);
//! assert_eq!(result.message, "check digit incorrect");
//! assert_eq!(result.normalized, "18771667-9");
//! ```

pub mod rut;
