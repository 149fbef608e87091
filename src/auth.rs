//! # Write Authorization
//!
//! The only access control in the service: every mutating request must carry
//! the shared secret. Comparison is constant time so the check does not leak
//! prefix length on a timing side channel.

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Constant-time comparison of two strings
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}

/// Check a request-supplied secret against the configured one
///
/// A missing secret never matches.
pub fn secret_matches(provided: Option<&str>, expected: &str) -> bool {
    match provided {
        Some(secret) => constant_time_str_eq(secret, expected),
        None => false,
    }
}
