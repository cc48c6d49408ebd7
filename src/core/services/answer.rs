//! Answer checking
//!
//! Comparison is case- and whitespace-insensitive but accent-sensitive:
//! "hablo" never matches "habló", because accents are part of the drill.

/// Normalize a response for comparison
///
/// Trims, collapses internal whitespace runs to one space and lowercases.
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
#[must_use]
pub fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Whether `submitted` matches `expected` after normalization
///
/// An empty `expected` (unresolved form) never matches.
#[must_use]
pub fn check_answer(submitted: &str, expected: &str) -> bool {
    let expected = normalize(expected);
    !expected.is_empty() && normalize(submitted) == expected
}
