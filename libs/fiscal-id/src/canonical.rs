//! Canonical form of raw identifier input.
//!
//! Everything that is not an ASCII letter or digit is dropped and letters are
//! upper-cased. The function is total: any string, including empty input or
//! arbitrary Unicode, maps to a (possibly empty) string over `[0-9A-Z]`.

/// Strips punctuation and whitespace and upper-cases the remaining letters.
///
/// ```
/// assert_eq!(fiscal_id::canonicalize(" 12.abc.345/01de-35 "), "12ABC34501DE35");
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Returns true if `s` is already in canonical form, i.e. only `[0-9A-Z]`.
#[must_use]
pub fn is_canonical(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
}
