//! Check-digit algorithms.
//!
//! Both identifiers use a weighted sum reduced modulo 11, where a remainder
//! of 0 or 1 yields the digit `0` and any other remainder `r` yields `11 - r`.
//! They differ in the weights and in the alphabet of the base positions.
//!
//! The validators take canonical input (see [`crate::canonicalize`]) and never
//! fail; the `*_check_digits` helpers accept lightly punctuated bases and
//! return an error when the base itself is malformed.

use crate::{DocumentKind, InvalidDocumentError};

/// Canonical length of a CPF.
pub const CPF_LENGTH: usize = 11;

/// Positions of a CPF that precede its check digits.
pub const CPF_BASE_LENGTH: usize = 9;

/// Canonical length of a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Positions of a CNPJ that precede its check digits.
pub const CNPJ_BASE_LENGTH: usize = 12;

/// CNPJ weights, right-aligned against the string being summed.
///
/// A 12-position base uses the last 12 entries (5..2, 9..2); the 13-position
/// base plus first digit uses all of them.
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn mod11_digit(sum: u32) -> u8 {
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

/// Numeric value of a canonical character: its offset from `'0'` in ASCII.
///
/// Digits map to 0..=9 and `A`..=`Z` to 17..=42.
fn char_value(b: u8) -> u32 {
    u32::from(b - b'0')
}

fn cpf_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &b)| char_value(b) * (top - i as u32))
        .sum();
    mod11_digit(sum)
}

fn cnpj_digit(chars: &[u8]) -> u8 {
    let offset = CNPJ_WEIGHTS.len() - chars.len();
    let sum: u32 = chars
        .iter()
        .zip(&CNPJ_WEIGHTS[offset..])
        .map(|(&b, &w)| char_value(b) * w)
        .sum();
    mod11_digit(sum)
}

/// Computes both CPF check digits for a 9-digit base, as ASCII bytes.
fn compute_cpf(base: &[u8]) -> [u8; 2] {
    debug_assert_eq!(base.len(), CPF_BASE_LENGTH);
    let first = cpf_digit(base);
    let mut extended = [0u8; CPF_BASE_LENGTH + 1];
    extended[..CPF_BASE_LENGTH].copy_from_slice(base);
    extended[CPF_BASE_LENGTH] = b'0' + first;
    let second = cpf_digit(&extended);
    [b'0' + first, b'0' + second]
}

/// Computes both CNPJ check digits for a 12-position base, as ASCII bytes.
fn compute_cnpj(base: &[u8]) -> [u8; 2] {
    debug_assert_eq!(base.len(), CNPJ_BASE_LENGTH);
    let first = cnpj_digit(base);
    let mut extended = [0u8; CNPJ_BASE_LENGTH + 1];
    extended[..CNPJ_BASE_LENGTH].copy_from_slice(base);
    extended[CNPJ_BASE_LENGTH] = b'0' + first;
    let second = cnpj_digit(&extended);
    [b'0' + first, b'0' + second]
}

fn all_same(bytes: &[u8]) -> bool {
    bytes.windows(2).all(|w| w[0] == w[1])
}

/// Validates a canonical CPF.
///
/// Rejects anything that is not exactly 11 digits, any run of a single
/// repeated digit, and any value whose check digits do not match.
#[must_use]
pub fn is_valid_cpf(canonical: &str) -> bool {
    let bytes = canonical.as_bytes();
    if bytes.len() != CPF_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return false;
    }
    if all_same(bytes) {
        return false;
    }
    let (base, supplied) = bytes.split_at(CPF_BASE_LENGTH);
    compute_cpf(base) == supplied
}

/// Validates a canonical CNPJ in either the numeric or alphanumeric format.
///
/// The first 12 positions may be digits or upper-case letters; the last two
/// must be digits. The all-zero value is rejected.
#[must_use]
pub fn is_valid_cnpj(canonical: &str) -> bool {
    let bytes = canonical.as_bytes();
    if bytes.len() != CNPJ_LENGTH {
        return false;
    }
    let (base, supplied) = bytes.split_at(CNPJ_BASE_LENGTH);
    if !base
        .iter()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
    {
        return false;
    }
    if !supplied.iter().all(u8::is_ascii_digit) {
        return false;
    }
    if bytes.iter().all(|&b| b == b'0') {
        return false;
    }
    compute_cnpj(base) == supplied
}

fn strip_base(base: &str, separators: &[char]) -> String {
    base.trim()
        .chars()
        .filter(|c| !separators.contains(c))
        .collect()
}

/// Computes the two check digits for a CPF base.
///
/// The base may carry `.` and `-` separators and surrounding whitespace; what
/// remains must be exactly 9 digits, not all identical.
///
/// ```
/// assert_eq!(fiscal_id::cpf_check_digits("123.456.789").unwrap(), "09");
/// ```
pub fn cpf_check_digits(base: &str) -> Result<String, InvalidDocumentError> {
    let reject = || InvalidDocumentError::new(DocumentKind::Cpf, base);

    let stripped = strip_base(base, &['.', '-']);
    let bytes = stripped.as_bytes();
    if bytes.len() != CPF_BASE_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(reject());
    }
    if all_same(bytes) {
        return Err(reject());
    }

    let digits = compute_cpf(bytes);
    Ok(digits.iter().map(|&b| char::from(b)).collect())
}

/// Computes the two check digits for a CNPJ base.
///
/// The base may carry `.`, `-` and `/` separators, surrounding whitespace and
/// lower-case letters; what remains must be 12 ASCII letters or digits, not
/// all `0`.
///
/// ```
/// assert_eq!(fiscal_id::cnpj_check_digits("12.ABC.345/01DE").unwrap(), "35");
/// ```
pub fn cnpj_check_digits(base: &str) -> Result<String, InvalidDocumentError> {
    let reject = || InvalidDocumentError::new(DocumentKind::Cnpj, base);

    let stripped = strip_base(base, &['.', '-', '/']).to_ascii_uppercase();
    let bytes = stripped.as_bytes();
    if bytes.len() != CNPJ_BASE_LENGTH || !bytes.iter().all(u8::is_ascii_alphanumeric) {
        return Err(reject());
    }
    if bytes.iter().all(|&b| b == b'0') {
        return Err(reject());
    }

    let digits = compute_cnpj(bytes);
    Ok(digits.iter().map(|&b| char::from(b)).collect())
}
