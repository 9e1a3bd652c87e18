//! Display formatting for canonical identifiers.
//!
//! A canonical value of the expected length gets its fixed separators back.
//! Anything else is returned unchanged; that fallback says nothing about
//! validity.

use crate::checksum::{CNPJ_LENGTH, CPF_LENGTH};

/// Separator layout for CPF: `###.###.###-##`.
const CPF_LAYOUT: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];

/// Separator layout for CNPJ: `##.###.###/####-##`.
const CNPJ_LAYOUT: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Inserts `layout` separators before the given character offsets.
fn apply_layout(canonical: &str, expected_len: usize, layout: &[(usize, char)]) -> String {
    if canonical.chars().count() != expected_len {
        return canonical.to_string();
    }

    let mut out = String::with_capacity(expected_len + layout.len());
    let mut separators = layout.iter().peekable();
    for (i, c) in canonical.chars().enumerate() {
        if let Some(&(_, sep)) = separators.next_if(|(at, _)| *at == i) {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Formats a canonical CPF as `###.###.###-##`.
///
/// ```
/// assert_eq!(fiscal_id::format::format_cpf("12345678909"), "123.456.789-09");
/// assert_eq!(fiscal_id::format::format_cpf("123"), "123");
/// ```
#[must_use]
pub fn format_cpf(canonical: &str) -> String {
    apply_layout(canonical, CPF_LENGTH, CPF_LAYOUT)
}

/// Formats a canonical CNPJ as `##.###.###/####-##`.
#[must_use]
pub fn format_cnpj(canonical: &str) -> String {
    apply_layout(canonical, CNPJ_LENGTH, CNPJ_LAYOUT)
}
