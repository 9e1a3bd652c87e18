//! The two identifier kinds and their fixed parameters.

use serde::{Deserialize, Serialize};

use crate::checksum::{self, CNPJ_BASE_LENGTH, CNPJ_LENGTH, CPF_BASE_LENGTH, CPF_LENGTH};
use crate::format;

/// Which federal tax identifier a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Legal-entity registry number, 12 alphanumeric positions plus 2 digits.
    Cnpj,
}

impl DocumentKind {
    /// Upper-case label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Canonical length including check digits.
    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_LENGTH,
            DocumentKind::Cnpj => CNPJ_LENGTH,
        }
    }

    /// Number of positions before the two check digits.
    #[must_use]
    pub const fn base_length(self) -> usize {
        match self {
            DocumentKind::Cpf => CPF_BASE_LENGTH,
            DocumentKind::Cnpj => CNPJ_BASE_LENGTH,
        }
    }

    /// Runs this kind's check-digit validation over a canonical value.
    #[must_use]
    pub fn validate(self, canonical: &str) -> bool {
        match self {
            DocumentKind::Cpf => checksum::is_valid_cpf(canonical),
            DocumentKind::Cnpj => checksum::is_valid_cnpj(canonical),
        }
    }

    /// Formats a canonical value with this kind's separators.
    #[must_use]
    pub fn format(self, canonical: &str) -> String {
        match self {
            DocumentKind::Cpf => format::format_cpf(canonical),
            DocumentKind::Cnpj => format::format_cnpj(canonical),
        }
    }

    /// Computes the check digits for a base of this kind.
    pub fn check_digits(self, base: &str) -> Result<String, crate::InvalidDocumentError> {
        match self {
            DocumentKind::Cpf => checksum::cpf_check_digits(base),
            DocumentKind::Cnpj => checksum::cnpj_check_digits(base),
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(DocumentKind::Cpf),
            "cnpj" => Ok(DocumentKind::Cnpj),
            other => Err(format!(
                "unknown document kind '{other}': expected 'cpf' or 'cnpj'"
            )),
        }
    }
}
