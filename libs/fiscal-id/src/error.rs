//! Error type for rejected identifiers.

use thiserror::Error;

use crate::DocumentKind;

/// An identifier that failed canonicalization or check-digit validation.
///
/// Carries the kind of identifier that was being built and the raw value
/// exactly as it was supplied.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} document '{value}'")]
pub struct InvalidDocumentError {
    kind: DocumentKind,
    value: String,
}

impl InvalidDocumentError {
    pub(crate) fn new(kind: DocumentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The kind of identifier that was rejected.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The rejected raw value, unmodified.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the rejected input was empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}
