//! Shared value core behind every identifier type.
//!
//! Holds the raw input verbatim and memoizes the canonical form and the
//! validity flag. Both are pure functions of the raw input, kind and policy,
//! so `OnceLock` is enough: a racing first access computes the same value.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::{canonicalize, CasePolicy, DocumentKind, InvalidDocumentError};

/// Read access shared by every identifier type.
///
/// Lets callers work with [`Cpf`](crate::Cpf) and [`Cnpj`](crate::Cnpj)
/// through one generic bound.
///
/// ```
/// use fiscal_id::{Cnpj, Cpf, Document};
///
/// fn describe<D: Document>(doc: &D) -> String {
///     format!("{} {}", doc.kind(), doc.formatted_value())
/// }
///
/// assert_eq!(describe(&Cpf::new("12345678909")?), "CPF 123.456.789-09");
/// assert_eq!(describe(&Cnpj::new("11222333000181")?), "CNPJ 11.222.333/0001-81");
/// # Ok::<(), fiscal_id::InvalidDocumentError>(())
/// ```
pub trait Document {
    /// The kind of identifier this value holds.
    fn kind(&self) -> DocumentKind;

    /// The raw input exactly as supplied.
    fn value(&self) -> &str;

    /// The canonical form: letters and digits only, upper-cased.
    fn unformatted_value(&self) -> &str;

    /// The canonical form with its separators inserted.
    fn formatted_value(&self) -> String;

    /// Whether the value passes its check-digit algorithm.
    fn is_valid(&self) -> bool;
}

#[derive(Debug, Clone)]
pub(crate) struct DocumentCore {
    kind: DocumentKind,
    policy: CasePolicy,
    value: String,
    unformatted: OnceLock<String>,
    valid: OnceLock<bool>,
}

impl DocumentCore {
    pub(crate) fn new(kind: DocumentKind, value: String, policy: CasePolicy) -> Self {
        Self {
            kind,
            policy,
            value,
            unformatted: OnceLock::new(),
            valid: OnceLock::new(),
        }
    }

    /// Builds a core and keeps it only if it validates.
    pub(crate) fn checked(
        kind: DocumentKind,
        value: String,
        policy: CasePolicy,
    ) -> Result<Self, InvalidDocumentError> {
        let core = Self::new(kind, value, policy);
        if core.is_valid() {
            return Ok(core);
        }

        debug!(
            kind = %kind,
            policy = %policy,
            blank = core.value.trim().is_empty(),
            "rejected document"
        );
        Err(InvalidDocumentError::new(kind, core.value))
    }

    pub(crate) fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn unformatted_value(&self) -> &str {
        self.unformatted.get_or_init(|| {
            trace!(kind = %self.kind, "computing canonical form");
            canonicalize(&self.value)
        })
    }

    pub(crate) fn formatted_value(&self) -> String {
        self.kind.format(self.unformatted_value())
    }

    pub(crate) fn is_valid(&self) -> bool {
        *self.valid.get_or_init(|| {
            trace!(kind = %self.kind, "computing validity");
            self.policy.admits(&self.value) && self.kind.validate(self.unformatted_value())
        })
    }
}

impl PartialEq for DocumentCore {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.unformatted_value() == other.unformatted_value()
    }
}

impl Eq for DocumentCore {}

impl Hash for DocumentCore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unformatted_value().hash(state);
    }
}

impl PartialOrd for DocumentCore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DocumentCore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind
            .cmp(&other.kind)
            .then_with(|| self.unformatted_value().cmp(other.unformatted_value()))
    }
}
