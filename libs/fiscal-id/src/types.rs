//! The CPF and CNPJ value objects.
//!
//! Both are generated by [`define_document!`](crate::macros::define_document)
//! and differ only in their [`DocumentKind`].

use crate::macros::define_document;
use crate::DocumentKind;

// =============================================================================
// Individuals
// =============================================================================

define_document!(Cpf, DocumentKind::Cpf);

// =============================================================================
// Legal entities
// =============================================================================

define_document!(Cnpj, DocumentKind::Cnpj);

// =============================================================================
// Tests
// =============================================================================
