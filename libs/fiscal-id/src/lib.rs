//! # fiscal-id
//!
//! Value objects for the two Brazilian federal tax identifiers.
//!
//! ## Design Principles
//!
//! - A constructed value has always passed its check-digit algorithm
//! - Punctuation is never significant: equality and hashing use the canonical form
//! - The original input is preserved verbatim alongside the derived forms
//! - Both identifier types share one validation core; they differ only in kind
//!
//! ## Identifier Formats
//!
//! | Kind | Canonical | Formatted |
//! |------|-----------|-----------|
//! | CPF  | `12345678909` | `123.456.789-09` |
//! | CNPJ | `12ABC34501DE35` | `12.ABC.345/01DE-35` |
//!
//! The CNPJ algorithm accepts letters in the twelve base positions, which
//! makes it a superset of the legacy all-numeric rule: numeric CNPJs
//! validate exactly as they always have.
//!
//! ```
//! use fiscal_id::Cnpj;
//!
//! let a = Cnpj::new("11.222.333/0001-81")?;
//! let b: Cnpj = "11222333000181".parse()?;
//! assert_eq!(a, b);
//! assert_eq!(b.formatted_value(), "11.222.333/0001-81");
//! # Ok::<(), fiscal_id::InvalidDocumentError>(())
//! ```

pub mod canonical;
pub mod checksum;
mod document;
mod error;
pub mod format;
mod kind;
mod macros;
mod policy;
mod types;

pub use canonical::canonicalize;
pub use checksum::{cnpj_check_digits, cpf_check_digits};
pub use document::Document;
pub use error::InvalidDocumentError;
pub use kind::DocumentKind;
pub use policy::CasePolicy;
pub use types::*;
