//! Check-digits command.

use anyhow::Result;
use clap::Args;
use fiscal_id::DocumentKind;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, FieldRow};

use super::CommandContext;

/// Compute the two check digits that complete a base.
#[derive(Debug, Args)]
pub struct CheckDigitsCommand {
    /// Identifier kind (cpf or cnpj).
    kind: DocumentKind,

    /// Base without check digits: 9 digits for CPF, 12 letters or digits for CNPJ.
    base: String,
}

#[derive(Debug, Serialize)]
struct CheckDigitsView {
    kind: DocumentKind,
    base: String,
    check_digits: String,
    formatted: String,
}

impl CheckDigitsView {
    fn build(kind: DocumentKind, base: &str) -> Result<Self, CliError> {
        let check_digits = kind.check_digits(base)?;
        let full = format!("{}{}", fiscal_id::canonicalize(base), check_digits);
        Ok(Self {
            kind,
            base: base.to_string(),
            formatted: kind.format(&full),
            check_digits,
        })
    }

    fn rows(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::new("kind", self.kind),
            FieldRow::new("base", &self.base),
            FieldRow::new("check_digits", &self.check_digits),
            FieldRow::new("formatted", &self.formatted),
        ]
    }
}

impl CheckDigitsCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        debug!(kind = %self.kind, "computing check digits");

        let view = CheckDigitsView::build(self.kind, &self.base)?;
        print_single(&view, &view.rows(), ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_completes_cnpj() {
        let view = CheckDigitsView::build(DocumentKind::Cnpj, "12.abc.345/01de").unwrap();
        assert_eq!(view.check_digits, "35");
        assert_eq!(view.formatted, "12.ABC.345/01DE-35");
    }

    #[test]
    fn test_build_completes_cpf() {
        let view = CheckDigitsView::build(DocumentKind::Cpf, "111.444.777").unwrap();
        assert_eq!(view.formatted, "111.444.777-35");
    }

    #[test]
    fn test_build_rejects_zero_base() {
        let err = CheckDigitsView::build(DocumentKind::Cnpj, "000000000000").unwrap_err();
        assert!(matches!(err, CliError::InvalidDocument(_)));
    }
}
