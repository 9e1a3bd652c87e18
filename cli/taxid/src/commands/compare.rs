//! Compare command.

use anyhow::Result;
use clap::Args;
use fiscal_id::DocumentKind;
use serde::Serialize;

use crate::error::CliError;
use crate::output::{print_single, print_success, print_warning, FieldRow, OutputFormat};

use super::{CommandContext, Document};

/// Compare two identifiers of the same kind, ignoring punctuation.
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Identifier kind (cpf or cnpj).
    kind: DocumentKind,

    /// First raw value.
    left: String,

    /// Second raw value.
    right: String,
}

#[derive(Debug, Serialize)]
struct CompareView {
    kind: DocumentKind,
    left: String,
    right: String,
    equal: bool,
}

impl CompareCommand {
    fn compare(&self, ctx: &CommandContext) -> Result<CompareView, CliError> {
        let left = Document::new(self.kind, &self.left, ctx.case_policy)?;
        let right = Document::new(self.kind, &self.right, ctx.case_policy)?;
        Ok(CompareView {
            kind: self.kind,
            left: left.view().formatted,
            right: right.view().formatted,
            equal: left == right,
        })
    }

    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let view = self.compare(ctx)?;

        match ctx.format {
            OutputFormat::Json => print_single(&view, &[], ctx.format),
            OutputFormat::Table => {
                let rows = [
                    FieldRow::new("left", &view.left),
                    FieldRow::new("right", &view.right),
                ];
                print_single(&view, &rows, ctx.format);
                if view.equal {
                    print_success(&format!("{} values are equal", view.kind));
                } else {
                    print_warning(&format!("{} values differ", view.kind));
                }
            }
        }
        Ok(())
    }
}
