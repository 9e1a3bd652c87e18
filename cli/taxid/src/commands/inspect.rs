//! Inspect command.

use anyhow::Result;
use clap::Args;
use fiscal_id::DocumentKind;
use tracing::debug;

use crate::output::print_single;

use super::{CommandContext, DocumentView};

/// Show every form of an identifier without failing on invalid input.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Identifier kind (cpf or cnpj).
    kind: DocumentKind,

    /// Raw value, with or without punctuation.
    value: String,
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        debug!(kind = %self.kind, policy = %ctx.case_policy, "inspecting document");

        let view = DocumentView::inspect(self.kind, &self.value, ctx.case_policy);
        print_single(&view, &view.rows(), ctx.format);
        Ok(())
    }
}
