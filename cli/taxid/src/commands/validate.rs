//! Validate command.

use anyhow::Result;
use clap::Args;
use fiscal_id::DocumentKind;
use tracing::info;

use crate::error::CliError;
use crate::output::{format_json, print_success, OutputFormat};

use super::{CommandContext, Document};

/// Construct an identifier strictly; fails with the rejected value otherwise.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Identifier kind (cpf or cnpj).
    kind: DocumentKind,

    /// Raw value, with or without punctuation.
    value: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let doc = Document::new(self.kind, &self.value, ctx.case_policy).map_err(CliError::from)?;
        let view = doc.view();
        info!(kind = %view.kind, "document is valid");

        match ctx.format {
            OutputFormat::Json => {
                println!("{}", format_json(&view, "{}"));
            }
            OutputFormat::Table => {
                print_success(&format!("{} {} is valid", view.kind, view.formatted));
            }
        }
        Ok(())
    }
}
