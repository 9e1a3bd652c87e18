//! CLI commands.

mod check_digits;
mod compare;
mod inspect;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fiscal_id::{CasePolicy, Cnpj, Cpf, DocumentKind, InvalidDocumentError};
use serde::Serialize;

use crate::output::{FieldRow, OutputFormat};

/// taxid - Inspect and validate Brazilian CPF and CNPJ identifiers.
#[derive(Debug, Parser)]
#[command(name = "taxid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t, env = "TAXID_FORMAT")]
    format: OutputFormat,

    /// How lower-case letters in input are treated (strict or fold).
    #[arg(long, global = true, default_value_t, env = "TAXID_CASE_POLICY")]
    case_policy: CasePolicy,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn", env = "TAXID_LOG_LEVEL")]
    log_level: String,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the original, unformatted and formatted forms and validity.
    Inspect(inspect::InspectCommand),

    /// Validate an identifier, failing if it is invalid.
    Validate(validate::ValidateCommand),

    /// Compute the check digits for a base.
    CheckDigits(check_digits::CheckDigitsCommand),

    /// Compare two identifiers by canonical form.
    Compare(compare::CompareCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_json(&self) -> bool {
        self.log_json
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let ctx = CommandContext {
            format: self.format,
            case_policy: self.case_policy,
        };

        match self.command {
            Commands::Inspect(cmd) => cmd.run(&ctx),
            Commands::Validate(cmd) => cmd.run(&ctx),
            Commands::CheckDigits(cmd) => cmd.run(&ctx),
            Commands::Compare(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("taxid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub case_policy: CasePolicy,
}

/// A constructed identifier of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Strictly construct a document of `kind` under `policy`.
    pub fn new(
        kind: DocumentKind,
        value: &str,
        policy: CasePolicy,
    ) -> Result<Self, InvalidDocumentError> {
        match kind {
            DocumentKind::Cpf => Cpf::new_with_policy(value, policy).map(Document::Cpf),
            DocumentKind::Cnpj => Cnpj::new_with_policy(value, policy).map(Document::Cnpj),
        }
    }

    fn as_document(&self) -> &dyn fiscal_id::Document {
        match self {
            Document::Cpf(d) => d,
            Document::Cnpj(d) => d,
        }
    }

    pub fn view(&self) -> DocumentView {
        DocumentView::of(self.as_document())
    }
}

/// Serializable view of an identifier's forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub kind: DocumentKind,
    pub value: String,
    pub unformatted: String,
    pub formatted: String,
    pub valid: bool,
}

impl DocumentView {
    /// View of a constructed identifier of any kind.
    pub fn of<D: fiscal_id::Document + ?Sized>(doc: &D) -> Self {
        Self {
            kind: doc.kind(),
            value: doc.value().to_string(),
            unformatted: doc.unformatted_value().to_string(),
            formatted: doc.formatted_value(),
            valid: doc.is_valid(),
        }
    }

    /// View of raw input that may not validate.
    pub fn inspect(kind: DocumentKind, value: &str, policy: CasePolicy) -> Self {
        let unformatted = fiscal_id::canonicalize(value);
        Self {
            kind,
            value: value.to_string(),
            formatted: kind.format(&unformatted),
            valid: Document::new(kind, value, policy).is_ok(),
            unformatted,
        }
    }

    pub fn rows(&self) -> Vec<FieldRow> {
        vec![
            FieldRow::new("kind", self.kind),
            FieldRow::new("value", &self.value),
            FieldRow::new("unformatted", &self.unformatted),
            FieldRow::new("formatted", &self.formatted),
            FieldRow::new("valid", if self.valid { "yes" } else { "no" }),
        ]
    }
}
