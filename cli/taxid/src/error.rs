//! Error handling and display for the CLI.

use colored::Colorize;
use fiscal_id::InvalidDocumentError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    InvalidDocument(#[from] InvalidDocumentError),
}

/// Hint for a rejected identifier, if one applies.
pub fn hint_for(err: &InvalidDocumentError) -> Option<String> {
    if err.is_blank() {
        return Some("The value is empty. Pass the identifier as an argument.".to_string());
    }
    if err.value().bytes().any(|b| b.is_ascii_lowercase()) {
        return Some(
            "Lower-case letters are rejected. Re-run with `--case-policy fold` to accept them."
                .to_string(),
        );
    }

    let kind = err.kind();
    let len = fiscal_id::canonicalize(err.value()).len();
    if len != kind.length() {
        return Some(format!(
            "A {kind} has {} letters or digits once punctuation is removed; got {len}.",
            kind.length()
        ));
    }
    None
}

/// The rejected identifier behind `err`, whether wrapped or bare.
fn invalid_document(err: &anyhow::Error) -> Option<&InvalidDocumentError> {
    err.downcast_ref::<CliError>()
        .map(|CliError::InvalidDocument(e)| e)
        .or_else(|| err.downcast_ref::<InvalidDocumentError>())
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = invalid_document(err).and_then(hint_for) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}
