use thiserror::Error;

/// Reason a draft submission was discarded by the ledger.
///
/// Invalid submissions are intentionally silent at the UI boundary; this type
/// exists so the rule is testable, not so it can be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectedSubmission {
    #[error("description is blank")]
    BlankDescription,
    #[error("amount `{0}` is not a usable number")]
    UnusableAmount(String),
}

/// Error type covering CLI shell failures.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
