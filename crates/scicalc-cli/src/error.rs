//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
///
/// Calculator domain errors never surface here: both frontends catch
/// them at the interaction boundary and present a message instead of
/// failing the session.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (terminal, stdin, stdout)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
