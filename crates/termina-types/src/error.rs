//! Dispatcher error taxonomy.

use thiserror::Error;

/// Errors raised while resolving or running a command.
///
/// These are rendered into failed `ExecResult`s; they never escape the
/// dispatcher as panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// A required argument was absent.
    #[error("{0}: missing operand")]
    MissingOperand(String),
    /// No command is registered under this name.
    #[error("Command not found: {0}\nType 'help' to see available commands.")]
    CommandNotFound(String),
    /// `man` was asked about an unknown command.
    #[error("No manual entry for {0}")]
    NoManualEntry(String),
}
