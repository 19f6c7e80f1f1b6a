//! Error types for the CLI application.

use rolodex_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// The interpreter is strict: the first bad line aborts the run, so every
/// variant that originates from input carries the 1-based line number.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command the store rejected
    #[error("line {line}: {source}")]
    Store {
        /// 1-based input line number
        line: usize,
        /// The underlying store rejection
        source: StoreError,
    },

    /// A line that does not parse as a command
    #[error("line {line}: {message}")]
    InvalidInput {
        /// 1-based input line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },
}
