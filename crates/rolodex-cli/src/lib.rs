//! Rolodex CLI library.
//!
//! This library provides the functionality behind the `rolodex` binary: the
//! command-line surface, the line-oriented command interpreter that
//! populates a network, and input reading from a file or standard input.

pub mod cli;
pub mod error;
pub mod input;
pub mod interpreter;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use interpreter::{ingest, Command};
