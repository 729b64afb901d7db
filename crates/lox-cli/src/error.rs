//! Errors surfaced by the command-line driver.

use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Exit status for bad command-line usage.
pub const EXIT_USAGE: u8 = 64;
/// Exit status when the input contained lexical errors.
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit status for I/O failures.
pub const EXIT_IO_ERROR: u8 = 74;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("readline error: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => EXIT_USAGE,
            CliError::Read { .. } | CliError::Output(_) | CliError::Readline(_) => EXIT_IO_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Usage("usage".into()).exit_code(), 64);
        let read = CliError::Read {
            path: PathBuf::from("missing.lox"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(read.exit_code(), 74);
        assert_eq!(read.to_string(), "failed to read missing.lox: not found");
    }
}
