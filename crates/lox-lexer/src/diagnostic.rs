//! Lexical diagnostics.

use thiserror::Error;

/// Faults the scanner can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),

    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error tied to a source line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error{position}: {error}")]
pub struct Diagnostic {
    /// 1-indexed line of the fault.
    pub line: usize,
    /// Short contextual tag such as ` at end`. Usually empty for lexical errors.
    pub position: String,
    pub error: LexError,
}

impl Diagnostic {
    pub fn new(line: usize, error: LexError) -> Self {
        Self {
            line,
            position: String::new(),
            error,
        }
    }

    /// Human-readable description of the fault.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Render a diagnostic as `[line N] Error<position>: <message>`.
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    diagnostic.to_string()
}
