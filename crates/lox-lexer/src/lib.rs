//! Lox lexer - tokenization for the Lox scripting language.
//!
//! This crate provides the scanner for Lox, which converts source code into
//! tokens for parsing, and the diagnostics it reports for malformed input.
//!
//! # Example
//!
//! ```
//! use lox_lexer::{scan, TokenKind};
//!
//! let tokens = scan("var x = 42;").unwrap();
//! assert_eq!(tokens[0].kind(), TokenKind::Var);
//! assert_eq!(tokens.last().unwrap().kind(), TokenKind::Eof);
//! ```
//!
//! Faults are collected across the whole unit by default:
//!
//! ```
//! use lox_lexer::{format_diagnostic, scan};
//!
//! let errors = scan("1 @ 2 #").unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(format_diagnostic(&errors[0]), "[line 1] Error: Unexpected character '@'.");
//! ```

pub mod diagnostic;
pub mod scanner;
pub mod token;

pub use diagnostic::{format_diagnostic, Diagnostic, LexError};
pub use scanner::{scan, scan_with, ErrorPolicy, ScanConfig, Scanner};
pub use token::{lookup_keyword, Literal, Token, TokenKind};
