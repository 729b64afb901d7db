//! Scanner for the Lox scripting language.

use crate::diagnostic::{Diagnostic, LexError};
use crate::token::{lookup_keyword, Token, TokenKind};

/// How the scanner reacts to a lexical fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record the fault, skip past it and keep scanning. Every fault in the
    /// unit is returned together.
    #[default]
    AccumulateAll,
    /// Stop at the first fault and return only that one.
    FailFast,
}

/// Scanner configuration.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub policy: ErrorPolicy,
}

impl ScanConfig {
    pub fn fail_fast() -> Self {
        Self {
            policy: ErrorPolicy::FailFast,
        }
    }
}

/// Scanner turns one unit of Lox source into tokens.
///
/// All cursor state lives in the value and is consumed by
/// [`Scanner::scan_tokens`], so a scanner is used exactly once.
pub struct Scanner {
    chars: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Scan the whole source.
    ///
    /// Returns the tokens, terminated by a single [`TokenKind::Eof`], or the
    /// diagnostics if any fault was found. Under [`ErrorPolicy::FailFast`] the
    /// error vector holds exactly one diagnostic.
    pub fn scan_tokens(mut self) -> Result<Vec<Token>, Vec<Diagnostic>> {
        while !self.is_at_end() {
            // Beginning of the next lexeme.
            self.start = self.current;
            if let Err(diagnostic) = self.scan_token() {
                tracing::debug!(
                    line = diagnostic.line,
                    error = %diagnostic.error,
                    "lexer error"
                );
                match self.config.policy {
                    ErrorPolicy::FailFast => return Err(vec![diagnostic]),
                    ErrorPolicy::AccumulateAll => self.diagnostics.push(diagnostic),
                }
            }
        }

        self.tokens.push(Token::eof(self.line));
        tracing::trace!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            lines = self.line,
            "scan finished"
        );

        if self.diagnostics.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.diagnostics)
        }
    }

    fn scan_token(&mut self) -> Result<(), Diagnostic> {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    self.skip_to_end_of_line();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,
            '"' => return self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            c if is_letter(c) => self.read_identifier(),
            c => {
                return Err(Diagnostic::new(self.line, LexError::UnexpectedCharacter(c)));
            }
        }
        Ok(())
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Consume the current character.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Consume the current character only if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.current + 1).copied()
    }

    /// Skip to end of line, leaving the newline for the main loop.
    fn skip_to_end_of_line(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.current += 1;
        }
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.line);
        self.tokens.push(token);
    }

    fn add_either(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.match_char(next) { matched } else { otherwise };
        self.add_token(kind);
    }

    /// Read a string literal. The opening quote is already consumed.
    fn read_string(&mut self) -> Result<(), Diagnostic> {
        let start_line = self.line;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_at_end() {
            return Err(Diagnostic::new(start_line, LexError::UnterminatedString));
        }

        self.current += 1; // consume closing quote
        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.tokens.push(Token::string(self.lexeme(), value, start_line));
        Ok(())
    }

    /// Read a decimal number literal. The first digit is already consumed.
    fn read_number(&mut self) {
        self.skip_digits();

        // A trailing '.' without a digit after it belongs to the next token.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1; // consume .
            self.skip_digits();
        }

        let lexeme = self.lexeme();
        // Digits with at most one interior '.' always parse as f64.
        let value = lexeme.parse::<f64>().unwrap_or(f64::NAN);
        self.tokens.push(Token::number(lexeme, value, self.line));
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current += 1;
        }
    }

    /// Read an identifier or keyword.
    fn read_identifier(&mut self) {
        while self.peek().is_some_and(|c| is_letter(c) || c.is_ascii_digit()) {
            self.current += 1;
        }
        let lexeme = self.lexeme();
        let kind = lookup_keyword(&lexeme).unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }
}

/// Check if a character can start an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Scan a source unit, accumulating every lexical fault.
pub fn scan(source: &str) -> Result<Vec<Token>, Vec<Diagnostic>> {
    Scanner::new(source).scan_tokens()
}

/// Scan a source unit with an explicit configuration.
pub fn scan_with(source: &str, config: &ScanConfig) -> Result<Vec<Token>, Vec<Diagnostic>> {
    Scanner::new(source).with_config(config.clone()).scan_tokens()
}
