//! Token types for the Lox lexer.

use std::fmt;

/// Token kinds for the Lox language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Returns true for the kinds that carry a decoded [`Literal`].
    pub fn has_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Class
                | TokenKind::Else
                | TokenKind::False
                | TokenKind::Fun
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Nil
                | TokenKind::Or
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::True
                | TokenKind::Var
                | TokenKind::While
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::And => "AND",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::False => "FALSE",
            TokenKind::Fun => "FUN",
            TokenKind::For => "FOR",
            TokenKind::If => "IF",
            TokenKind::Nil => "NIL",
            TokenKind::Or => "OR",
            TokenKind::Print => "PRINT",
            TokenKind::Return => "RETURN",
            TokenKind::Super => "SUPER",
            TokenKind::This => "THIS",
            TokenKind::True => "TRUE",
            TokenKind::Var => "VAR",
            TokenKind::While => "WHILE",
            TokenKind::Eof => "EOF",
        };
        write!(f, "{}", s)
    }
}

/// Look up an identifier to see if it's a reserved word.
pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "fun" => TokenKind::Fun,
        "for" => TokenKind::For,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Decoded value of a string or number token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(f64),
}

impl Literal {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            Literal::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::Str(_) => None,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{}", s),
            // Integral doubles keep their fractional part: `12` prints as `12.0`.
            Literal::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{:.1}", n),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A token produced by the scanner.
///
/// The literal payload is tied to the kind: only [`Token::string`] and
/// [`Token::number`] attach one, and fields are exposed read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    literal: Option<Literal>,
    line: usize,
}

impl Token {
    /// Create a token without a literal payload.
    ///
    /// `kind` must not be [`TokenKind::String`] or [`TokenKind::Number`]; use
    /// the dedicated constructors for those.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        debug_assert!(!kind.has_literal(), "{kind} tokens need a literal");
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    /// Create a string token with its decoded content.
    pub fn string(lexeme: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TokenKind::String,
            lexeme: lexeme.into(),
            literal: Some(Literal::Str(value.into())),
            line,
        }
    }

    /// Create a number token with its decoded value.
    pub fn number(lexeme: impl Into<String>, value: f64, line: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            lexeme: lexeme.into(),
            literal: Some(Literal::Number(value)),
            line,
        }
    }

    /// Create the end-of-input marker.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of this token. Empty only for [`TokenKind::Eof`].
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// 1-indexed line on which the token starts.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{} {} nil", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keyword() {
        assert_eq!(lookup_keyword("and"), Some(TokenKind::And));
        assert_eq!(lookup_keyword("while"), Some(TokenKind::While));
        assert_eq!(lookup_keyword("foo"), None);
        assert_eq!(lookup_keyword("While"), None);
        assert_eq!(lookup_keyword("classy"), None);
    }

    #[test]
    fn test_keyword_table_matches_kinds() {
        let words = [
            "and", "class", "else", "false", "fun", "for", "if", "nil", "or", "print", "return",
            "super", "this", "true", "var", "while",
        ];
        for word in words {
            let kind = lookup_keyword(word).unwrap();
            assert!(kind.is_keyword(), "{word} should map to a keyword kind");
            assert_eq!(kind.to_string(), word.to_uppercase());
        }
    }

    #[test]
    fn test_literal_payloads() {
        let s = Token::string("\"hi\"", "hi", 1);
        assert_eq!(s.kind(), TokenKind::String);
        assert_eq!(s.literal().and_then(Literal::as_str), Some("hi"));

        let n = Token::number("12.5", 12.5, 3);
        assert_eq!(n.kind(), TokenKind::Number);
        assert_eq!(n.literal().and_then(Literal::as_number), Some(12.5));
        assert_eq!(n.line(), 3);

        let plus = Token::new(TokenKind::Plus, "+", 1);
        assert!(plus.literal().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::new(TokenKind::BangEqual, "!=", 1).to_string(), "BANG_EQUAL != nil");
        assert_eq!(Token::number("12", 12.0, 1).to_string(), "NUMBER 12 12.0");
        assert_eq!(Token::number("12.5", 12.5, 1).to_string(), "NUMBER 12.5 12.5");
        assert_eq!(Token::string("\"hi\"", "hi", 1).to_string(), "STRING \"hi\" hi");
        assert_eq!(Token::eof(4).to_string(), "EOF  nil");
    }
}
