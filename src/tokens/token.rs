//! Token definitions for the JDL data language
//!
//! Tokens are immutable once produced. A number token keeps the raw
//! literal text; the semantic rules and the token text format both need
//! it, and the numeric reading is available on demand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A number literal as it appeared in the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberLiteral {
    raw: String,
}

impl NumberLiteral {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The literal's exact source text
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The 64-bit float reading, if the text decodes to a finite value
    pub fn value(&self) -> Option<f64> {
        self.raw.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// One token of a JDL document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Str(String),
    Number(NumberLiteral),
    Boolean(bool),
    Null,
    Eof,
}

/// Token kind without payload, used for lookahead decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
    Str,
    Number,
    Boolean,
    Null,
    Eof,
}

impl TokenKind {
    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Str => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Broad classification for metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Punctuation,
    String,
    Number,
    Keyword,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::LeftBrace => TokenKind::LeftBrace,
            Token::RightBrace => TokenKind::RightBrace,
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
            Token::Comma => TokenKind::Comma,
            Token::Colon => TokenKind::Colon,
            Token::Str(_) => TokenKind::Str,
            Token::Number(_) => TokenKind::Number,
            Token::Boolean(_) => TokenKind::Boolean,
            Token::Null => TokenKind::Null,
            Token::Eof => TokenKind::Eof,
        }
    }

    pub fn class(&self) -> TokenClass {
        match self {
            Token::LeftBrace
            | Token::RightBrace
            | Token::LeftBracket
            | Token::RightBracket
            | Token::Comma
            | Token::Colon => TokenClass::Punctuation,
            Token::Str(_) => TokenClass::String,
            Token::Number(_) => TokenClass::Number,
            Token::Boolean(_) | Token::Null => TokenClass::Keyword,
            Token::Eof => TokenClass::Eof,
        }
    }

    /// The token text form, one token per line in token files. The
    /// end-of-input token has no text form and is never written.
    pub fn to_wire_string(&self) -> String {
        match self {
            Token::LeftBrace => "<{>".to_string(),
            Token::RightBrace => "<}>".to_string(),
            Token::LeftBracket => "<[>".to_string(),
            Token::RightBracket => "<]>".to_string(),
            Token::Comma => "<,>".to_string(),
            Token::Colon => "<:>".to_string(),
            Token::Str(text) => format!("<str, {}>", text),
            Token::Number(literal) => format!("<num, {}>", literal.raw()),
            Token::Boolean(true) => "<bool, True>".to_string(),
            Token::Boolean(false) => "<bool, False>".to_string(),
            Token::Null => "<null>".to_string(),
            Token::Eof => "<eof>".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_literal_decodes_to_float() {
        assert_eq!(NumberLiteral::new("12.5").value(), Some(12.5));
        assert_eq!(NumberLiteral::new("-3").value(), Some(-3.0));
        assert_eq!(NumberLiteral::new("1-2").value(), None);
        assert_eq!(NumberLiteral::new("1..5").value(), None);
    }

    #[test]
    fn number_literal_keeps_raw_text() {
        let literal = NumberLiteral::new("007");
        assert_eq!(literal.raw(), "007");
        assert_eq!(literal.value(), Some(7.0));
    }

    #[test]
    fn wire_strings_match_token_text_format() {
        assert_eq!(Token::LeftBrace.to_wire_string(), "<{>");
        assert_eq!(Token::Colon.to_wire_string(), "<:>");
        assert_eq!(
            Token::Str("hello world".to_string()).to_wire_string(),
            "<str, hello world>"
        );
        assert_eq!(
            Token::Number(NumberLiteral::new("42.5")).to_wire_string(),
            "<num, 42.5>"
        );
        assert_eq!(Token::Boolean(true).to_wire_string(), "<bool, True>");
        assert_eq!(Token::Boolean(false).to_wire_string(), "<bool, False>");
        assert_eq!(Token::Null.to_wire_string(), "<null>");
    }

    #[test]
    fn kind_and_class_agree() {
        assert_eq!(Token::Comma.kind(), TokenKind::Comma);
        assert_eq!(Token::Comma.class(), TokenClass::Punctuation);
        assert_eq!(Token::Null.class(), TokenClass::Keyword);
        assert_eq!(Token::Eof.kind(), TokenKind::Eof);
    }

    #[test]
    fn kind_names_read_well_in_errors() {
        assert_eq!(TokenKind::Colon.name(), "':'");
        assert_eq!(TokenKind::Str.name(), "string");
        assert_eq!(TokenKind::Eof.name(), "end of input");
    }
}
