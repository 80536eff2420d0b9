//! Token text files
//!
//! The tokenizer's output is handed to the parser as a text file with
//! one token per line. Reading is tolerant of blank lines and appends
//! the end-of-input token; anything else unrecognized is an error
//! naming the 1-based line number.
//!
//! Number payloads are taken as-is here. A literal that does not decode
//! (an exponent form, say) still becomes a number token, so the
//! semantic rules get their chance to report it.

use super::token::{NumberLiteral, Token};
use crate::logging::codes;
use crate::utils::{Span, Spanned};

#[derive(Debug, Clone, thiserror::Error)]
pub enum WireError {
    #[error("Invalid token format at line {line}")]
    InvalidTokenText { line: usize, text: String },
}

impl WireError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            WireError::InvalidTokenText { .. } => codes::syntax::INVALID_TOKEN_TEXT,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            WireError::InvalidTokenText { line, .. } => Span::whole_line(*line as u32),
        }
    }
}

/// Decode one trimmed, non-blank line of token text
fn decode_line(line: &str) -> Option<Token> {
    match line {
        "<{>" => return Some(Token::LeftBrace),
        "<}>" => return Some(Token::RightBrace),
        "<[>" => return Some(Token::LeftBracket),
        "<]>" => return Some(Token::RightBracket),
        "<,>" => return Some(Token::Comma),
        "<:>" => return Some(Token::Colon),
        "<bool, True>" => return Some(Token::Boolean(true)),
        "<bool, False>" => return Some(Token::Boolean(false)),
        "<null>" => return Some(Token::Null),
        _ => {}
    }

    if let Some(payload) = line.strip_prefix("<str, ").and_then(|r| r.strip_suffix('>')) {
        return Some(Token::Str(payload.to_string()));
    }
    if let Some(payload) = line.strip_prefix("<num, ").and_then(|r| r.strip_suffix('>')) {
        return Some(Token::Number(NumberLiteral::new(payload)));
    }

    None
}

/// Read a whole token text document into a spanned token sequence
/// ending with the end-of-input token
pub fn read_token_text(text: &str) -> Result<Vec<Spanned<Token>>, WireError> {
    let mut tokens = Vec::new();
    let mut last_line = 0usize;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        last_line = line_no;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match decode_line(line) {
            Some(token) => tokens.push(Spanned::new(token, Span::whole_line(line_no as u32))),
            None => {
                return Err(WireError::InvalidTokenText {
                    line: line_no,
                    text: line.to_string(),
                })
            }
        }
    }

    tokens.push(Spanned::new(
        Token::Eof,
        Span::whole_line((last_line + 1) as u32),
    ));

    Ok(tokens)
}

/// Write tokens as token text, one per line. The end-of-input token is
/// not written.
pub fn write_token_text<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut output = String::new();
    for token in tokens {
        if matches!(token, Token::Eof) {
            continue;
        }
        output.push_str(&token.to_wire_string());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn reads_all_token_forms() {
        let text = "<{>\n<str, name>\n<:>\n<num, 1.5>\n<,>\n<str, ok>\n<:>\n<bool, True>\n<}>\n";
        let tokens = read_token_text(text).unwrap();

        let kinds: Vec<Token> = tokens.into_iter().map(|s| s.value).collect();
        assert_eq!(
            kinds,
            vec![
                Token::LeftBrace,
                Token::Str("name".to_string()),
                Token::Colon,
                Token::Number(NumberLiteral::new("1.5")),
                Token::Comma,
                Token::Str("ok".to_string()),
                Token::Colon,
                Token::Boolean(true),
                Token::RightBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let tokens = read_token_text("<[>\n\n   \n<]>\n").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].value, Token::RightBracket);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let err = read_token_text("<{>\n<wat>\n").unwrap_err();
        assert_matches!(err, WireError::InvalidTokenText { line: 2, .. });
        assert_eq!(err.to_string(), "Invalid token format at line 2");
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let tokens = read_token_text("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, Token::Eof);
    }

    #[test]
    fn undecodable_number_payload_is_accepted() {
        let tokens = read_token_text("<num, 1e+5>\n").unwrap();
        assert_matches!(&tokens[0].value, Token::Number(n) if n.raw() == "1e+5");
    }

    #[test]
    fn round_trip_preserves_tokens() {
        let original = vec![
            Token::LeftBrace,
            Token::Str("key".to_string()),
            Token::Colon,
            Token::LeftBracket,
            Token::Number(NumberLiteral::new("0.5")),
            Token::Comma,
            Token::Number(NumberLiteral::new("-2")),
            Token::RightBracket,
            Token::RightBrace,
            Token::Eof,
        ];

        let text = write_token_text(original.iter());
        let reread: Vec<Token> = read_token_text(&text)
            .unwrap()
            .into_iter()
            .map(|s| s.value)
            .collect();

        assert_eq!(reread, original);
    }

    #[test]
    fn string_payload_keeps_internal_spaces() {
        let tokens = read_token_text("<str, hello  world>\n").unwrap();
        assert_eq!(tokens[0].value, Token::Str("hello  world".to_string()));
    }
}
