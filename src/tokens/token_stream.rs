//! Cursor over a tokenized document
//!
//! The parser owns one of these and consumes it front to back with
//! single-token lookahead.

use super::token::{Token, TokenKind};
use crate::utils::{Span, Spanned};

/// A finite token sequence with a consume-once cursor
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Spanned<Token>>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Spanned<Token>>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Build a stream with placeholder spans, mainly for tests
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let spanned = tokens
            .into_iter()
            .map(|token| Spanned::new(token, Span::dummy()))
            .collect();
        Self::new(spanned)
    }

    pub fn current(&self) -> Option<&Spanned<Token>> {
        self.tokens.get(self.position)
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.current().map(|spanned| &spanned.value)
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current_token().map(Token::kind)
    }

    pub fn current_span(&self) -> Span {
        self.current().map_or_else(Span::dummy, |s| s.span)
    }

    pub fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens
            .get(self.position + n)
            .map(|spanned| &spanned.value)
    }

    /// Consume and return the current token
    pub fn advance(&mut self) -> Option<Spanned<Token>> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub fn is_at_end(&self) -> bool {
        match self.current_token() {
            None => true,
            Some(Token::Eof) => true,
            Some(_) => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::token::NumberLiteral;

    fn sample_stream() -> TokenStream {
        TokenStream::from_tokens(vec![
            Token::LeftBracket,
            Token::Number(NumberLiteral::new("1")),
            Token::RightBracket,
            Token::Eof,
        ])
    }

    #[test]
    fn advance_consumes_in_order() {
        let mut stream = sample_stream();

        assert_eq!(stream.current_kind(), Some(TokenKind::LeftBracket));
        stream.advance();
        assert_eq!(stream.current_kind(), Some(TokenKind::Number));
        stream.advance();
        assert_eq!(stream.current_kind(), Some(TokenKind::RightBracket));
        assert!(!stream.is_at_end());
        stream.advance();
        assert!(stream.is_at_end());
    }

    #[test]
    fn peek_does_not_consume() {
        let stream = sample_stream();
        assert_eq!(stream.peek_ahead(1), Some(&Token::Number(NumberLiteral::new("1"))));
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn empty_stream_is_at_end() {
        let stream = TokenStream::from_tokens(vec![]);
        assert!(stream.is_at_end());
        assert!(stream.is_empty());
        assert_eq!(stream.current_token(), None);
    }
}
