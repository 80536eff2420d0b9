//! The tokenizer
//!
//! Holds a cursor over the source text and produces one token per call.
//! Punctuation is recognized directly; keywords, numbers, and strings
//! run through the automaton. The first lexical error aborts the
//! tokenization of the document.

use super::automaton::{self, State};
use crate::config::compile_time::lexical::{MAX_STRING_SIZE, MAX_TOKEN_COUNT};
use crate::config::runtime::LexicalPreferences;
use crate::log_error;
use crate::log_success;
use crate::logging::codes;
use crate::tokens::{NumberLiteral, Token, TokenClass};
use crate::utils::{Position, Span, Spanned};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character: '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        offset: usize,
        line: u32,
        column: u32,
    },

    #[error("Unterminated string literal starting at line {line}, column {column}")]
    UnterminatedString {
        offset: usize,
        line: u32,
        column: u32,
    },

    #[error("Invalid number literal '{literal}' at line {line}, column {column}")]
    InvalidNumber {
        literal: String,
        offset: usize,
        line: u32,
        column: u32,
    },

    #[error("String literal at line {line}, column {column} exceeds {limit} bytes")]
    StringTooLarge {
        limit: usize,
        offset: usize,
        line: u32,
        column: u32,
    },

    #[error("Unexpected end of input at line {line}, column {column}")]
    UnexpectedEndOfInput {
        offset: usize,
        line: u32,
        column: u32,
    },

    #[error("Token count exceeds limit of {limit}")]
    TooManyTokens { limit: usize },
}

impl LexerError {
    pub fn error_code(&self) -> codes::Code {
        match self {
            LexerError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnterminatedString { .. } => codes::lexical::UNTERMINATED_STRING,
            LexerError::InvalidNumber { .. } => codes::lexical::INVALID_NUMBER,
            LexerError::StringTooLarge { .. } => codes::lexical::STRING_TOO_LARGE,
            LexerError::UnexpectedEndOfInput { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexerError::InvalidCharacter {
                offset,
                line,
                column,
                ..
            }
            | LexerError::UnterminatedString {
                offset,
                line,
                column,
            }
            | LexerError::InvalidNumber {
                offset,
                line,
                column,
                ..
            }
            | LexerError::StringTooLarge {
                offset,
                line,
                column,
                ..
            }
            | LexerError::UnexpectedEndOfInput {
                offset,
                line,
                column,
            } => Span::single(Position::new(*offset, *line, *column)),
            LexerError::TooManyTokens { .. } => Span::dummy(),
        }
    }
}

/// Counters collected while tokenizing
#[derive(Debug, Clone, Default)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub punctuation_tokens: usize,
    pub string_tokens: usize,
    pub number_tokens: usize,
    pub keyword_tokens: usize,
    pub max_string_length: usize,
}

impl LexicalMetrics {
    pub fn record_token(&mut self, token: &Token) {
        self.total_tokens += 1;
        match token.class() {
            TokenClass::Punctuation => self.punctuation_tokens += 1,
            TokenClass::String => {
                self.string_tokens += 1;
                if let Token::Str(text) = token {
                    self.max_string_length = self.max_string_length.max(text.len());
                }
            }
            TokenClass::Number => self.number_tokens += 1,
            TokenClass::Keyword => self.keyword_tokens += 1,
            TokenClass::Eof => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// DFA-driven tokenizer over one document
pub struct Lexer {
    chars: Vec<char>,
    index: usize,
    position: Position,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self::with_preferences(source, LexicalPreferences::default())
    }

    pub fn with_preferences(source: &str, preferences: LexicalPreferences) -> Self {
        Self {
            chars: source.chars().collect(),
            index: 0,
            position: Position::start(),
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    fn current_char(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position = self.position.advance(ch);
            self.index += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    fn invalid_character(&self, character: char) -> LexerError {
        LexerError::InvalidCharacter {
            character,
            offset: self.position.offset,
            line: self.position.line,
            column: self.position.column,
        }
    }

    /// Produce the next token, ending with the end-of-input token
    pub fn next_token(&mut self) -> Result<Spanned<Token>, LexerError> {
        self.skip_whitespace();

        let start = self.position;

        let Some(ch) = self.current_char() else {
            return Ok(Spanned::new(Token::Eof, Span::new(start, start)));
        };

        let token = match ch {
            '{' => self.single_char_token(Token::LeftBrace),
            '}' => self.single_char_token(Token::RightBrace),
            '[' => self.single_char_token(Token::LeftBracket),
            ']' => self.single_char_token(Token::RightBracket),
            ',' => self.single_char_token(Token::Comma),
            ':' => self.single_char_token(Token::Colon),
            't' | 'f' | 'n' => self.recognize_keyword()?,
            '"' => self.recognize_string(start)?,
            ch if automaton::is_number_shaped(ch) => self.recognize_number(start)?,
            ch => return Err(self.invalid_character(ch)),
        };

        Ok(Spanned::new(token, Span::new(start, self.position)))
    }

    fn single_char_token(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    /// Run a keyword chain to its accepting state
    fn recognize_keyword(&mut self) -> Result<Token, LexerError> {
        let mut state = State::Start;

        loop {
            let symbol = self.current_char();
            let next = automaton::transition(state, symbol);

            if next == State::Invalid {
                return Err(match symbol {
                    Some(ch) => self.invalid_character(ch),
                    None => LexerError::UnexpectedEndOfInput {
                        offset: self.position.offset,
                        line: self.position.line,
                        column: self.position.column,
                    },
                });
            }

            self.advance();
            state = next;

            if automaton::is_accepting(state) {
                break;
            }
        }

        Ok(match state {
            State::TrueEnd => Token::Boolean(true),
            State::FalseEnd => Token::Boolean(false),
            _ => Token::Null,
        })
    }

    /// Consume a number-shaped span and require it to decode
    fn recognize_number(&mut self, start: Position) -> Result<Token, LexerError> {
        let mut state = State::Start;
        let mut lexeme = String::new();

        loop {
            let next = automaton::transition(state, self.current_char());
            if next != State::NumberBody {
                // Terminator stays unconsumed
                break;
            }
            if let Some(ch) = self.current_char() {
                lexeme.push(ch);
            }
            self.advance();
            state = next;
        }

        let literal = NumberLiteral::new(lexeme);
        if literal.value().is_none() {
            return Err(LexerError::InvalidNumber {
                literal: literal.raw().to_string(),
                offset: start.offset,
                line: start.line,
                column: start.column,
            });
        }

        Ok(Token::Number(literal))
    }

    /// Consume a string literal. The backslash is an ordinary character;
    /// raw newlines, tabs, and carriage returns end recognition with an
    /// error, as does end of input.
    fn recognize_string(&mut self, start: Position) -> Result<Token, LexerError> {
        let mut state = automaton::transition(State::Start, self.current_char());
        self.advance();

        let mut text = String::new();

        loop {
            let symbol = self.current_char();
            state = automaton::transition(state, symbol);

            match state {
                State::StringEnd => {
                    self.advance();
                    break;
                }
                State::Invalid => {
                    return Err(match symbol {
                        Some(ch) => self.invalid_character(ch),
                        None => LexerError::UnterminatedString {
                            offset: start.offset,
                            line: start.line,
                            column: start.column,
                        },
                    });
                }
                _ => {
                    if let Some(ch) = symbol {
                        text.push(ch);
                    }
                    self.advance();
                }
            }

            if text.len() > MAX_STRING_SIZE {
                return Err(LexerError::StringTooLarge {
                    limit: MAX_STRING_SIZE,
                    offset: start.offset,
                    line: start.line,
                    column: start.column,
                });
            }
        }

        Ok(Token::Str(text))
    }

    /// Tokenize the whole document into a sequence ending with the
    /// end-of-input token
    pub fn tokenize(&mut self) -> Result<Vec<Spanned<Token>>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            let token = match self.next_token() {
                Ok(token) => token,
                Err(err) => {
                    log_error!(err.error_code(), &err.to_string(), span = err.span());
                    return Err(err);
                }
            };

            if self.preferences.collect_detailed_metrics {
                self.metrics.record_token(&token.value);
            }

            let done = token.value == Token::Eof;
            tokens.push(token);

            if done {
                break;
            }

            if tokens.len() > MAX_TOKEN_COUNT {
                let err = LexerError::TooManyTokens {
                    limit: MAX_TOKEN_COUNT,
                };
                log_error!(err.error_code(), &err.to_string());
                return Err(err);
            }
        }

        if self.preferences.log_string_statistics {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Tokenization complete",
                "tokens" => tokens.len(),
                "max_string_length" => self.metrics.max_string_length
            );
        } else {
            log_success!(
                codes::success::TOKENIZATION_COMPLETE,
                "Tokenization complete",
                "tokens" => tokens.len()
            );
        }

        Ok(tokens)
    }
}
