//! Recursive-descent parser with one-token lookahead
//!
//! Grammar:
//!
//! ```text
//! value  := string | number | boolean | null | object | list
//! object := '{' ( pair ( ',' pair )* )? '}'
//! pair   := string ':' value
//! list   := '[' ( value ( ',' value )* )? ']'
//! ```
//!
//! The parser consumes exactly one top-level value and does not inspect
//! what follows it. Semantic rules run inline through the validator;
//! their violations never abort the parse.

use super::error::{SyntaxError, SyntaxResult};
use crate::config::compile_time::syntax::MAX_PARSE_DEPTH;
use crate::config::runtime::ParserPreferences;
use crate::grammar::{PairNode, ValueNode};
use crate::log_debug;
use crate::log_error;
use crate::log_success;
use crate::logging::codes;
use crate::semantic_analysis::{Diagnostic, Validator};
use crate::tokens::{Token, TokenKind, TokenStream};
use crate::utils::{Span, Spanned};

/// A structurally successful parse: the tree plus whatever semantic
/// rule violations were collected along the way
#[derive(Debug)]
pub struct ParseOutcome {
    pub tree: ValueNode,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct Parser {
    stream: TokenStream,
    validator: Validator,
    depth: usize,
    preferences: ParserPreferences,
}

impl Parser {
    pub fn new(stream: TokenStream) -> Self {
        Self::with_preferences(stream, ParserPreferences::default())
    }

    pub fn with_preferences(stream: TokenStream, preferences: ParserPreferences) -> Self {
        Self {
            stream,
            validator: Validator::new(),
            depth: 0,
            preferences,
        }
    }

    /// Parse one top-level value
    pub fn parse(mut self) -> SyntaxResult<ParseOutcome> {
        if self.stream.is_empty() {
            let err = SyntaxError::EmptyTokenStream;
            log_error!(err.error_code(), &err.to_string());
            return Err(err);
        }

        let tree = match self.value() {
            Ok(tree) => tree,
            Err(err) => {
                log_error!(err.error_code(), &err.to_string(), span = err.span());
                return Err(err);
            }
        };

        let diagnostics = self.validator.into_diagnostics();
        log_success!(
            codes::success::TREE_CONSTRUCTION_COMPLETE,
            "Parse tree constructed",
            "diagnostics" => diagnostics.len()
        );

        Ok(ParseOutcome { tree, diagnostics })
    }

    fn current_kind(&self) -> TokenKind {
        self.stream.current_kind().unwrap_or(TokenKind::Eof)
    }

    fn current_span(&self) -> Span {
        self.stream.current_span()
    }

    /// Consume the current token, requiring its kind
    fn eat(&mut self, kind: TokenKind) -> SyntaxResult<Spanned<Token>> {
        let found = self.current_kind();
        if found != kind {
            return Err(SyntaxError::unexpected_token(
                kind,
                found,
                self.current_span(),
            ));
        }

        self.stream
            .advance()
            .ok_or(SyntaxError::UnexpectedEndOfInput {
                span: self.current_span(),
            })
    }

    fn value(&mut self) -> SyntaxResult<ValueNode> {
        self.depth += 1;
        if self.depth > MAX_PARSE_DEPTH {
            return Err(SyntaxError::MaxRecursionDepth {
                limit: MAX_PARSE_DEPTH,
                span: self.current_span(),
            });
        }

        let node = self.value_inner()?;
        self.depth -= 1;
        Ok(node)
    }

    fn value_inner(&mut self) -> SyntaxResult<ValueNode> {
        if self.preferences.log_parse_steps {
            log_debug!("Entering value production");
        }

        match self.current_kind() {
            TokenKind::Str => {
                let text = match self.eat(TokenKind::Str)?.value {
                    Token::Str(text) => text,
                    _ => unreachable!("eat verified the token kind"),
                };
                self.validator.check_reserved_string(&text);
                Ok(ValueNode::Str(text))
            }

            TokenKind::Number => {
                let literal = match self.eat(TokenKind::Number)?.value {
                    Token::Number(literal) => literal,
                    _ => unreachable!("eat verified the token kind"),
                };
                self.validator.check_decimal_format(literal.raw());
                self.validator.check_number_format(literal.raw());
                Ok(ValueNode::Number(literal))
            }

            TokenKind::Boolean => {
                let value = match self.eat(TokenKind::Boolean)?.value {
                    Token::Boolean(value) => value,
                    _ => unreachable!("eat verified the token kind"),
                };
                Ok(ValueNode::Boolean(value))
            }

            TokenKind::Null => {
                self.eat(TokenKind::Null)?;
                Ok(ValueNode::Null)
            }

            TokenKind::LeftBrace => self.object(),
            TokenKind::LeftBracket => self.list(),

            TokenKind::Eof => Err(SyntaxError::UnexpectedEndOfInput {
                span: self.current_span(),
            }),

            other => Err(SyntaxError::grammar_violation(other, self.current_span())),
        }
    }

    fn object(&mut self) -> SyntaxResult<ValueNode> {
        self.eat(TokenKind::LeftBrace)?;
        self.validator.enter_object_scope();

        let mut pairs = Vec::new();
        if self.current_kind() != TokenKind::RightBrace {
            pairs.push(self.pair()?);
            while self.current_kind() == TokenKind::Comma {
                self.eat(TokenKind::Comma)?;
                pairs.push(self.pair()?);
            }
        }

        self.eat(TokenKind::RightBrace)?;
        self.validator.leave_object_scope();

        Ok(ValueNode::Object(pairs))
    }

    fn pair(&mut self) -> SyntaxResult<PairNode> {
        let key = match self.eat(TokenKind::Str)?.value {
            Token::Str(key) => key,
            _ => unreachable!("eat verified the token kind"),
        };

        self.validator.check_empty_key(&key);
        self.validator.check_reserved_key(&key);
        self.validator.check_duplicate_key(&key);

        self.eat(TokenKind::Colon)?;
        let value = self.value()?;

        Ok(PairNode::new(key, value))
    }

    fn list(&mut self) -> SyntaxResult<ValueNode> {
        self.eat(TokenKind::LeftBracket)?;

        let mut items = Vec::new();
        if self.current_kind() != TokenKind::RightBracket {
            // The first element's kind anchors the homogeneity rule
            let first_kind = self.current_kind();
            items.push(self.value()?);

            while self.current_kind() == TokenKind::Comma {
                self.eat(TokenKind::Comma)?;
                self.validator
                    .check_list_element(first_kind, self.current_kind());
                items.push(self.value()?);
            }
        }

        self.eat(TokenKind::RightBracket)?;
        Ok(ValueNode::List(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::Lexer;
    use crate::tokens::NumberLiteral;
    use assert_matches::assert_matches;

    fn parse_source(source: &str) -> SyntaxResult<ParseOutcome> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize().expect("tokenization should succeed");
        Parser::new(TokenStream::new(tokens)).parse()
    }

    fn diagnostics(source: &str) -> Vec<String> {
        parse_source(source)
            .expect("parse should succeed structurally")
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[test]
    fn parses_scalars() {
        assert_eq!(
            parse_source("\"hi\"").unwrap().tree,
            ValueNode::Str("hi".to_string())
        );
        assert_eq!(
            parse_source("1.5").unwrap().tree,
            ValueNode::Number(NumberLiteral::new("1.5"))
        );
        assert_eq!(parse_source("true").unwrap().tree, ValueNode::Boolean(true));
        assert_eq!(parse_source("null").unwrap().tree, ValueNode::Null);
    }

    #[test]
    fn parses_nested_structures() {
        let outcome = parse_source(r#"{"a": {"b": [1, 2]}, "c": null}"#).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(
            outcome.tree,
            ValueNode::Object(vec![
                PairNode::new(
                    "a",
                    ValueNode::Object(vec![PairNode::new(
                        "b",
                        ValueNode::List(vec![
                            ValueNode::Number(NumberLiteral::new("1")),
                            ValueNode::Number(NumberLiteral::new("2")),
                        ])
                    )])
                ),
                PairNode::new("c", ValueNode::Null),
            ])
        );
    }

    #[test]
    fn parses_empty_containers() {
        assert_eq!(parse_source("{}").unwrap().tree, ValueNode::Object(vec![]));
        assert_eq!(parse_source("[]").unwrap().tree, ValueNode::List(vec![]));
    }

    #[test]
    fn missing_colon_is_fail_fast() {
        let err = parse_source(r#"{"a" 1}"#).unwrap_err();
        assert_matches!(err, SyntaxError::UnexpectedToken { .. });
        assert!(err.to_string().starts_with("Expected ':', got number"));
    }

    #[test]
    fn non_string_key_is_rejected() {
        let err = parse_source("{1: 2}").unwrap_err();
        assert_matches!(err, SyntaxError::UnexpectedToken { .. });
        assert!(err.to_string().starts_with("Expected string, got number"));
    }

    #[test]
    fn unclosed_object_reports_end_of_input() {
        // '}' was expected but the stream ended
        let err = parse_source(r#"{"a": 1"#).unwrap_err();
        assert!(err.to_string().contains("Expected ',', got end of input")
            || err.to_string().contains("Expected '}', got end of input"));
    }

    #[test]
    fn empty_document_has_no_value() {
        let err = parse_source("").unwrap_err();
        assert_matches!(err, SyntaxError::UnexpectedEndOfInput { .. });
    }

    #[test]
    fn comma_cannot_start_a_value() {
        let err = parse_source("[,1]").unwrap_err();
        assert_matches!(err, SyntaxError::GrammarViolation { .. });
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        // One value is consumed; the rest is not inspected
        let outcome = parse_source("1 2 3").unwrap();
        assert_eq!(outcome.tree, ValueNode::Number(NumberLiteral::new("1")));
    }

    #[test]
    fn duplicate_keys_in_one_scope_are_reported() {
        assert_eq!(
            diagnostics(r#"{"a": 1, "a": 2}"#),
            vec!["Type 5 Error: Duplicate key 'a' in dictionary"]
        );
    }

    #[test]
    fn same_key_in_nested_scope_is_legal() {
        assert!(diagnostics(r#"{"a": {"a": 1}}"#).is_empty());
    }

    #[test]
    fn reserved_words_flagged_for_keys_and_values() {
        assert_eq!(
            diagnostics(r#"{"true": "null"}"#),
            vec![
                "Type 4 Error: Reserved word 'true' cannot be used as dictionary key",
                "Type 7 Error: Reserved word 'null' cannot be used as a string",
            ]
        );
    }

    #[test]
    fn mixed_case_reserved_words_are_still_flagged() {
        assert_eq!(
            diagnostics(r#"{"True": 1, "x": "NULL"}"#),
            vec![
                "Type 4 Error: Reserved word 'True' cannot be used as dictionary key",
                "Type 7 Error: Reserved word 'NULL' cannot be used as a string",
            ]
        );
    }

    #[test]
    fn reserved_rule_skips_keys_for_type7() {
        // Keys get rule 4, not rule 7
        let reports = diagnostics(r#"{"false": 1}"#);
        assert_eq!(reports.len(), 1);
        assert!(reports[0].starts_with("Type 4"));
    }

    #[test]
    fn malformed_numbers_are_semantic_not_structural() {
        assert_eq!(
            diagnostics(r#"[.5, 007]"#),
            vec![
                "Type 1 Error at .5: Invalid decimal number format",
                "Type 3 Error at 007: Invalid number format - leading zeros",
            ]
        );
    }

    #[test]
    fn heterogeneous_list_is_reported_once_per_mismatch() {
        assert_eq!(
            diagnostics(r#"[1, "a", 2]"#),
            vec!["Type 6 Error: Inconsistent types in list"]
        );
    }

    #[test]
    fn list_of_lists_is_exempt_from_homogeneity() {
        assert!(diagnostics(r#"[[1], "a"]"#).is_empty());
    }

    #[test]
    fn empty_key_and_duplicate_interact_in_order() {
        assert_eq!(
            diagnostics(r#"{" ": 1, " ": 2}"#),
            vec![
                "Type 2 Error: Empty dictionary key",
                "Type 2 Error: Empty dictionary key",
                "Type 5 Error: Duplicate key ' ' in dictionary",
            ]
        );
    }

    #[test]
    fn exponent_number_via_token_stream_is_semantic() {
        // The tokenizer never produces an exponent form, but token text
        // input can carry one; rule 3 must catch it
        let stream = TokenStream::from_tokens(vec![
            Token::LeftBracket,
            Token::Number(NumberLiteral::new("1e+5")),
            Token::RightBracket,
            Token::Eof,
        ]);
        let outcome = Parser::new(stream).parse().unwrap();

        assert_eq!(
            outcome.diagnostics[0].to_string(),
            "Type 3 Error at 1e+5: Invalid number format - leading + in exponent"
        );
    }

    #[test]
    fn uppercase_exponent_via_token_stream_is_semantic() {
        let stream = TokenStream::from_tokens(vec![
            Token::LeftBracket,
            Token::Number(NumberLiteral::new("1E+5")),
            Token::RightBracket,
            Token::Eof,
        ]);
        let outcome = Parser::new(stream).parse().unwrap();

        assert_eq!(
            outcome.diagnostics[0].to_string(),
            "Type 3 Error at 1e+5: Invalid number format - leading + in exponent"
        );
    }

    #[test]
    fn deep_nesting_hits_the_depth_guard() {
        let depth = MAX_PARSE_DEPTH + 8;
        let mut source = String::new();
        source.push_str(&"[".repeat(depth));
        source.push('1');
        source.push_str(&"]".repeat(depth));

        let err = parse_source(&source).unwrap_err();
        assert_matches!(err, SyntaxError::MaxRecursionDepth { .. });
    }

    #[test]
    fn empty_stream_is_its_own_error() {
        let err = Parser::new(TokenStream::from_tokens(vec![])).parse().unwrap_err();
        assert_matches!(err, SyntaxError::EmptyTokenStream);
    }
}
