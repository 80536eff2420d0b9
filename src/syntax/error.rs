//! Structural parse errors
//!
//! These are fail-fast: the first one aborts the parse and no tree is
//! produced. Semantic rule violations are not errors at this level;
//! they accumulate in the validator instead.

use crate::logging::codes;
use crate::tokens::TokenKind;
use crate::utils::Span;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyntaxError {
    #[error("Expected {expected}, got {found} at line {}", .span.start.line)]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Unexpected end of input at line {}", .span.start.line)]
    UnexpectedEndOfInput { span: Span },

    #[error("Token stream is empty")]
    EmptyTokenStream,

    #[error("{found} cannot start a value at line {}", .span.start.line)]
    GrammarViolation { found: String, span: Span },

    #[error("Nesting exceeds maximum parse depth of {limit}")]
    MaxRecursionDepth { limit: usize, span: Span },
}

impl SyntaxError {
    pub fn unexpected_token(expected: TokenKind, found: TokenKind, span: Span) -> Self {
        SyntaxError::UnexpectedToken {
            expected: expected.name().to_string(),
            found: found.name().to_string(),
            span,
        }
    }

    pub fn grammar_violation(found: TokenKind, span: Span) -> Self {
        SyntaxError::GrammarViolation {
            found: found.name().to_string(),
            span,
        }
    }

    pub fn error_code(&self) -> codes::Code {
        match self {
            SyntaxError::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            SyntaxError::UnexpectedEndOfInput { .. } => codes::syntax::UNEXPECTED_END_OF_INPUT,
            SyntaxError::EmptyTokenStream => codes::syntax::EMPTY_TOKEN_STREAM,
            SyntaxError::GrammarViolation { .. } => codes::syntax::GRAMMAR_VIOLATION,
            SyntaxError::MaxRecursionDepth { .. } => codes::syntax::MAX_RECURSION_DEPTH,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::UnexpectedEndOfInput { span }
            | SyntaxError::GrammarViolation { span, .. }
            | SyntaxError::MaxRecursionDepth { span, .. } => *span,
            SyntaxError::EmptyTokenStream => Span::dummy(),
        }
    }

    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}
