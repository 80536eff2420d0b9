//! Lexical analysis: the recognition automaton and the tokenizer

pub mod analyzer;
pub mod automaton;

pub use analyzer::{Lexer, LexerError, LexicalMetrics};
pub use automaton::{is_accepting, transition, State};
