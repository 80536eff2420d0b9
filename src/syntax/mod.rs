//! Syntactic analysis: structural errors and the recursive-descent parser

pub mod error;
pub mod parser;

pub use error::{SyntaxError, SyntaxResult};
pub use parser::{ParseOutcome, Parser};
