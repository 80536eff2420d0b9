// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod semantic_analysis;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use grammar::{PairNode, ValueNode};
pub use pipeline::{PipelineError, PipelineOutput};
pub use semantic_analysis::{Diagnostic, RuleKind, Validator};
pub use syntax::{ParseOutcome, Parser, SyntaxError};
pub use tokens::{Token, TokenKind, TokenStream};
