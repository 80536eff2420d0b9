//! Token types, the token stream cursor, and the token text format

pub mod token;
pub mod token_stream;
pub mod wire;

pub use token::{NumberLiteral, Token, TokenClass, TokenKind};
pub use token_stream::TokenStream;
pub use wire::{read_token_text, write_token_text, WireError};
