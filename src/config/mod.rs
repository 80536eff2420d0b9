//! Configuration for the JDL front end
//!
//! Compile-time constants are hard boundaries; runtime preferences only
//! tune logging and diagnostics detail.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{LexicalPreferences, LoggingPreferences, ParserPreferences, RuntimeConfig};
