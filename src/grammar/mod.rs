//! Parse tree node definitions

pub mod nodes;

pub use nodes::{PairNode, ValueNode};
