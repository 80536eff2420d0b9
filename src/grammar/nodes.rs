//! Parse tree for JDL documents
//!
//! The tree is a tagged union; node labels exist only in the dump
//! rendering. Indentation is two spaces per nesting level and booleans
//! print capitalized, matching the documented dump format.

use crate::tokens::NumberLiteral;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One value in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValueNode {
    Object(Vec<PairNode>),
    List(Vec<ValueNode>),
    Str(String),
    Number(NumberLiteral),
    Boolean(bool),
    Null,
}

/// A key-value pair inside an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairNode {
    pub key: String,
    pub value: ValueNode,
}

impl PairNode {
    pub fn new(key: impl Into<String>, value: ValueNode) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl ValueNode {
    /// Render the indented tree dump
    pub fn render_tree(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output, 0);
        output
    }

    fn render_into(&self, output: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);

        match self {
            ValueNode::Object(pairs) => {
                let _ = writeln!(output, "{}Dictionary", indent);
                for pair in pairs {
                    let _ = writeln!(output, "{}  Pair", indent);
                    let _ = writeln!(output, "{}    Key: {}", indent, pair.key);
                    pair.value.render_into(output, depth + 2);
                }
            }
            ValueNode::List(items) => {
                let _ = writeln!(output, "{}List", indent);
                for item in items {
                    item.render_into(output, depth + 1);
                }
            }
            ValueNode::Str(text) => {
                let _ = writeln!(output, "{}String: {}", indent, text);
            }
            ValueNode::Number(literal) => {
                let _ = writeln!(output, "{}Number: {}", indent, literal.raw());
            }
            ValueNode::Boolean(value) => {
                let label = if *value { "True" } else { "False" };
                let _ = writeln!(output, "{}Boolean: {}", indent, label);
            }
            ValueNode::Null => {
                let _ = writeln!(output, "{}Null", indent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_dumps() {
        assert_eq!(ValueNode::Str("hi".to_string()).render_tree(), "String: hi\n");
        assert_eq!(
            ValueNode::Number(NumberLiteral::new("1.5")).render_tree(),
            "Number: 1.5\n"
        );
        assert_eq!(ValueNode::Boolean(true).render_tree(), "Boolean: True\n");
        assert_eq!(ValueNode::Boolean(false).render_tree(), "Boolean: False\n");
        assert_eq!(ValueNode::Null.render_tree(), "Null\n");
    }

    #[test]
    fn dictionary_dump_indents_pairs() {
        let tree = ValueNode::Object(vec![
            PairNode::new("name", ValueNode::Str("jdl".to_string())),
            PairNode::new("count", ValueNode::Number(NumberLiteral::new("3"))),
        ]);

        let expected = "\
Dictionary
  Pair
    Key: name
    String: jdl
  Pair
    Key: count
    Number: 3
";
        assert_eq!(tree.render_tree(), expected);
    }

    #[test]
    fn nested_structures_increase_depth() {
        let tree = ValueNode::Object(vec![PairNode::new(
            "items",
            ValueNode::List(vec![
                ValueNode::Number(NumberLiteral::new("1")),
                ValueNode::Object(vec![PairNode::new("ok", ValueNode::Boolean(false))]),
            ]),
        )]);

        let expected = "\
Dictionary
  Pair
    Key: items
    List
      Number: 1
      Dictionary
        Pair
          Key: ok
          Boolean: False
";
        assert_eq!(tree.render_tree(), expected);
    }

    #[test]
    fn empty_containers_dump_label_only() {
        assert_eq!(ValueNode::Object(vec![]).render_tree(), "Dictionary\n");
        assert_eq!(ValueNode::List(vec![]).render_tree(), "List\n");
    }
}
