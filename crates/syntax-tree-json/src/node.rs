//! Syntax tree node model.
//!
//! A decoded tree borrows the source text: `String` and `Number` payloads are
//! slices of it, so the source must outlive the tree.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::directive::Directive;
use crate::location::Location;

/// A syntax tree node: a variant plus the span it covers in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'s> {
    pub location: Location,
    pub kind: NodeKind<'s>,
}

/// Node variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind<'s> {
    /// Top of the tree; wraps exactly one value.
    Root(Box<Node<'s>>),
    Array(Vec<Node<'s>>),
    /// Key/value pairs in source order. Duplicate keys are kept.
    Object(Vec<(Node<'s>, Node<'s>)>),
    /// Raw source text, surrounding quotes included.
    String(&'s str),
    /// Raw source text, not parsed.
    Number(&'s str),
    True,
    False,
    Null,
}

impl<'s> Node<'s> {
    pub fn new(kind: NodeKind<'s>, location: Location) -> Self {
        Self { location, kind }
    }

    pub fn directive(&self) -> Directive {
        match self.kind {
            NodeKind::Root(_) => Directive::Root,
            NodeKind::Array(_) => Directive::Array,
            NodeKind::Object(_) => Directive::Object,
            NodeKind::String(_) => Directive::String,
            NodeKind::Number(_) => Directive::Number,
            NodeKind::True => Directive::True,
            NodeKind::False => Directive::False,
            NodeKind::Null => Directive::Null,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.directive().name()
    }

    /// Raw text of a `String` or `Number` node.
    pub fn as_str(&self) -> Option<&'s str> {
        match self.kind {
            NodeKind::String(text) | NodeKind::Number(text) => Some(text),
            _ => None,
        }
    }

    /// Direct children. For objects these are the values only.
    pub fn child_nodes(&self) -> Vec<&Node<'s>> {
        match &self.kind {
            NodeKind::Root(value) => vec![value.as_ref()],
            NodeKind::Array(values) => values.iter().collect(),
            NodeKind::Object(pairs) => pairs.iter().map(|(_, value)| value).collect(),
            _ => Vec::new(),
        }
    }

    /// Depth of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        let below = match &self.kind {
            NodeKind::Object(pairs) => pairs
                .iter()
                .map(|(key, value)| key.depth().max(value.depth()))
                .max()
                .unwrap_or(0),
            _ => self
                .child_nodes()
                .into_iter()
                .map(Node::depth)
                .max()
                .unwrap_or(0),
        };
        below + 1
    }
}

/// Human-readable rendering. Not escaped and not valid JSON in general.
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Root(value) => write!(f, "{value}"),
            NodeKind::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
            NodeKind::Object(pairs) => {
                f.write_str("{ ")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str(" }")
            }
            NodeKind::String(text) | NodeKind::Number(text) => f.write_str(text),
            NodeKind::True => f.write_str("true"),
            NodeKind::False => f.write_str("false"),
            NodeKind::Null => f.write_str("null"),
        }
    }
}

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_payload = !matches!(
            self.kind,
            NodeKind::True | NodeKind::False | NodeKind::Null
        );
        let len = if has_payload { 3 } else { 2 };
        let mut state = serializer.serialize_struct("Node", len)?;
        state.serialize_field("type", self.type_name())?;
        state.serialize_field("location", &self.location)?;
        match &self.kind {
            NodeKind::Root(value) => state.serialize_field("value", value)?,
            NodeKind::Array(values) => state.serialize_field("values", values)?,
            NodeKind::Object(pairs) => state.serialize_field("values", pairs)?,
            NodeKind::String(text) | NodeKind::Number(text) => {
                state.serialize_field("value", text)?
            }
            NodeKind::True | NodeKind::False | NodeKind::Null => {}
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(kind: NodeKind<'static>, start: u64, end: u64) -> Node<'static> {
        Node::new(kind, Location::new(start, end))
    }

    // {"a": 1, "b": [true, false, null]}
    fn sample() -> Node<'static> {
        let array = leaf(
            NodeKind::Array(vec![
                leaf(NodeKind::True, 15, 19),
                leaf(NodeKind::False, 21, 26),
                leaf(NodeKind::Null, 28, 32),
            ]),
            14,
            33,
        );
        let object = leaf(
            NodeKind::Object(vec![
                (leaf(NodeKind::String("\"a\""), 1, 4), leaf(NodeKind::Number("1"), 6, 7)),
                (leaf(NodeKind::String("\"b\""), 9, 12), array),
            ]),
            0,
            34,
        );
        leaf(NodeKind::Root(Box::new(object)), 0, 34)
    }

    #[test]
    fn display_matches_debug_rendering() {
        assert_eq!(
            sample().to_string(),
            "{ \"a\": 1, \"b\": [true, false, null] }"
        );
    }

    #[test]
    fn display_of_empty_containers() {
        assert_eq!(leaf(NodeKind::Array(vec![]), 0, 2).to_string(), "[]");
        assert_eq!(leaf(NodeKind::Object(vec![]), 0, 2).to_string(), "{  }");
    }

    #[test]
    fn display_does_not_escape() {
        let node = leaf(NodeKind::String("\"line\\nbreak\""), 0, 13);
        assert_eq!(node.to_string(), "\"line\\nbreak\"");
    }

    #[test]
    fn object_children_are_values() {
        let root = sample();
        let object = root.child_nodes()[0];
        let children: Vec<_> = object.child_nodes().iter().map(|n| n.type_name()).collect();
        assert_eq!(children, vec!["number", "array"]);
        assert!(leaf(NodeKind::Null, 0, 4).child_nodes().is_empty());
    }

    #[test]
    fn directive_and_text_accessors() {
        let number = leaf(NodeKind::Number("-1.5e3"), 0, 6);
        assert_eq!(number.directive(), Directive::Number);
        assert_eq!(number.as_str(), Some("-1.5e3"));
        assert_eq!(leaf(NodeKind::True, 0, 4).as_str(), None);
    }

    #[test]
    fn depth_counts_levels() {
        assert_eq!(leaf(NodeKind::Null, 0, 4).depth(), 1);
        assert_eq!(sample().depth(), 4);
    }

    #[test]
    fn serializes_with_type_and_location() {
        let value = serde_json::to_value(leaf(
            NodeKind::Array(vec![leaf(NodeKind::Number("1"), 1, 2), leaf(NodeKind::Null, 4, 8)]),
            0,
            9,
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({
                "type": "array",
                "location": {"start_offset": 0, "end_offset": 9},
                "values": [
                    {"type": "number", "location": {"start_offset": 1, "end_offset": 2}, "value": "1"},
                    {"type": "null", "location": {"start_offset": 4, "end_offset": 8}}
                ]
            })
        );
    }

    #[test]
    fn object_pairs_serialize_as_arrays() {
        let value = serde_json::to_value(sample()).unwrap();
        let pairs = &value["value"]["values"];
        assert_eq!(pairs[0][0]["value"], json!("\"a\""));
        assert_eq!(pairs[1][1]["type"], json!("array"));
    }
}
