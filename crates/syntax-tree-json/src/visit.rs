//! Read-only traversal over a decoded tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::node::{Node, NodeKind};

/// A visitor over syntax tree nodes.
///
/// Every `visit_*` method defaults to walking the node's children, so an
/// implementation only overrides the variants it cares about. Unlike
/// [`Node::child_nodes`], the default object walk visits keys as well as
/// values.
pub trait Visit<'s> {
    fn visit(&mut self, node: &Node<'s>) {
        match &node.kind {
            NodeKind::Root(_) => self.visit_root(node),
            NodeKind::Array(_) => self.visit_array(node),
            NodeKind::Object(_) => self.visit_object(node),
            NodeKind::String(_) => self.visit_string(node),
            NodeKind::Number(_) => self.visit_number(node),
            NodeKind::True => self.visit_true(node),
            NodeKind::False => self.visit_false(node),
            NodeKind::Null => self.visit_null(node),
        }
    }

    fn visit_child_nodes(&mut self, node: &Node<'s>) {
        match &node.kind {
            NodeKind::Object(pairs) => {
                for (key, value) in pairs {
                    self.visit(key);
                    self.visit(value);
                }
            }
            _ => {
                for child in node.child_nodes() {
                    self.visit(child);
                }
            }
        }
    }

    fn visit_root(&mut self, node: &Node<'s>) {
        self.visit_child_nodes(node);
    }

    fn visit_array(&mut self, node: &Node<'s>) {
        self.visit_child_nodes(node);
    }

    fn visit_object(&mut self, node: &Node<'s>) {
        self.visit_child_nodes(node);
    }

    fn visit_string(&mut self, _node: &Node<'s>) {}

    fn visit_number(&mut self, _node: &Node<'s>) {}

    fn visit_true(&mut self, _node: &Node<'s>) {}

    fn visit_false(&mut self, _node: &Node<'s>) {}

    fn visit_null(&mut self, _node: &Node<'s>) {}
}

/// Node counts per variant plus overall depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub nodes: usize,
    pub depth: usize,
    pub counts: BTreeMap<&'static str, usize>,
}

impl Summary {
    pub fn of(node: &Node<'_>) -> Self {
        let mut summary = Summary {
            depth: node.depth(),
            ..Summary::default()
        };
        summary.visit(node);
        summary
    }
}

impl<'s> Visit<'s> for Summary {
    fn visit(&mut self, node: &Node<'s>) {
        self.nodes += 1;
        *self.counts.entry(node.type_name()).or_insert(0) += 1;
        self.visit_child_nodes(node);
    }
}
