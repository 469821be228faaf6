//! S-expression pretty printer for inspecting a decoded tree.
//!
//! ```text
//! (root value=(array values=[true, (number value="1")]))
//! ```
//!
//! A group stays on one line when it fits in the target width. Otherwise
//! each field moves to its own line, indented two columns, and the closing
//! parenthesis returns to the group's indentation.

use crate::node::{Node, NodeKind};

pub const DEFAULT_WIDTH: usize = 80;

enum Doc {
    Text(String),
    Group {
        name: &'static str,
        fields: Vec<(&'static str, Doc)>,
    },
    List(Vec<Doc>),
}

impl Doc {
    fn of(node: &Node<'_>) -> Doc {
        match &node.kind {
            NodeKind::Root(value) => Doc::group("root", "value", Doc::of(value)),
            NodeKind::Array(values) => {
                Doc::group("array", "values", Doc::List(values.iter().map(Doc::of).collect()))
            }
            NodeKind::Object(pairs) => Doc::group(
                "object",
                "values",
                Doc::List(
                    pairs
                        .iter()
                        .map(|(key, value)| Doc::List(vec![Doc::of(key), Doc::of(value)]))
                        .collect(),
                ),
            ),
            NodeKind::String(text) => Doc::group("string", "value", Doc::Text(format!("{text:?}"))),
            NodeKind::Number(text) => Doc::group("number", "value", Doc::Text(format!("{text:?}"))),
            NodeKind::True => Doc::Text("true".to_string()),
            NodeKind::False => Doc::Text("false".to_string()),
            NodeKind::Null => Doc::Text("null".to_string()),
        }
    }

    fn group(name: &'static str, field: &'static str, value: Doc) -> Doc {
        Doc::Group {
            name,
            fields: vec![(field, value)],
        }
    }

    fn flat_len(&self) -> usize {
        match self {
            Doc::Text(text) => text.chars().count(),
            // "(" name " field=" value ... ")"
            Doc::Group { name, fields } => {
                1 + name.len()
                    + fields
                        .iter()
                        .map(|(field, value)| 2 + field.len() + value.flat_len())
                        .sum::<usize>()
                    + 1
            }
            Doc::List(items) => {
                let inner: usize = items.iter().map(Doc::flat_len).sum();
                2 + inner + items.len().saturating_sub(1) * 2
            }
        }
    }
}

struct Printer {
    out: String,
    width: usize,
    column: usize,
}

impl Printer {
    fn text(&mut self, text: &str) {
        self.out.push_str(text);
        self.column += text.chars().count();
    }

    fn newline(&mut self, indent: usize) {
        self.out.push('\n');
        self.out.push_str(&" ".repeat(indent));
        self.column = indent;
    }

    fn flat(&mut self, doc: &Doc) {
        match doc {
            Doc::Text(text) => self.text(text),
            Doc::Group { name, fields } => {
                self.text("(");
                self.text(name);
                for (field, value) in fields {
                    self.text(" ");
                    self.text(field);
                    self.text("=");
                    self.flat(value);
                }
                self.text(")");
            }
            Doc::List(items) => {
                self.text("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.text(", ");
                    }
                    self.flat(item);
                }
                self.text("]");
            }
        }
    }

    fn print(&mut self, doc: &Doc, indent: usize) {
        if self.column + doc.flat_len() <= self.width {
            self.flat(doc);
            return;
        }
        match doc {
            Doc::Text(text) => self.text(text),
            Doc::Group { name, fields } => {
                self.text("(");
                self.text(name);
                for (field, value) in fields {
                    self.newline(indent + 2);
                    self.text(field);
                    self.text("=");
                    self.print(value, indent + 2);
                }
                self.newline(indent);
                self.text(")");
            }
            Doc::List(items) => {
                self.text("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.text(",");
                        self.newline(indent + 1);
                    }
                    self.print(item, indent + 1);
                }
                self.text("]");
            }
        }
    }
}

/// Renders `node` as an s-expression, breaking groups wider than `width`.
pub fn pretty_print(node: &Node<'_>, width: usize) -> String {
    let mut printer = Printer {
        out: String::new(),
        width,
        column: 0,
    };
    printer.print(&Doc::of(node), 0);
    printer.out
}
