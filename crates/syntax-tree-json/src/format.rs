//! Reflowed JSON output for a decoded tree.
//!
//! Arrays and objects stay on one line when they fit in the target width,
//! including any comma that follows them. Otherwise each element moves to
//! its own line, indented two columns past the enclosing container, and the
//! closing bracket returns to the container's indentation. A root ends with
//! a newline.
//!
//! ```text
//! { "a": [1, 2] }        width 80
//!
//! {                      width 10
//!   "a": [
//!     1,
//!     2
//!   ]
//! }
//! ```

use crate::node::{Node, NodeKind};

enum Doc<'s> {
    Text(&'s str),
    /// `key: value`; only the value may break.
    Pair(Box<Doc<'s>>, Box<Doc<'s>>),
    Container {
        open: &'static str,
        close: &'static str,
        /// Written inside the brackets when flat: `[a]` but `{ a }`.
        padding: &'static str,
        items: Vec<Doc<'s>>,
    },
}

impl<'s> Doc<'s> {
    fn of(node: &Node<'s>) -> Doc<'s> {
        match &node.kind {
            NodeKind::Root(value) => Doc::of(value),
            NodeKind::Array(values) => Doc::Container {
                open: "[",
                close: "]",
                padding: "",
                items: values.iter().map(Doc::of).collect(),
            },
            NodeKind::Object(pairs) => Doc::Container {
                open: "{",
                close: "}",
                padding: " ",
                items: pairs
                    .iter()
                    .map(|(key, value)| Doc::Pair(Box::new(Doc::of(key)), Box::new(Doc::of(value))))
                    .collect(),
            },
            NodeKind::String(text) | NodeKind::Number(text) => Doc::Text(*text),
            NodeKind::True => Doc::Text("true"),
            NodeKind::False => Doc::Text("false"),
            NodeKind::Null => Doc::Text("null"),
        }
    }

    fn flat_len(&self) -> usize {
        match self {
            Doc::Text(text) => text.chars().count(),
            Doc::Pair(key, value) => key.flat_len() + 2 + value.flat_len(),
            Doc::Container {
                open,
                close,
                padding,
                items,
            } => {
                let inner: usize = items.iter().map(Doc::flat_len).sum();
                open.len()
                    + close.len()
                    + 2 * padding.len()
                    + inner
                    + items.len().saturating_sub(1) * 2
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

    fn flat(&mut self, doc: &Doc<'_>) {
        match doc {
            Doc::Text(text) => self.text(text),
            Doc::Pair(key, value) => {
                self.flat(key);
                self.text(": ");
                self.flat(value);
            }
            Doc::Container {
                open,
                close,
                padding,
                items,
            } => {
                self.text(open);
                self.text(padding);
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.text(", ");
                    }
                    self.flat(item);
                }
                self.text(padding);
                self.text(close);
            }
        }
    }

    /// `trailing` is the width of text that must share the line after `doc`.
    fn print(&mut self, doc: &Doc<'_>, indent: usize, trailing: usize) {
        if self.column + doc.flat_len() + trailing <= self.width {
            self.flat(doc);
            return;
        }
        match doc {
            Doc::Text(text) => self.text(text),
            Doc::Pair(key, value) => {
                self.flat(key);
                self.text(": ");
                self.print(value, indent, trailing);
            }
            Doc::Container { items, .. } if items.is_empty() => self.flat(doc),
            Doc::Container {
                open, close, items, ..
            } => {
                self.text(open);
                for (i, item) in items.iter().enumerate() {
                    let last = i + 1 == items.len();
                    self.newline(indent + 2);
                    self.print(item, indent + 2, if last { 0 } else { 1 });
                    if !last {
                        self.text(",");
                    }
                }
                self.newline(indent);
                self.text(close);
            }
        }
    }
}

/// Renders `node` as JSON text reflowed to `width` columns.
///
/// String and number text is reproduced exactly as it appears in the
/// source. A root node is followed by a newline.
pub fn format(node: &Node<'_>, width: usize) -> String {
    let mut printer = Printer {
        out: String::new(),
        width,
        column: 0,
    };
    printer.print(&Doc::of(node), 0, 0);
    if matches!(node.kind, NodeKind::Root(_)) {
        printer.out.push('\n');
    }
    printer.out
}
