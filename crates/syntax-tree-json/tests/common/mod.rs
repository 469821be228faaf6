#![allow(dead_code)]

use proptest::prelude::*;
use stjn_buffers::Writer;

/// Hand-assembled STJN byte stream.
#[derive(Default)]
pub struct Stream {
    writer: Writer,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a stream with a valid `STJN` 0.3.0 header.
    pub fn with_header() -> Self {
        Self::new().header(b"STJN", [0, 3, 0])
    }

    pub fn header(mut self, magic: &[u8], version: [u32; 3]) -> Self {
        self.writer.buf(magic);
        for field in version {
            self.writer.u32_le(field);
        }
        self
    }

    pub fn node(mut self, directive: u8, start: u64, end: u64) -> Self {
        self.writer.u8(directive);
        self.writer.u64_le(start);
        self.writer.u64_le(end);
        self
    }

    pub fn length(mut self, length: u64) -> Self {
        self.writer.u64_le(length);
        self
    }

    pub fn array(self, start: u64, end: u64, length: u64) -> Self {
        self.node(b'A', start, end).length(length)
    }

    pub fn object(self, start: u64, end: u64, length: u64) -> Self {
        self.node(b'O', start, end).length(length)
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.writer.buf(bytes);
        self
    }

    pub fn bytes(mut self) -> Vec<u8> {
        self.writer.flush()
    }
}

/// Shape of a JSON document used to generate matching source text and
/// serialized streams.
#[derive(Debug, Clone)]
pub enum Tree {
    Array(Vec<Tree>),
    Object(Vec<(String, Tree)>),
    Str(String),
    Num(i64),
    True,
    False,
    Null,
}

struct Spanned {
    directive: u8,
    start: u64,
    end: u64,
    children: Vec<Spanned>,
}

fn lay_out(tree: &Tree, source: &mut String) -> Spanned {
    let start = source.len() as u64;
    let (directive, children) = match tree {
        Tree::Array(values) => {
            source.push('[');
            let mut children = Vec::new();
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    source.push_str(", ");
                }
                children.push(lay_out(value, source));
            }
            source.push(']');
            (b'A', children)
        }
        Tree::Object(pairs) => {
            source.push('{');
            let mut children = Vec::new();
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    source.push_str(", ");
                }
                children.push(lay_out(&Tree::Str(key.clone()), source));
                source.push_str(": ");
                children.push(lay_out(value, source));
            }
            source.push('}');
            (b'O', children)
        }
        Tree::Str(text) => {
            source.push('"');
            source.push_str(text);
            source.push('"');
            (b'S', Vec::new())
        }
        Tree::Num(n) => {
            source.push_str(&n.to_string());
            (b'#', Vec::new())
        }
        Tree::True => {
            source.push_str("true");
            (b'T', Vec::new())
        }
        Tree::False => {
            source.push_str("false");
            (b'F', Vec::new())
        }
        Tree::Null => {
            source.push_str("null");
            (b'N', Vec::new())
        }
    };
    Spanned {
        directive,
        start,
        end: source.len() as u64,
        children,
    }
}

fn write(span: &Spanned, stream: Stream) -> Stream {
    let mut stream = stream.node(span.directive, span.start, span.end);
    match span.directive {
        b'A' => stream = stream.length(span.children.len() as u64),
        b'O' => stream = stream.length(span.children.len() as u64 / 2),
        _ => {}
    }
    span.children
        .iter()
        .fold(stream, |stream, child| write(child, stream))
}

/// Source text for `tree` plus the bare node stream (no header, no root).
pub fn serialize_value(tree: &Tree) -> (String, Vec<u8>) {
    let mut source = String::new();
    let span = lay_out(tree, &mut source);
    (source, write(&span, Stream::new()).bytes())
}

/// Source text for `tree` plus a complete stream: header, root, value.
pub fn serialize_document(tree: &Tree) -> (String, Vec<u8>) {
    let mut source = String::new();
    let span = lay_out(tree, &mut source);
    let len = source.len() as u64;
    let stream = Stream::with_header().node(b'R', 0, len);
    (source, write(&span, stream).bytes())
}

pub fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![
        Just(Tree::True),
        Just(Tree::False),
        Just(Tree::Null),
        any::<i64>().prop_map(Tree::Num),
        "[a-zé ]{0,6}".prop_map(Tree::Str),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Tree::Array),
            prop::collection::vec(("[a-z]{0,4}", inner), 0..6).prop_map(Tree::Object),
        ]
    })
}
