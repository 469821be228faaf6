//! Node directives: the one-byte tags that open every serialized node.

use std::fmt;

/// Magic prefix of a serialized syntax tree.
pub const MAGIC: [u8; 4] = *b"STJN";

/// Tag byte naming the node variant that follows in the stream.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Array = b'A',
    False = b'F',
    Null = b'N',
    Number = b'#',
    Object = b'O',
    Root = b'R',
    String = b'S',
    True = b'T',
}

impl Directive {
    pub const ALL: [Directive; 8] = [
        Directive::Array,
        Directive::False,
        Directive::Null,
        Directive::Number,
        Directive::Object,
        Directive::Root,
        Directive::String,
        Directive::True,
    ];

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            b'A' => Some(Self::Array),
            b'F' => Some(Self::False),
            b'N' => Some(Self::Null),
            b'#' => Some(Self::Number),
            b'O' => Some(Self::Object),
            b'R' => Some(Self::Root),
            b'S' => Some(Self::String),
            b'T' => Some(Self::True),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Lower-case variant name, as used in diagnostics and dumps.
    pub fn name(self) -> &'static str {
        match self {
            Directive::Array => "array",
            Directive::False => "false",
            Directive::Null => "null",
            Directive::Number => "number",
            Directive::Object => "object",
            Directive::Root => "root",
            Directive::String => "string",
            Directive::True => "true",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ('{}')", self.name(), self.as_u8() as char)
    }
}
