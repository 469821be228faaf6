//! `Decoder`: recursive-descent reader for serialized syntax tree nodes.
//!
//! Node layout, repeated recursively:
//!
//! ```text
//! directive    : 1 byte
//! start_offset : u64 LE
//! end_offset   : u64 LE
//! [length]     : u64 LE, arrays and objects only
//! [children]   : n nodes (array), 2n nodes (object), 1 node (root)
//! ```
//!
//! String and number nodes carry no inline bytes; their text is the source
//! slice named by their location.

use stjn_buffers::ReadExact;

use crate::directive::Directive;
use crate::error::{DecodeError, Field};
use crate::location::Location;
use crate::node::{Node, NodeKind};

/// Default nesting limit. The root counts as one level.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Upper bound on children reserved up front for one container; the rest
/// grow on demand as children actually decode.
const MAX_PREALLOC: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Deepest nesting level accepted. A lone scalar is level 1.
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Stateless node decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecoderOptions,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DecoderOptions {
        self.options
    }

    /// Decodes one node, and its children, from `cursor`.
    ///
    /// The cursor must sit at a directive byte, past any stream header.
    pub fn decode<'s, C: ReadExact>(
        &self,
        source: &'s str,
        cursor: &mut C,
    ) -> Result<Node<'s>, DecodeError> {
        self.read_any(source, cursor, 1)
    }

    /// Like [`Decoder::decode`], but fails with `ExpectedRoot` as soon as the
    /// first directive is read if it is not a root.
    pub fn decode_root<'s, C: ReadExact>(
        &self,
        source: &'s str,
        cursor: &mut C,
    ) -> Result<Node<'s>, DecodeError> {
        self.check_depth(cursor, 1)?;
        let directive = self.read_directive(cursor)?;
        if directive != Directive::Root {
            return Err(DecodeError::ExpectedRoot { found: directive });
        }
        self.read_body(directive, source, cursor, 1)
    }

    fn read_any<'s, C: ReadExact>(
        &self,
        source: &'s str,
        cursor: &mut C,
        depth: usize,
    ) -> Result<Node<'s>, DecodeError> {
        self.check_depth(cursor, depth)?;
        let directive = self.read_directive(cursor)?;
        self.read_body(directive, source, cursor, depth)
    }

    fn read_body<'s, C: ReadExact>(
        &self,
        directive: Directive,
        source: &'s str,
        cursor: &mut C,
        depth: usize,
    ) -> Result<Node<'s>, DecodeError> {
        let location = self.read_location(cursor)?;
        let kind = match directive {
            Directive::Array => {
                let length = self.read_length(cursor)?;
                let mut values = Vec::with_capacity(length.min(MAX_PREALLOC));
                for _ in 0..length {
                    values.push(self.read_any(source, cursor, depth + 1)?);
                }
                NodeKind::Array(values)
            }
            Directive::Object => {
                let length = self.read_length(cursor)?;
                let mut pairs = Vec::with_capacity(length.min(MAX_PREALLOC));
                for _ in 0..length {
                    let key = self.read_any(source, cursor, depth + 1)?;
                    let value = self.read_any(source, cursor, depth + 1)?;
                    pairs.push((key, value));
                }
                NodeKind::Object(pairs)
            }
            Directive::Root => NodeKind::Root(Box::new(self.read_any(source, cursor, depth + 1)?)),
            Directive::String => NodeKind::String(slice(source, location, directive)?),
            Directive::Number => NodeKind::Number(slice(source, location, directive)?),
            Directive::True => NodeKind::True,
            Directive::False => NodeKind::False,
            Directive::Null => NodeKind::Null,
        };
        Ok(Node::new(kind, location))
    }

    fn check_depth<C: ReadExact>(&self, cursor: &C, depth: usize) -> Result<(), DecodeError> {
        if depth > self.options.max_depth {
            return Err(DecodeError::RecursionLimitExceeded {
                limit: self.options.max_depth,
                offset: cursor.position(),
            });
        }
        Ok(())
    }

    fn read_directive<C: ReadExact>(&self, cursor: &mut C) -> Result<Directive, DecodeError> {
        let offset = cursor.position();
        let byte = cursor
            .read_u8()
            .map_err(|err| DecodeError::from_buffer(err, Field::Directive))?;
        Directive::from_u8(byte).ok_or(DecodeError::UnknownDirective { byte, offset })
    }

    /// Present for every directive, payload or not.
    fn read_location<C: ReadExact>(&self, cursor: &mut C) -> Result<Location, DecodeError> {
        let bytes = cursor
            .read_array::<16>()
            .map_err(|err| DecodeError::from_buffer(err, Field::Location))?;
        let mut start = [0u8; 8];
        let mut end = [0u8; 8];
        start.copy_from_slice(&bytes[..8]);
        end.copy_from_slice(&bytes[8..]);
        Ok(Location::new(
            u64::from_le_bytes(start),
            u64::from_le_bytes(end),
        ))
    }

    fn read_length<C: ReadExact>(&self, cursor: &mut C) -> Result<usize, DecodeError> {
        let offset = cursor.position();
        let length = cursor
            .read_u64_le()
            .map_err(|err| DecodeError::from_buffer(err, Field::Length))?;
        usize::try_from(length).map_err(|_| DecodeError::LengthOverflow { length, offset })
    }
}

fn slice<'s>(
    source: &'s str,
    location: Location,
    directive: Directive,
) -> Result<&'s str, DecodeError> {
    location.slice(source).ok_or(DecodeError::InvalidOffsets {
        directive,
        start: location.start_offset,
        end: location.end_offset,
        source_len: source.len(),
    })
}

/// Decodes one node with default options.
pub fn decode<'s, C: ReadExact>(source: &'s str, cursor: &mut C) -> Result<Node<'s>, DecodeError> {
    Decoder::new().decode(source, cursor)
}
