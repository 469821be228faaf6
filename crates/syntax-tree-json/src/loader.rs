//! Whole-stream loading: header, then a single root node.

use std::io::Read;

use stjn_buffers::{ReadExact, Reader, StreamReader};
use tracing::{debug, trace};

use crate::decoder::{Decoder, DecoderOptions};
use crate::error::DecodeError;
use crate::header::Header;
use crate::node::Node;

/// Reads a complete serialized tree: validated header followed by a root.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    decoder: Decoder,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecoderOptions) -> Self {
        Self {
            decoder: Decoder::with_options(options),
        }
    }

    /// Loads a tree from an in-memory stream.
    ///
    /// Bytes after the root node are ignored.
    pub fn load<'s>(&self, source: &'s str, bytes: &[u8]) -> Result<Node<'s>, DecodeError> {
        let mut reader = Reader::new(bytes);
        let root = self.load_from(source, &mut reader)?;
        if reader.size() > 0 {
            debug!(trailing = reader.size(), "ignoring bytes after root node");
        }
        Ok(root)
    }

    /// Loads a tree from any cursor positioned at the start of the header.
    pub fn load_from<'s, C: ReadExact>(
        &self,
        source: &'s str,
        cursor: &mut C,
    ) -> Result<Node<'s>, DecodeError> {
        let header = Header::read_and_validate(cursor)?;
        trace!(version = %header.version, "header accepted");
        let root = self.decoder.decode_root(source, cursor)?;
        debug!(
            consumed = cursor.position(),
            depth = root.depth(),
            "decoded syntax tree"
        );
        Ok(root)
    }

    /// Loads a tree from an [`io::Read`](std::io::Read) stream.
    pub fn load_from_reader<'s, R: Read>(
        &self,
        source: &'s str,
        reader: R,
    ) -> Result<Node<'s>, DecodeError> {
        self.load_from(source, &mut StreamReader::new(reader))
    }
}

/// Loads a tree from an in-memory stream with default options.
pub fn load<'s>(source: &'s str, bytes: &[u8]) -> Result<Node<'s>, DecodeError> {
    Loader::new().load(source, bytes)
}

/// Loads a tree from an [`io::Read`](std::io::Read) stream with default options.
pub fn load_from_reader<'s, R: Read>(source: &'s str, reader: R) -> Result<Node<'s>, DecodeError> {
    Loader::new().load_from_reader(source, reader)
}
