//! Decoding error types.

use std::fmt;

use stjn_buffers::BufferError;
use thiserror::Error;

use crate::directive::Directive;
use crate::header::Version;

/// The part of the stream a failing read was after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Magic,
    Version,
    Directive,
    Location,
    Length,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Magic => "magic",
            Field::Version => "version",
            Field::Directive => "directive",
            Field::Location => "location",
            Field::Length => "length",
        })
    }
}

/// Error type for header validation and node decoding.
///
/// Offsets are stream positions: the number of bytes consumed from the
/// cursor when the failing read started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown directive 0x{byte:02x} at byte {offset}")]
    UnknownDirective { byte: u8, offset: u64 },
    #[error("truncated stream at byte {offset}: {field} needs {needed} byte(s)")]
    TruncatedStream {
        field: Field,
        offset: u64,
        needed: usize,
    },
    #[error("invalid offsets {start}..{end} for {directive} node: source is {source_len} byte(s)")]
    InvalidOffsets {
        directive: Directive,
        start: u64,
        end: u64,
        source_len: usize,
    },
    #[error("nesting deeper than {limit} level(s) at byte {offset}")]
    RecursionLimitExceeded { limit: usize, offset: u64 },
    #[error("length {length} at byte {offset} does not fit in memory")]
    LengthOverflow { length: u64, offset: u64 },
    #[error("reading {field} failed at byte {offset}: {message}")]
    Io {
        field: Field,
        offset: u64,
        kind: std::io::ErrorKind,
        message: String,
    },
    #[error("bad magic {found:?}, expected \"STJN\"")]
    BadMagic { found: [u8; 4] },
    #[error("unsupported format version {found}, expected {expected}")]
    UnsupportedVersion { found: Version, expected: Version },
    #[error("expected a root node, found {found}")]
    ExpectedRoot { found: Directive },
}

impl DecodeError {
    /// Attaches field context to a cursor failure.
    pub fn from_buffer(err: BufferError, field: Field) -> Self {
        match err {
            BufferError::EndOfBuffer { position, needed } => DecodeError::TruncatedStream {
                field,
                offset: position,
                needed,
            },
            BufferError::Io {
                position,
                kind,
                message,
            } => DecodeError::Io {
                field,
                offset: position,
                kind,
                message,
            },
        }
    }

    /// Stream position of the failure, when the error is tied to one.
    pub fn offset(&self) -> Option<u64> {
        match self {
            DecodeError::UnknownDirective { offset, .. }
            | DecodeError::TruncatedStream { offset, .. }
            | DecodeError::RecursionLimitExceeded { offset, .. }
            | DecodeError::LengthOverflow { offset, .. }
            | DecodeError::Io { offset, .. } => Some(*offset),
            DecodeError::InvalidOffsets { .. }
            | DecodeError::BadMagic { .. }
            | DecodeError::UnsupportedVersion { .. }
            | DecodeError::ExpectedRoot { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_buffer_becomes_truncation() {
        let err = DecodeError::from_buffer(
            BufferError::EndOfBuffer {
                position: 1,
                needed: 8,
            },
            Field::Location,
        );
        assert_eq!(
            err,
            DecodeError::TruncatedStream {
                field: Field::Location,
                offset: 1,
                needed: 8
            }
        );
        assert_eq!(
            err.to_string(),
            "truncated stream at byte 1: location needs 8 byte(s)"
        );
        assert_eq!(err.offset(), Some(1));
    }

    #[test]
    fn messages_name_directive_and_offset() {
        let err = DecodeError::UnknownDirective {
            byte: b'x',
            offset: 17,
        };
        assert_eq!(err.to_string(), "unknown directive 0x78 at byte 17");

        let err = DecodeError::InvalidOffsets {
            directive: Directive::String,
            start: 4,
            end: 2,
            source_len: 10,
        };
        assert_eq!(
            err.to_string(),
            "invalid offsets 4..2 for string ('S') node: source is 10 byte(s)"
        );
        assert_eq!(err.offset(), None);
    }
}
