//! Streaming reader over any `std::io::Read`.

use std::io::{self, Read};

use crate::{BufferError, ReadExact};

/// A [`ReadExact`] adapter over an [`io::Read`] that tracks how many bytes
/// have been consumed.
///
/// It performs no buffering of its own; wrap unbuffered sources (files,
/// sockets) in [`io::BufReader`] first. After a failed read the contents of
/// the destination buffer and the inner reader's position are unspecified,
/// so the stream should be abandoned.
pub struct StreamReader<R> {
    inner: R,
    /// Total bytes consumed by successful reads.
    x: u64,
}

impl<R: Read> StreamReader<R> {
    /// Creates a new streaming reader.
    pub fn new(inner: R) -> Self {
        Self { inner, x: 0 }
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwraps this reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ReadExact for StreamReader<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.x += buf.len() as u64;
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Err(BufferError::EndOfBuffer {
                    position: self.x,
                    needed: buf.len(),
                })
            }
            Err(err) => Err(BufferError::Io {
                position: self.x,
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }

    #[inline]
    fn position(&self) -> u64 {
        self.x
    }
}
