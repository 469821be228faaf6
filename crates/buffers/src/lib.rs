//! Byte cursors for binary decoders.
//!
//! Every read either fills the requested bytes completely or fails with a
//! [`BufferError`]; nothing is consumed on failure for in-memory readers.
//!
//! - [`Reader`] reads from a borrowed byte slice.
//! - [`StreamReader`] reads from any [`std::io::Read`].
//! - [`Writer`] assembles little-endian byte sequences.

mod reader;
mod stream_reader;
mod writer;

pub use reader::Reader;
pub use stream_reader::StreamReader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for cursor reads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("unexpected end of input at byte {position}: {needed} byte(s) needed")]
    EndOfBuffer { position: u64, needed: usize },
    #[error("read failed at byte {position}: {message}")]
    Io {
        position: u64,
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl BufferError {
    /// Stream position at which the failing read started.
    pub fn position(&self) -> u64 {
        match self {
            BufferError::EndOfBuffer { position, .. } | BufferError::Io { position, .. } => {
                *position
            }
        }
    }
}

/// A source of bytes that can be consumed in exact-size pieces.
///
/// Decoders are written against this trait so the same grammar can run over
/// a slice or a stream.
pub trait ReadExact {
    /// Fills `buf` completely or fails.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError>;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;

    /// Reads exactly `N` bytes into an array.
    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0u8; N];
        self.read_exact(&mut out)?;
        Ok(out)
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    fn read_u8(&mut self) -> Result<u8, BufferError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Reads an unsigned 32-bit integer (little-endian).
    #[inline]
    fn read_u32_le(&mut self) -> Result<u32, BufferError> {
        self.read_array::<4>().map(u32::from_le_bytes)
    }

    /// Reads an unsigned 64-bit integer (little-endian).
    #[inline]
    fn read_u64_le(&mut self) -> Result<u64, BufferError> {
        self.read_array::<8>().map(u64::from_le_bytes)
    }
}

impl<T: ReadExact> ReadExact for &mut T {
    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        (**self).read_exact(buf)
    }

    #[inline]
    fn position(&self) -> u64 {
        (**self).position()
    }
}
