//! Binary buffer reader with cursor tracking.

use crate::{BufferError, ReadExact};

/// A binary buffer reader over a borrowed byte slice.
///
/// The reader keeps a cursor position and never advances it on a failed read.
///
/// # Example
///
/// ```
/// use stjn_buffers::{ReadExact, Reader};
///
/// let data = [0x01, 0x02, 0x00, 0x00, 0x00];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.read_u8(), Ok(0x01));
/// assert_eq!(reader.read_u32_le(), Ok(0x02));
/// assert_eq!(reader.size(), 0);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Creates a reader from a slice with custom start and end positions.
    ///
    /// `end` is clamped to the slice length.
    pub fn from_slice(uint8: &'a [u8], x: usize, end: usize) -> Self {
        let end = end.min(uint8.len());
        Self {
            uint8,
            x: x.min(end),
            end,
        }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Peeks at the current byte without advancing the cursor.
    pub fn peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.uint8[self.x])
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.uint8[start..self.x])
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, size: usize) -> Result<(), BufferError> {
        self.check(size)?;
        self.x += size;
        Ok(())
    }

    /// Returns the unread tail without advancing the cursor.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..self.end]
    }

    #[inline]
    fn check(&self, needed: usize) -> Result<(), BufferError> {
        if needed > self.size() {
            Err(BufferError::EndOfBuffer {
                position: self.x as u64,
                needed,
            })
        } else {
            Ok(())
        }
    }
}

impl ReadExact for Reader<'_> {
    #[inline]
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), BufferError> {
        let bytes = self.buf(buf.len())?;
        buf.copy_from_slice(bytes);
        Ok(())
    }

    #[inline]
    fn position(&self) -> u64 {
        self.x as u64
    }
}
