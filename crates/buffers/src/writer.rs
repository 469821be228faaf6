//! Binary buffer writer for little-endian layouts.

/// A growable binary buffer writer.
///
/// # Example
///
/// ```
/// use stjn_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'T');
/// writer.u64_le(3);
/// let data = writer.flush();
/// assert_eq!(data, [b'T', 3, 0, 0, 0, 0, 0, 0, 0]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates a new, empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Returns the written data and leaves the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.uint8.push(val);
    }

    /// Writes an unsigned 32-bit integer (little-endian).
    #[inline]
    pub fn u32_le(&mut self, val: u32) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes an unsigned 64-bit integer (little-endian).
    #[inline]
    pub fn u64_le(&mut self, val: u64) {
        self.uint8.extend_from_slice(&val.to_le_bytes());
    }

    /// Writes raw bytes.
    pub fn buf(&mut self, buf: &[u8]) {
        self.uint8.extend_from_slice(buf);
    }

    /// Writes an ASCII string byte by byte.
    pub fn ascii(&mut self, s: &str) {
        self.uint8.extend(s.bytes());
    }
}
