//! Stream header: magic tag plus format version.
//!
//! The header is validated here, before the decoder runs; the decoder itself
//! expects a cursor positioned just past it.

use std::fmt;

use stjn_buffers::ReadExact;

use crate::directive::MAGIC;
use crate::error::{DecodeError, Field};

/// Header size in bytes: magic plus three `u32` version fields.
pub const HEADER_LEN: usize = 16;

/// Format version this crate decodes.
pub const FORMAT_VERSION: Version = Version::new(0, 3, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Version,
}

impl Header {
    /// Reads the magic tag and version fields.
    ///
    /// Fails with `BadMagic` when the first four bytes are not `STJN`; the
    /// version is returned as found.
    pub fn read<C: ReadExact>(cursor: &mut C) -> Result<Self, DecodeError> {
        let magic = cursor
            .read_array::<4>()
            .map_err(|err| DecodeError::from_buffer(err, Field::Magic))?;
        if magic != MAGIC {
            return Err(DecodeError::BadMagic { found: magic });
        }
        let mut fields = [0u32; 3];
        for field in &mut fields {
            *field = cursor
                .read_u32_le()
                .map_err(|err| DecodeError::from_buffer(err, Field::Version))?;
        }
        let [major, minor, patch] = fields;
        Ok(Self {
            version: Version::new(major, minor, patch),
        })
    }

    /// Requires the header version to equal `expected`.
    pub fn validate(&self, expected: Version) -> Result<(), DecodeError> {
        if self.version != expected {
            return Err(DecodeError::UnsupportedVersion {
                found: self.version,
                expected,
            });
        }
        Ok(())
    }

    /// Reads the header and checks it against [`FORMAT_VERSION`].
    pub fn read_and_validate<C: ReadExact>(cursor: &mut C) -> Result<Self, DecodeError> {
        let header = Self::read(cursor)?;
        header.validate(FORMAT_VERSION)?;
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stjn_buffers::{Reader, Writer};

    fn header_bytes(magic: &[u8], version: [u32; 3]) -> Vec<u8> {
        let mut writer = Writer::new();
        writer.buf(magic);
        for field in version {
            writer.u32_le(field);
        }
        writer.flush()
    }

    #[test]
    fn reads_supported_header() {
        let bytes = header_bytes(b"STJN", [0, 3, 0]);
        assert_eq!(bytes.len(), HEADER_LEN);
        let mut reader = Reader::new(&bytes);
        let header = Header::read_and_validate(&mut reader).unwrap();
        assert_eq!(header.version, FORMAT_VERSION);
        assert_eq!(reader.size(), 0);
    }

    #[test]
    fn rejects_bad_magic() {
        let bytes = header_bytes(b"STJX", [0, 3, 0]);
        let err = Header::read(&mut Reader::new(&bytes)).unwrap_err();
        assert_eq!(err, DecodeError::BadMagic { found: *b"STJX" });
    }

    #[test]
    fn rejects_other_versions() {
        let bytes = header_bytes(b"STJN", [1, 0, 2]);
        let err = Header::read_and_validate(&mut Reader::new(&bytes)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedVersion {
                found: Version::new(1, 0, 2),
                expected: FORMAT_VERSION
            }
        );
        assert_eq!(
            err.to_string(),
            "unsupported format version 1.0.2, expected 0.3.0"
        );
    }

    #[test]
    fn truncated_version_is_reported() {
        let bytes = header_bytes(b"STJN", [0, 3, 0]);
        let err = Header::read(&mut Reader::new(&bytes[..10])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedStream {
                field: Field::Version,
                offset: 8,
                needed: 4
            }
        );
    }

    #[test]
    fn truncated_magic_is_reported() {
        let err = Header::read(&mut Reader::new(b"ST")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TruncatedStream {
                field: Field::Magic,
                offset: 0,
                needed: 4
            }
        );
    }
}
