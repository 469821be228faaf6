//! Byte spans into the source text.

use std::ops::Range;

use serde::Serialize;

/// Half-open byte span `[start_offset, end_offset)` into the source text.
///
/// The span is not checked against any source at construction; use
/// [`Location::slice`] to take it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Location {
    pub start_offset: u64,
    pub end_offset: u64,
}

impl Location {
    pub const fn new(start_offset: u64, end_offset: u64) -> Self {
        Self {
            start_offset,
            end_offset,
        }
    }

    /// Span from the start of `self` to the end of `other`.
    pub const fn to(self, other: Location) -> Location {
        Location::new(self.start_offset, other.end_offset)
    }

    pub const fn to_range(self) -> Range<u64> {
        self.start_offset..self.end_offset
    }

    /// Length in bytes; zero for an inverted span.
    pub const fn len(self) -> u64 {
        self.end_offset.saturating_sub(self.start_offset)
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Takes this span out of `source`.
    ///
    /// Returns `None` when the span is inverted, runs past the end of the
    /// source, or splits a UTF-8 character.
    pub fn slice(self, source: &str) -> Option<&str> {
        let start = usize::try_from(self.start_offset).ok()?;
        let end = usize::try_from(self.end_offset).ok()?;
        source.get(start..end)
    }
}

impl From<Range<u64>> for Location {
    fn from(range: Range<u64>) -> Self {
        Location::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_takes_exact_bytes() {
        let source = r#"{"a": 1}"#;
        assert_eq!(Location::new(1, 4).slice(source), Some(r#""a""#));
        assert_eq!(Location::new(6, 7).slice(source), Some("1"));
        assert_eq!(Location::new(8, 8).slice(source), Some(""));
    }

    #[test]
    fn slice_rejects_out_of_range_spans() {
        let source = "[true]";
        assert_eq!(Location::new(4, 2).slice(source), None);
        assert_eq!(Location::new(0, 7).slice(source), None);
        assert_eq!(Location::new(u64::MAX, u64::MAX).slice(source), None);
    }

    #[test]
    fn slice_rejects_split_characters() {
        let source = "\"é\"";
        assert_eq!(Location::new(0, 4).slice(source), Some("\"é\""));
        assert_eq!(Location::new(0, 2).slice(source), None);
    }

    #[test]
    fn to_joins_spans() {
        let open = Location::new(0, 1);
        let close = Location::new(9, 10);
        assert_eq!(open.to(close), Location::new(0, 10));
        assert_eq!(open.to(close).to_range(), 0..10);
    }

    #[test]
    fn len_saturates_for_inverted_spans() {
        assert_eq!(Location::new(2, 5).len(), 3);
        assert_eq!(Location::new(5, 2).len(), 0);
        assert!(Location::new(5, 2).is_empty());
        assert_eq!(Location::from(3..4), Location::new(3, 4));
    }
}
