//! Byte-level key slicing for partitioning and grouping.
//!
//! A [`KeySlice`] selects a contiguous byte range of a key. The same slice
//! drives a [`BinaryPartitioner`] (CRC32 of the slice modulo the partition
//! count) and a [`BinaryComparator`] (unsigned lexicographic order of the
//! slices), which together implement secondary sort: records are
//! partitioned and grouped by the slice while the framework still orders
//! them by the full key.
//!
//! All slicing clamps to `[0, key.len()]`; no cutoff or offset can index
//! outside the key.

mod comparator;
mod partitioner;
mod prefix;
mod secondary;

use std::ops::Range;

pub use comparator::{BinaryComparator, RawComparator};
pub use partitioner::{BinaryPartitioner, Partitioner};
pub use prefix::{
    BinaryPrefixComparator, BinaryPrefixPartitioner, DropBinaryPrefixComparator,
    DropBinaryPrefixPartitioner,
};
pub use secondary::{
    SecondarySort, BINARY_COMPARATOR_CLASS, BINARY_PARTITIONER_CLASS, COMPARATOR_LEFT_OFFSET,
    COMPARATOR_RIGHT_OFFSET, GROUPING_COMPARATOR_CLASS_KEY, PARTITIONER_CLASS_KEY,
    PARTITIONER_LEFT_OFFSET, PARTITIONER_RIGHT_OFFSET,
};

/// A byte range of a key, resolved against the key's length at use time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySlice {
    /// The first `cutoff` bytes.
    Prefix(i64),
    /// The last `cutoff` bytes.
    Suffix(i64),
    /// Bytes from `start` through `end`, both inclusive. Negative indexes
    /// count from the end of the key, so `-1` is the last byte.
    Range { start: i64, end: i64 },
}

impl KeySlice {
    /// The whole key: offsets `0` through `-1`.
    pub const WHOLE: KeySlice = KeySlice::Range { start: 0, end: -1 };

    pub fn from_offsets(start: i64, end: i64) -> Self {
        KeySlice::Range { start, end }
    }

    /// Resolve the slice to byte positions within a key of length `len`.
    pub fn range(&self, len: usize) -> Range<usize> {
        let signed_len = i64::try_from(len).unwrap_or(i64::MAX);
        match *self {
            KeySlice::Prefix(cutoff) => 0..clamp(cutoff, len),
            KeySlice::Suffix(cutoff) => clamp(signed_len.saturating_sub(cutoff), len)..len,
            KeySlice::Range { start, end } => {
                let from = clamp(resolve(start, signed_len), len);
                let to = clamp(resolve(end, signed_len).saturating_add(1), len);
                from..to.max(from)
            }
        }
    }

    /// The selected bytes of `key`.
    pub fn apply<'k>(&self, key: &'k [u8]) -> &'k [u8] {
        key.get(self.range(key.len())).unwrap_or_default()
    }
}

impl Default for KeySlice {
    fn default() -> Self {
        KeySlice::WHOLE
    }
}

fn resolve(index: i64, len: i64) -> i64 {
    if index < 0 {
        len.saturating_add(index)
    } else {
        index
    }
}

fn clamp(index: i64, len: usize) -> usize {
    usize::try_from(index.max(0)).map_or(len, |i| i.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(KeySlice::Prefix(3).apply(b"abcdef"), b"abc");
        assert_eq!(KeySlice::Prefix(10).apply(b"abc"), b"abc");
        assert_eq!(KeySlice::Prefix(0).apply(b"abc"), b"");
        assert_eq!(KeySlice::Prefix(-2).apply(b"abc"), b"");
    }

    #[test]
    fn test_suffix() {
        assert_eq!(KeySlice::Suffix(2).apply(b"abcdef"), b"ef");
        assert_eq!(KeySlice::Suffix(6).apply(b"abcdef"), b"abcdef");
        assert_eq!(KeySlice::Suffix(60).apply(b"abcdef"), b"abcdef");
        assert_eq!(KeySlice::Suffix(0).apply(b"abcdef"), b"");
        assert_eq!(KeySlice::Suffix(-1).apply(b"abcdef"), b"");
    }

    #[test]
    fn test_range_with_negative_offsets() {
        let key = b"example.com|0123456789";
        // Everything but the ten-byte visitor id and its separator.
        assert_eq!(KeySlice::from_offsets(0, -12).apply(key), b"example.com");
        assert_eq!(KeySlice::from_offsets(-10, -1).apply(key), b"0123456789");
        assert_eq!(KeySlice::from_offsets(2, 4).apply(b"abcdef"), b"cde");
        assert_eq!(KeySlice::WHOLE.apply(b"abcdef"), b"abcdef");
    }

    #[test]
    fn test_range_clamps() {
        assert_eq!(KeySlice::from_offsets(-100, 2).apply(b"abcdef"), b"abc");
        assert_eq!(KeySlice::from_offsets(3, 100).apply(b"abcdef"), b"def");
        assert_eq!(KeySlice::from_offsets(10, 20).apply(b"abcdef"), b"");
        assert_eq!(KeySlice::from_offsets(4, 1).apply(b"abcdef"), b"");
        assert_eq!(KeySlice::from_offsets(0, -100).apply(b"abcdef"), b"");
    }

    #[test]
    fn test_empty_key() {
        for slice in [
            KeySlice::Prefix(4),
            KeySlice::Suffix(4),
            KeySlice::WHOLE,
            KeySlice::from_offsets(-3, -1),
        ] {
            assert_eq!(slice.range(0), 0..0, "{slice:?}");
            assert_eq!(slice.apply(b""), b"");
        }
    }

    #[test]
    fn test_extreme_offsets_do_not_overflow() {
        assert_eq!(KeySlice::Prefix(i64::MAX).apply(b"ab"), b"ab");
        assert_eq!(KeySlice::Suffix(i64::MIN).apply(b"ab"), b"");
        assert_eq!(KeySlice::Suffix(i64::MAX).apply(b"ab"), b"ab");
        assert_eq!(KeySlice::from_offsets(i64::MIN, i64::MAX).apply(b"ab"), b"ab");
    }
}
