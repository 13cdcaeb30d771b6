//! Byte-wise comparison on a slice of the key.

use std::cmp::Ordering;

use crate::job::JobConfiguration;

use super::KeySlice;
use super::secondary::{COMPARATOR_LEFT_OFFSET, COMPARATOR_RIGHT_OFFSET};

/// Orders serialized keys without decoding them.
///
/// The framework calls [`RawComparator::compare_raw`] with regions of its
/// own buffers during the sort and grouping phases, and
/// [`RawComparator::compare`] when it already holds two key payloads. Both
/// entry points must agree.
pub trait RawComparator: Send + Sync {
    /// Compare `b1[s1..s1 + l1]` with `b2[s2..s2 + l2]`.
    ///
    /// Regions reaching past the end of their buffer are truncated to it.
    fn compare_raw(&self, b1: &[u8], s1: usize, l1: usize, b2: &[u8], s2: usize, l2: usize)
    -> Ordering;

    fn compare(&self, k1: &[u8], k2: &[u8]) -> Ordering {
        self.compare_raw(k1, 0, k1.len(), k2, 0, k2.len())
    }
}

/// Compares keys by the unsigned lexicographic order of a [`KeySlice`].
///
/// Keys whose slices are identical compare equal even when the full keys
/// differ; that is what lets the framework group records on the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryComparator {
    slice: KeySlice,
}

impl BinaryComparator {
    pub fn new(slice: KeySlice) -> Self {
        Self { slice }
    }

    /// Compare only the first `cutoff` bytes of each key.
    pub fn prefix(cutoff: i64) -> Self {
        Self::new(KeySlice::Prefix(cutoff))
    }

    /// Compare only the last `cutoff` bytes of each key.
    pub fn suffix(cutoff: i64) -> Self {
        Self::new(KeySlice::Suffix(cutoff))
    }

    /// Read the comparator offsets from a job configuration, defaulting to
    /// the whole key.
    pub fn from_configuration(conf: &JobConfiguration) -> Self {
        Self::new(KeySlice::from_offsets(
            conf.get_i64(COMPARATOR_LEFT_OFFSET, 0),
            conf.get_i64(COMPARATOR_RIGHT_OFFSET, -1),
        ))
    }

    pub fn slice(&self) -> KeySlice {
        self.slice
    }
}

impl RawComparator for BinaryComparator {
    fn compare_raw(
        &self,
        b1: &[u8],
        s1: usize,
        l1: usize,
        b2: &[u8],
        s2: usize,
        l2: usize,
    ) -> Ordering {
        let left = self.slice.apply(region(b1, s1, l1));
        let right = self.slice.apply(region(b2, s2, l2));
        left.cmp(right)
    }
}

fn region(buf: &[u8], start: usize, len: usize) -> &[u8] {
    let end = start.saturating_add(len).min(buf.len());
    buf.get(start..end).unwrap_or_default()
}
