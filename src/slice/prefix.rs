//! Fixed-cutoff partitioners and comparators.
//!
//! These predate [`SecondarySort`](super::SecondarySort) and only cover the
//! pure prefix and pure suffix cases. New jobs should configure a secondary
//! sort instead.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use super::{BinaryComparator, BinaryPartitioner, KeySlice, Partitioner, RawComparator};

/// Partitions on the first `cutoff` bytes of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPrefixPartitioner(BinaryPartitioner);

impl BinaryPrefixPartitioner {
    pub fn new(cutoff: i64) -> Self {
        Self(BinaryPartitioner::prefix(cutoff))
    }
}

impl Partitioner for BinaryPrefixPartitioner {
    fn partition(&self, key: &[u8], num_partitions: NonZeroU32) -> u32 {
        self.0.partition(key, num_partitions)
    }
}

/// Partitions on the last `cutoff` bytes of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropBinaryPrefixPartitioner(BinaryPartitioner);

impl DropBinaryPrefixPartitioner {
    pub fn new(cutoff: i64) -> Self {
        Self(BinaryPartitioner::suffix(cutoff))
    }
}

impl Partitioner for DropBinaryPrefixPartitioner {
    fn partition(&self, key: &[u8], num_partitions: NonZeroU32) -> u32 {
        self.0.partition(key, num_partitions)
    }
}

/// Orders keys by their first `cutoff` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPrefixComparator(BinaryComparator);

impl BinaryPrefixComparator {
    pub fn new(cutoff: i64) -> Self {
        Self(BinaryComparator::prefix(cutoff))
    }
}

impl RawComparator for BinaryPrefixComparator {
    fn compare_raw(
        &self,
        b1: &[u8],
        s1: usize,
        l1: usize,
        b2: &[u8],
        s2: usize,
        l2: usize,
    ) -> Ordering {
        self.0.compare_raw(b1, s1, l1, b2, s2, l2)
    }
}

/// Orders keys by their last `cutoff` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropBinaryPrefixComparator(BinaryComparator);

impl DropBinaryPrefixComparator {
    pub fn new(cutoff: i64) -> Self {
        Self(BinaryComparator::new(KeySlice::Suffix(cutoff)))
    }
}

impl RawComparator for DropBinaryPrefixComparator {
    fn compare_raw(
        &self,
        b1: &[u8],
        s1: usize,
        l1: usize,
        b2: &[u8],
        s2: usize,
        l2: usize,
    ) -> Ordering {
        self.0.compare_raw(b1, s1, l1, b2, s2, l2)
    }
}
