//! Partitioning on a slice of the key.

use std::num::NonZeroU32;

use crate::job::JobConfiguration;

use super::KeySlice;
use super::secondary::{PARTITIONER_LEFT_OFFSET, PARTITIONER_RIGHT_OFFSET};

/// Assigns a map output key to one of the reduce partitions.
///
/// Implementations are called by the framework's shuffle and must be pure:
/// the same key and partition count always yield the same partition.
pub trait Partitioner: Send + Sync {
    /// Returns a partition index in `[0, num_partitions)`.
    fn partition(&self, key: &[u8], num_partitions: NonZeroU32) -> u32;
}

/// Partitions by the CRC32 of a [`KeySlice`] of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryPartitioner {
    slice: KeySlice,
}

impl BinaryPartitioner {
    pub fn new(slice: KeySlice) -> Self {
        Self { slice }
    }

    /// Partition on the first `cutoff` bytes of the key.
    pub fn prefix(cutoff: i64) -> Self {
        Self::new(KeySlice::Prefix(cutoff))
    }

    /// Partition on the last `cutoff` bytes of the key.
    pub fn suffix(cutoff: i64) -> Self {
        Self::new(KeySlice::Suffix(cutoff))
    }

    /// Read the partitioner offsets from a job configuration, defaulting to
    /// the whole key.
    pub fn from_configuration(conf: &JobConfiguration) -> Self {
        Self::new(KeySlice::from_offsets(
            conf.get_i64(PARTITIONER_LEFT_OFFSET, 0),
            conf.get_i64(PARTITIONER_RIGHT_OFFSET, -1),
        ))
    }

    pub fn slice(&self) -> KeySlice {
        self.slice
    }
}

impl Partitioner for BinaryPartitioner {
    fn partition(&self, key: &[u8], num_partitions: NonZeroU32) -> u32 {
        crc32fast::hash(self.slice.apply(key)) % num_partitions.get()
    }
}
