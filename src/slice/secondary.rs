//! Secondary sort: partition and group on a slice, sort on the whole key.

use crate::job::JobConfiguration;

use super::{BinaryComparator, BinaryPartitioner, KeySlice};

/// Configuration key naming the job's partitioner class.
pub const PARTITIONER_CLASS_KEY: &str = "mapreduce.job.partitioner.class";
/// Configuration key naming the job's grouping comparator class.
pub const GROUPING_COMPARATOR_CLASS_KEY: &str = "mapreduce.job.output.group.comparator.class";

/// The framework's slice-aware partitioner.
pub const BINARY_PARTITIONER_CLASS: &str =
    "org.apache.hadoop.mapreduce.lib.partition.BinaryPartitioner";
/// The grouping comparator shipped in the job jar.
pub const BINARY_COMPARATOR_CLASS: &str = "hadoop_kit.BinaryComparator";

pub const PARTITIONER_LEFT_OFFSET: &str = "mapreduce.partition.binarypartitioner.left.offset";
pub const PARTITIONER_RIGHT_OFFSET: &str = "mapreduce.partition.binarypartitioner.right.offset";
pub const COMPARATOR_LEFT_OFFSET: &str = "hadoop_kit.binarycomparator.left.offset";
pub const COMPARATOR_RIGHT_OFFSET: &str = "hadoop_kit.binarycomparator.right.offset";

/// A partitioner and grouping comparator sharing one key slice.
///
/// Say the map output key is a site name followed by a 20 byte visitor id.
/// `SecondarySort::new(0, -21)` partitions and groups on the site only, so
/// each reduce call sees one site with its visitors in sorted order, and
/// counting distinct visitors is a matter of counting changes in the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondarySort {
    slice: KeySlice,
}

impl SecondarySort {
    /// Slice from `start_index` through `end_index`, both inclusive;
    /// negative indexes count from the end of the key.
    pub fn new(start_index: i64, end_index: i64) -> Self {
        Self {
            slice: KeySlice::from_offsets(start_index, end_index),
        }
    }

    pub fn slice(&self) -> KeySlice {
        self.slice
    }

    pub fn partitioner(&self) -> BinaryPartitioner {
        BinaryPartitioner::new(self.slice)
    }

    pub fn grouping_comparator(&self) -> BinaryComparator {
        BinaryComparator::new(self.slice)
    }

    /// Write the partitioner and grouping comparator settings into `conf`.
    pub fn apply_to(&self, conf: &mut JobConfiguration) {
        let (start, end) = match self.slice {
            KeySlice::Range { start, end } => (start, end),
            KeySlice::Prefix(_) | KeySlice::Suffix(_) => (0, -1),
        };
        conf.set(PARTITIONER_CLASS_KEY, BINARY_PARTITIONER_CLASS);
        conf.set_i64(PARTITIONER_LEFT_OFFSET, start);
        conf.set_i64(PARTITIONER_RIGHT_OFFSET, end);
        conf.set(GROUPING_COMPARATOR_CLASS_KEY, BINARY_COMPARATOR_CLASS);
        conf.set_i64(COMPARATOR_LEFT_OFFSET, start);
        conf.set_i64(COMPARATOR_RIGHT_OFFSET, end);
    }

    /// Read the settings written by [`SecondarySort::apply_to`].
    ///
    /// Returns `None` unless both the partitioner and the grouping
    /// comparator are configured with the same offsets.
    pub fn from_configuration(conf: &JobConfiguration) -> Option<Self> {
        if conf.get(PARTITIONER_CLASS_KEY) != Some(BINARY_PARTITIONER_CLASS)
            || conf.get(GROUPING_COMPARATOR_CLASS_KEY) != Some(BINARY_COMPARATOR_CLASS)
        {
            return None;
        }
        let partitioner = BinaryPartitioner::from_configuration(conf);
        let comparator = BinaryComparator::from_configuration(conf);
        (partitioner.slice() == comparator.slice()).then_some(Self {
            slice: partitioner.slice(),
        })
    }
}
