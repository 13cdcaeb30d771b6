//! Grouped reduce values.

use crate::convert::{ConvertError, NativeValue, TypeConverter, WireValue};

/// The values of one reduce group, decoded lazily.
///
/// This is a single-pass, forward-only cursor over the framework's value
/// iterator. It cannot be cloned or rewound: once a value has been pulled
/// it is gone, and a consumed group stays empty. Use it as an ordinary
/// [`Iterator`] or pull with [`GroupedValues::next_value`].
///
/// Each value is decoded through the reducer's input value converter, so a
/// wire value of the wrong class yields a type mismatch for that item.
pub struct GroupedValues<'a> {
    source: &'a mut dyn Iterator<Item = WireValue>,
    converter: &'a mut TypeConverter,
    exhausted: bool,
}

impl<'a> GroupedValues<'a> {
    pub(crate) fn new(
        source: &'a mut dyn Iterator<Item = WireValue>,
        converter: &'a mut TypeConverter,
    ) -> Self {
        Self {
            source,
            converter,
            exhausted: false,
        }
    }

    /// Pull the next value; `Ok(None)` once the group is exhausted.
    pub fn next_value(&mut self) -> Result<Option<NativeValue>, ConvertError> {
        self.next().transpose()
    }

    /// Drain the remaining values into a vector.
    pub fn collect_values(&mut self) -> Result<Vec<NativeValue>, ConvertError> {
        self.by_ref().collect()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Iterator for GroupedValues<'_> {
    type Item = Result<NativeValue, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.source.next() {
            Some(wire) => Some(self.converter.convert_to_native(wire)),
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
