//! User-defined records that travel through the structured codecs.

use super::error::ConvertError;
use super::native::NativeValue;

/// A composite record that can be flattened into an ordered field list.
///
/// Records implementing this trait can be written through the `encoded`
/// and `json` converters with [`TypeConverter::set_record`] and read back
/// with [`TypeConverter::record`].
///
/// [`TypeConverter::set_record`]: super::TypeConverter::set_record
/// [`TypeConverter::record`]: super::TypeConverter::record
pub trait Packable: Sized {
    /// The record's fields, in declaration order.
    fn to_packable(&self) -> Vec<NativeValue>;

    /// Rebuild the record from the fields produced by [`Packable::to_packable`].
    fn from_packable(fields: Vec<NativeValue>) -> Result<Self, ConvertError>;
}

/// Declare a struct whose named fields pack positionally.
///
/// Every field type must convert into a [`NativeValue`] and back with
/// `TryFrom<NativeValue, Error = ConvertError>`.
///
/// ```
/// use hadoop_kit::packable_record;
/// use hadoop_kit::convert::{ConverterKind, TypeConverter};
///
/// packable_record! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Visit {
///         pub site: String,
///         pub visitor: String,
///         pub hits: i64,
///     }
/// }
///
/// let visit = Visit { site: "a.com".into(), visitor: "v1".into(), hits: 3 };
/// let mut conv = TypeConverter::new(ConverterKind::Encoded);
/// conv.set_record(&visit).unwrap();
/// assert_eq!(conv.record::<Visit>().unwrap(), visit);
/// ```
#[macro_export]
macro_rules! packable_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($fvis:vis $field:ident : $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $($fvis $field: $ty),*
        }

        impl $crate::convert::Packable for $name {
            fn to_packable(&self) -> ::std::vec::Vec<$crate::convert::NativeValue> {
                ::std::vec![$($crate::convert::NativeValue::from(self.$field.clone())),*]
            }

            fn from_packable(
                fields: ::std::vec::Vec<$crate::convert::NativeValue>,
            ) -> ::std::result::Result<Self, $crate::convert::ConvertError> {
                let expected = [$(stringify!($field)),*].len();
                if fields.len() != expected {
                    return Err($crate::convert::ConvertError::Arity {
                        expected,
                        actual: fields.len(),
                    });
                }
                let mut fields = fields.into_iter();
                Ok(Self {
                    $($field: <$ty as ::std::convert::TryFrom<$crate::convert::NativeValue>>::try_from(
                        fields.next().unwrap_or($crate::convert::NativeValue::Nil),
                    )?),*
                })
            }
        }
    };
}
