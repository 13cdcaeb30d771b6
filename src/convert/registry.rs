//! Name-keyed lookup of converter kinds.

use std::collections::HashMap;

use super::converter::{ConverterKind, TypeConverter};
use super::error::ConvertError;
use super::wire::WireType;

/// Resolves converters by symbolic name or by framework class.
///
/// The default registry knows the six built-in names. Additional names can
/// be registered as aliases of an existing kind.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    by_name: HashMap<String, ConverterKind>,
}

impl ConverterRegistry {
    /// Create a registry with the built-in converter names.
    pub fn new() -> Self {
        let by_name = ConverterKind::ALL
            .into_iter()
            .map(|kind| (kind.name().to_string(), kind))
            .collect();
        Self { by_name }
    }

    /// Register `name` as an alias for `kind`, returning the kind it replaced.
    pub fn register(&mut self, name: impl Into<String>, kind: ConverterKind) -> Option<ConverterKind> {
        self.by_name.insert(name.into(), kind)
    }

    pub fn resolve(&self, name: &str) -> Result<ConverterKind, ConvertError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ConvertError::UnsupportedType(name.to_string()))
    }

    /// Create a fresh converter for `name`.
    pub fn converter(&self, name: &str) -> Result<TypeConverter, ConvertError> {
        self.resolve(name).map(TypeConverter::new)
    }

    /// Resolve the base converter for a framework class name.
    pub fn resolve_wire_class(&self, class_name: &str) -> Result<ConverterKind, ConvertError> {
        WireType::from_class_name(class_name).map(ConverterKind::from_wire_type)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let registry = ConverterRegistry::new();
        assert_eq!(
            registry.names(),
            vec!["binary", "encoded", "json", "long", "none", "text"]
        );
        assert_eq!(registry.resolve("long").unwrap(), ConverterKind::Long);
    }

    #[test]
    fn test_unknown_name() {
        let registry = ConverterRegistry::new();
        let err = registry.resolve("avro").unwrap_err();
        assert_eq!(err, ConvertError::UnsupportedType("avro".to_string()));
    }

    #[test]
    fn test_alias() {
        let mut registry = ConverterRegistry::new();
        assert_eq!(registry.register("msgpack", ConverterKind::Encoded), None);
        let conv = registry.converter("msgpack").unwrap();
        assert_eq!(conv.kind(), ConverterKind::Encoded);
    }

    #[test]
    fn test_wire_class_lookup() {
        let registry = ConverterRegistry::new();
        assert_eq!(
            registry
                .resolve_wire_class("org.apache.hadoop.io.NullWritable")
                .unwrap(),
            ConverterKind::None
        );
        assert!(
            registry
                .resolve_wire_class("org.apache.hadoop.io.VIntWritable")
                .unwrap_err()
                .is_unsupported()
        );
    }
}
