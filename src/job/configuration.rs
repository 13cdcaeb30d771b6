//! String property map standing in for the framework's job configuration.

/// Ordered job properties.
///
/// Setting an existing key replaces its value in place, so iteration order
/// is first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobConfiguration {
    entries: Vec<(String, String)>,
}

impl JobConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn set_i64(&mut self, key: impl Into<String>, value: i64) {
        self.set(key, value.to_string());
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, value.to_string());
    }

    /// Append `value` to a comma-separated list property.
    pub fn append(&mut self, key: impl Into<String>, value: &str) {
        let key = key.into();
        let joined = match self.get(&key) {
            Some(existing) if !existing.is_empty() => format!("{},{}", existing, value),
            _ => value.to_string(),
        };
        self.set(key, joined);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Integer property, or `default` when missing or unparsable.
    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Boolean property, or `default` when missing or unparsable.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key).map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("true") => true,
            Some(v) if v.eq_ignore_ascii_case("false") => false,
            _ => default,
        }
    }

    /// Values of a comma-separated list property.
    pub fn get_list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .map(|v| v.split(',').filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut conf = JobConfiguration::new();
        conf.set("a", "1");
        conf.set("b", "2");
        conf.set("a", "3");
        let entries: Vec<_> = conf.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_typed_getters() {
        let mut conf = JobConfiguration::new();
        conf.set_i64("offset", -21);
        conf.set("broken", "x1");
        conf.set_bool("flag", true);
        assert_eq!(conf.get_i64("offset", 0), -21);
        assert_eq!(conf.get_i64("broken", 7), 7);
        assert_eq!(conf.get_i64("missing", -1), -1);
        assert!(conf.get_bool("flag", false));
        assert!(!conf.get_bool("missing", false));
    }

    #[test]
    fn test_list_properties() {
        let mut conf = JobConfiguration::new();
        conf.append("files", "a#x");
        conf.append("files", "b#y");
        assert_eq!(conf.get("files"), Some("a#x,b#y"));
        assert_eq!(conf.get_list("files"), vec!["a#x", "b#y"]);
        assert!(conf.get_list("missing").is_empty());
    }

    #[test]
    fn test_remove() {
        let mut conf = JobConfiguration::new();
        conf.set("k", "v");
        assert_eq!(conf.remove("k"), Some("v".to_string()));
        assert!(conf.is_empty());
        assert_eq!(conf.remove("k"), None);
    }
}
