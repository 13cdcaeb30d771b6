//! Job counters as reported at the end of a run.

use std::fmt;

/// One row of the flattened counter table.
///
/// A separator row between groups has empty names and no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRow {
    pub group: String,
    pub name: String,
    pub value: Option<i64>,
}

impl CounterRow {
    pub fn new(group: impl Into<String>, name: impl Into<String>, value: i64) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            value: Some(value),
        }
    }

    pub fn separator() -> Self {
        Self {
            group: String::new(),
            name: String::new(),
            value: None,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.value.is_none()
    }

    /// The three display columns.
    pub fn columns(&self) -> [String; 3] {
        [
            self.group.clone(),
            self.name.clone(),
            self.value.map(|v| v.to_string()).unwrap_or_default(),
        ]
    }
}

impl fmt::Display for CounterRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [group, name, value] = self.columns();
        write!(f, "{}\t{}\t{}", group, name, value)
    }
}

/// Counters keyed by group then name, in first-seen order.
///
/// Recording an existing counter replaces its value but keeps its
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterTable {
    groups: Vec<(String, Vec<(String, i64)>)>,
}

impl CounterTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, group: &str, name: &str, value: i64) {
        if let Some(slot) = self.slot(group, name) {
            *slot = value;
        }
    }

    /// Add `amount` to a counter, starting from zero.
    pub fn increment(&mut self, group: &str, name: &str, amount: i64) {
        if let Some(slot) = self.slot(group, name) {
            *slot = slot.saturating_add(amount);
        }
    }

    pub fn get(&self, group: &str, name: &str) -> Option<i64> {
        self.groups
            .iter()
            .find(|(g, _)| g == group)
            .and_then(|(_, counters)| counters.iter().find(|(n, _)| n == name))
            .map(|(_, v)| *v)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(g, _)| g.as_str())
    }

    /// Total number of counters across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, c)| c.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Flatten into display rows: each group's name on its first row only,
    /// a separator row between groups.
    pub fn to_rows(&self) -> Vec<CounterRow> {
        let mut rows = Vec::with_capacity(self.len() + self.groups.len());
        for (group, counters) in &self.groups {
            if !rows.is_empty() {
                rows.push(CounterRow::separator());
            }
            for (index, (name, value)) in counters.iter().enumerate() {
                let shown = if index == 0 { group.as_str() } else { "" };
                rows.push(CounterRow::new(shown, name.as_str(), *value));
            }
        }
        rows
    }

    fn slot(&mut self, group: &str, name: &str) -> Option<&mut i64> {
        let counters = match self.groups.iter().position(|(g, _)| g == group) {
            Some(index) => &mut self.groups.get_mut(index)?.1,
            None => {
                self.groups.push((group.to_string(), Vec::new()));
                &mut self.groups.last_mut()?.1
            }
        };
        match counters.iter().position(|(n, _)| n == name) {
            Some(index) => counters.get_mut(index).map(|(_, value)| value),
            None => {
                counters.push((name.to_string(), 0));
                counters.last_mut().map(|(_, value)| value)
            }
        }
    }
}
