//! Submissions: the unit of dispatch.

use std::fmt;

/// One log event: a key paired with a value.
///
/// A submission normally carries a single entry. It may carry several, in
/// which case every entry is offered to every module and the fallback sink
/// receives the whole submission at most once. Entry order is kept.
///
/// `Debug` renders the entries as a map, e.g. `{"x": 42}`.
#[derive(Clone, PartialEq)]
pub struct Submission<V> {
    entries: Vec<(String, V)>,
}

impl<V> Submission<V> {
    /// A single-entry submission.
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            entries: vec![(key.into(), value)],
        }
    }

    /// Add another entry, builder style.
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.push(key, value);
        self
    }

    /// Add another entry.
    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.entries.push((key.into(), value));
    }

    /// Iterate over `(key, value)` pairs in submission order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The value of the first entry with `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the submission, returning its entries.
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V> Default for Submission<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Submission<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Submission<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<V: fmt::Debug> fmt::Debug for Submission<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_single_entry_debug() {
        let submission = Submission::new("x", Value::from(42));
        assert_eq!(format!("{submission:?}"), "{\"x\": 42}");
        assert_eq!(submission.len(), 1);
    }

    #[test]
    fn test_entries_keep_order() {
        let submission = Submission::new("b", 2).with("a", 1).with("b", 3);
        let keys: Vec<&str> = submission.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "b"]);
        assert_eq!(submission.get("b"), Some(&2));
        assert_eq!(submission.get("c"), None);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut submission: Submission<i32> = [("one", 1)].into_iter().collect();
        submission.extend([("two", 2)]);
        assert_eq!(
            submission.into_entries(),
            vec![("one".to_string(), 1), ("two".to_string(), 2)]
        );
        assert!(Submission::<i32>::default().is_empty());
    }
}
