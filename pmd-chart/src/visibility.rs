use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Metric and activity names currently shown on the chart.
///
/// Only the toggle layer mutates it; aggregation and dataset building read it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilitySet(BTreeSet<String>);

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Returns true if the key was not already visible.
    pub fn insert(&mut self, key: &str) -> bool {
        self.0.insert(key.to_string())
    }

    /// Returns true if the key was visible.
    pub fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key)
    }

    /// Flip the key's visibility and return the new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.remove(key) {
            false
        } else {
            self.insert(key)
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for VisibilitySet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut visible: VisibilitySet = ["coding", "sleep_score"].into_iter().collect();
        assert!(!visible.toggle("coding"));
        assert!(!visible.contains("coding"));
        assert!(visible.toggle("coding"));
        assert!(visible.contains("coding"));
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn test_insert_remove_report_change() {
        let mut visible = VisibilitySet::new();
        assert!(visible.is_empty());
        assert!(visible.insert("read"));
        assert!(!visible.insert("read"));
        assert!(visible.remove("read"));
        assert!(!visible.remove("read"));
    }
}
