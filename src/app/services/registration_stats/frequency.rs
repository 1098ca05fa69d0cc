//! Insertion-ordered frequency table

use super::top_n::TopN;
use std::collections::HashMap;

/// Mapping from a discrete key to a non-negative count
///
/// Keys keep the order in which they were first seen; that order is the
/// tie-break used by [`FrequencyTable::top_n`]. Counts only ever grow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    /// (key, count) in first-seen order
    entries: Vec<(String, usize)>,
    /// Position of each key in `entries`
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to `key`, creating it with a count of 1 when absent
    pub fn increment(&mut self, key: impl Into<String>) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`, zero when it was never seen
    pub fn get(&self, key: &str) -> usize {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// The `n` highest-count entries, see [`TopN::select`]
    pub fn top_n(&self, n: usize) -> TopN {
        TopN::select(self, n)
    }
}
