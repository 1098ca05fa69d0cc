//! Top-N selection over a frequency table

use super::frequency::FrequencyTable;
use std::fmt;

/// The highest-count entries of a table, ordered by descending count
///
/// Equal counts keep the table's first-seen order. Holds at most `n`
/// entries; a table with fewer keys yields all of them, without padding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopN {
    entries: Vec<(String, usize)>,
}

impl TopN {
    /// Select the `n` highest-count entries of `table`
    pub fn select(table: &FrequencyTable, n: usize) -> Self {
        let mut entries: Vec<(String, usize)> = table
            .iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect();

        // Stable sort: ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);

        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Selected keys in rank order
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TopN {
    /// One `key: count` line per entry
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, count) in &self.entries {
            writeln!(f, "{}: {}", key, count)?;
        }
        Ok(())
    }
}
