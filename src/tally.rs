//! Page size tallies and merging

use std::collections::BTreeMap;

/// Page counts keyed by formatted page size
///
/// Keys iterate in lexicographic order so reports are stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeTally {
    counts: BTreeMap<String, usize>,
}

impl SizeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more page with the given size key
    pub fn record(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Add every count from `other` into this tally
    pub fn merge(&mut self, other: &SizeTally) {
        for (key, count) in &other.counts {
            *self.counts.entry(key.clone()).or_insert(0) += count;
        }
    }

    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct sizes
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all page counts
    pub fn total_pages(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<S> for SizeTally {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tally = SizeTally::new();
        for key in iter {
            tally.record(key);
        }
        tally
    }
}
