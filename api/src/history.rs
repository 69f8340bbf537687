//! Bounded, most-recent-first list of searched coin identifiers.

use serde::Deserialize;
use serde::Serialize;

/// Recently searched identifiers, newest first.
///
/// Holds at most [`SearchHistory::CAPACITY`] entries and never the same
/// identifier twice. Identifiers are already lower-cased by the time they get
/// here, so comparison is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    pub const CAPACITY: usize = 6;

    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a history from a stored list, restoring the invariants in case
    /// the stored value was edited or written by an older build.
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut history = Self::new();
        for id in entries.into_iter().rev() {
            history.record(id);
        }
        history
    }

    /// Moves `id` to the front, dropping the oldest entry past capacity.
    pub fn record(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.0.retain(|existing| *existing != id);
        self.0.insert(0, id);
        self.0.truncate(Self::CAPACITY);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a SearchHistory {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
