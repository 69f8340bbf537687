//! The user's persisted watch-list of coin snapshots.

use serde::Deserialize;
use serde::Serialize;

use crate::coin_record::CoinRecord;

/// Insertion-ordered set of coin snapshots, unique by case-insensitive name.
///
/// Entries are snapshots: adding a coin that is already present does not
/// replace the stored record, so its prices stay as they were when first
/// added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist(Vec<CoinRecord>);

impl Watchlist {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builds a watch-list from stored records, dropping later duplicates.
    pub fn from_records(records: Vec<CoinRecord>) -> Self {
        let mut watchlist = Self::new();
        for record in records {
            watchlist.add(record);
        }
        watchlist
    }

    /// Appends `record` unless a coin with the same name is already listed.
    ///
    /// Returns `true` when the list changed.
    pub fn add(&mut self, record: CoinRecord) -> bool {
        if self.contains(&record.name) {
            return false;
        }
        self.0.push(record);
        true
    }

    /// Removes every entry whose name matches `name` ignoring case.
    ///
    /// Returns `true` when the list changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|record| !record.same_name_ignoring_case(name));
        self.0.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|record| record.same_name_ignoring_case(name))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CoinRecord> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a CoinRecord;
    type IntoIter = std::slice::Iter<'a, CoinRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
