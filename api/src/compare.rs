//! The transient side-by-side comparison set.

use crate::coin_record::CoinRecord;
use crate::error::CompareError;

/// Up to [`CompareSet::CAPACITY`] coin snapshots, in the order they were added.
///
/// Uniqueness and removal use the exact `name`, unlike the watch-list which
/// ignores case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareSet(Vec<CoinRecord>);

impl CompareSet {
    pub const CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds `record` to the comparison.
    ///
    /// A record whose name is already present is silently ignored. A full set
    /// refuses the record and stays unchanged.
    pub fn add(&mut self, record: CoinRecord) -> Result<(), CompareError> {
        if self.contains(&record.name) {
            return Ok(());
        }
        if self.is_full() {
            return Err(CompareError::CompareFull(Self::CAPACITY));
        }
        self.0.push(record);
        Ok(())
    }

    /// Whether adding `record` would change the set.
    ///
    /// The add-to-compare control is only offered when this holds.
    pub fn accepts(&self, record: &CoinRecord) -> bool {
        !self.is_full() && !self.contains(&record.name)
    }

    pub fn remove(&mut self, name: &str) {
        self.0.retain(|record| record.name != name);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|record| record.name == name)
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::CAPACITY
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

impl<'a> IntoIterator for &'a CompareSet {
    type Item = &'a CoinRecord;
    type IntoIter = std::slice::Iter<'a, CoinRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
