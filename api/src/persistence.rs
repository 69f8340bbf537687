//! Mirrors the search history and watch-list into a durable key-value store.
//!
//! Loading happens once at startup. Saving is explicit: state operations that
//! change a persisted collection return a [`Dirty`] marker and the caller
//! hands it to [`Persistence::flush`].

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client_state::ClientState;
use crate::coin_record::CoinRecord;
use crate::error::StorageError;
use crate::history::SearchHistory;
use crate::storage::KeyValueStore;
use crate::watchlist::Watchlist;

/// Storage key of the serialized search history.
pub const HISTORY_KEY: &str = "cryptoSearchHistory";

/// Storage key of the serialized watch-list.
pub const WATCHLIST_KEY: &str = "cryptoWatchlist";

/// Names the persisted collection an operation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum Dirty {
    History,
    Watchlist,
}

pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds the startup state from whatever the store holds.
    ///
    /// Missing or unreadable values start out empty; a broken value is logged
    /// and left in place until the next successful write replaces it.
    pub fn load_state(&self) -> ClientState {
        ClientState::new(self.load_history(), self.load_watchlist())
    }

    pub fn load_history(&self) -> SearchHistory {
        match self.load::<Vec<String>>(HISTORY_KEY) {
            Ok(Some(entries)) => SearchHistory::from_entries(entries),
            Ok(None) => SearchHistory::new(),
            Err(e) => {
                warn!("could not load search history: {}", e);
                SearchHistory::new()
            }
        }
    }

    pub fn load_watchlist(&self) -> Watchlist {
        match self.load::<Vec<CoinRecord>>(WATCHLIST_KEY) {
            Ok(Some(records)) => Watchlist::from_records(records),
            Ok(None) => Watchlist::new(),
            Err(e) => {
                warn!("could not load watchlist: {}", e);
                Watchlist::new()
            }
        }
    }

    /// Writes the history unless it is empty. Returns whether it was written.
    pub fn save_history(&self, history: &SearchHistory) -> Result<bool, StorageError> {
        self.save(HISTORY_KEY, history, history.is_empty())
    }

    /// Writes the watch-list unless it is empty. Returns whether it was written.
    pub fn save_watchlist(&self, watchlist: &Watchlist) -> Result<bool, StorageError> {
        self.save(WATCHLIST_KEY, watchlist, watchlist.is_empty())
    }

    /// Persists the collection named by `dirty`.
    pub fn flush(&self, state: &ClientState, dirty: Dirty) -> Result<bool, StorageError> {
        match dirty {
            Dirty::History => self.save_history(state.history()),
            Dirty::Watchlist => self.save_watchlist(state.watchlist()),
        }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    // An empty collection is never written, so an empty state seen before
    // loading completes cannot wipe what is stored.
    fn save<T: Serialize>(&self, key: &str, value: &T, is_empty: bool) -> Result<bool, StorageError> {
        if is_empty {
            debug!("skipping write of empty {}", key);
            return Ok(false);
        }
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)?;
        debug!("persisted {} ({} bytes)", key, json.len());
        Ok(true)
    }
}
