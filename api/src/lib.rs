//! This crate contains the UI-independent core of the coin lookup app: the
//! market-data model, the client state store, the backend provider and the
//! durable persistence of history and watch-list.

pub mod client_state;
pub mod coin_record;
pub mod compare;
pub mod error;
pub mod format;
pub mod history;
pub mod market_data;
pub mod persistence;
pub mod prefs;
pub mod storage;
pub mod suggestions;
pub mod watchlist;

/// Error type returned by market-data providers.
///
/// Anything that goes wrong below the wire format (connection refused, bad
/// json, ...) ends up here and is reported to the user as a transport failure.
pub type ApiError = anyhow::Error;
