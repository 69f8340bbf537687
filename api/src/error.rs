//! Error types surfaced by the client state store.

use thiserror::Error;

/// Shown when the backend cannot be reached or answers with something that
/// is not a coin record or an error object.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to fetch data. Make sure the market data backend is running!";

/// Why a search did not produce a coin record.
///
/// None of these are fatal. Each one resolves to an error message in the
/// query state and the user can retry right away.
#[derive(Error, Debug, Clone, PartialEq, Eq, strum::EnumIs)]
pub enum SearchError {
    /// The user submitted blank text. No fetch is attempted.
    #[error("Please enter a cryptocurrency name")]
    EmptyQuery,

    /// The backend answered with an explicit `error` payload. Shown verbatim.
    #[error("{0}")]
    BackendReported(String),

    /// Network or parse failure. The detail is logged, never shown.
    #[error("{}", TRANSPORT_FAILURE_MESSAGE)]
    TransportFailure { detail: String },
}

impl SearchError {
    /// Constructor for [`SearchError::TransportFailure`].
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::TransportFailure {
            detail: err.to_string(),
        }
    }
}

/// Rejection reasons for the comparison set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    #[error("the comparison view already holds {0} coins")]
    CompareFull(usize),
}

/// Failures of the durable key-value store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
}
