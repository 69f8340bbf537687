//! Defines the trait and implementation for the market-data backend.

use crate::coin_record::CoinLookup;
use crate::ApiError;

/// A trait for any service that can resolve a coin identifier to market data.
pub trait MarketDataProvider {
    /// Looks up one coin.
    ///
    /// An `Ok` value may still be a backend-reported failure
    /// ([`CoinLookup::Failed`]). `Err` means the reply never arrived or could
    /// not be understood.
    async fn fetch_coin(&self, id: &str) -> Result<CoinLookup, ApiError>;
}

/// Provides market data from the companion HTTP backend.
pub mod backend {
    use super::*;
    use crate::prefs::backend_preference::BackendPreference;

    /// Talks to `GET {base}/crypto/{id}`.
    ///
    /// The HTTP status is ignored: the backend reports failures through an
    /// `error` field in the body, which [`CoinLookup`] picks up.
    #[derive(Clone, Debug)]
    pub struct Backend {
        base_url: String,
        client: reqwest::Client,
    }

    impl Backend {
        pub fn new(preference: &BackendPreference) -> Self {
            Self {
                base_url: preference.base_url().to_string(),
                client: reqwest::Client::new(),
            }
        }

        /// The url queried for an already normalized identifier.
        pub fn endpoint(&self, id: &str) -> String {
            format!("{}/crypto/{}", self.base_url, id)
        }
    }

    impl MarketDataProvider for Backend {
        async fn fetch_coin(&self, id: &str) -> Result<CoinLookup, ApiError> {
            let url = self.endpoint(id);
            dioxus_logger::tracing::debug!("fetching {}", url);

            let lookup = self
                .client
                .get(&url)
                .send()
                .await?
                .json::<CoinLookup>()
                .await?;

            Ok(lookup)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn endpoint_is_keyed_by_id() {
            let backend = Backend::new(&BackendPreference::new("http://localhost:5000/", "."));
            assert_eq!(
                backend.endpoint("bitcoin"),
                "http://localhost:5000/crypto/bitcoin"
            );
        }
    }
}
