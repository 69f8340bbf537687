//! The client state store: query state, search history, watch-list and
//! comparison set, plus the transitions the UI drives them through.
//!
//! A search is split in two halves so the UI can await the fetch without
//! holding the state: [`ClientState::begin_search`] validates and prepares,
//! [`ClientState::complete_search`] applies whatever the provider returned.
//! Searches are not fenced against each other; when two overlap, the reply
//! that arrives last is the one that sticks.

use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

use crate::coin_record::CoinLookup;
use crate::coin_record::CoinRecord;
use crate::compare::CompareSet;
use crate::error::CompareError;
use crate::error::SearchError;
use crate::history::SearchHistory;
use crate::market_data::MarketDataProvider;
use crate::persistence::Dirty;
use crate::suggestions;
use crate::watchlist::Watchlist;
use crate::ApiError;

/// Transient state of the search box and the detail card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    /// Text currently in the search box.
    pub input: String,
    /// Last successfully fetched record.
    pub record: Option<CoinRecord>,
    pub loading: bool,
    /// Message for the error banner.
    pub error: Option<String>,
    pub show_suggestions: bool,
}

impl QueryState {
    /// The placeholder is shown only when there is nothing else to show.
    pub fn shows_empty_state(&self) -> bool {
        self.record.is_none() && self.error.is_none() && !self.loading
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientState {
    query: QueryState,
    history: SearchHistory,
    watchlist: Watchlist,
    compare: CompareSet,
}

impl ClientState {
    /// Seeds the store with the collections loaded from durable storage.
    pub fn new(history: SearchHistory, watchlist: Watchlist) -> Self {
        Self {
            history,
            watchlist,
            ..Default::default()
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    pub fn compare(&self) -> &CompareSet {
        &self.compare
    }

    // --- Search box ---

    /// Typing updates the text and opens the suggestion list.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.query.input = text.into();
        self.query.show_suggestions = true;
    }

    pub fn show_suggestions(&mut self) {
        self.query.show_suggestions = true;
    }

    pub fn hide_suggestions(&mut self) {
        self.query.show_suggestions = false;
    }

    /// Suggestions for the current input, or nothing while the list is hidden.
    pub fn visible_suggestions<'a, S: AsRef<str>>(&self, table: &'a [S]) -> Vec<&'a str> {
        if !self.query.show_suggestions {
            return Vec::new();
        }
        suggestions::suggestions(&self.query.input, table)
    }

    // --- Search ---

    /// Validates `query` and puts the store into the loading state.
    ///
    /// Returns the normalized identifier to fetch. A blank query only sets
    /// the error message; nothing else changes and nothing must be fetched.
    pub fn begin_search(&mut self, query: &str) -> Result<String, SearchError> {
        let id = query.trim().to_lowercase();
        if id.is_empty() {
            self.query.error = Some(SearchError::EmptyQuery.to_string());
            return Err(SearchError::EmptyQuery);
        }

        self.query.error = None;
        self.query.record = None;
        self.query.loading = true;
        self.query.show_suggestions = false;

        info!("searching for {}", id);
        Ok(id)
    }

    /// Submits whatever is in the search box.
    pub fn submit(&mut self) -> Result<String, SearchError> {
        let input = self.query.input.clone();
        self.begin_search(&input)
    }

    /// Picking a suggestion behaves like typing it and pressing search.
    pub fn select_suggestion(&mut self, suggestion: &str) -> Result<String, SearchError> {
        self.query.input = suggestion.to_string();
        self.query.show_suggestions = false;
        self.begin_search(suggestion)
    }

    /// Clicking a history chip re-fetches rather than restoring cached data.
    pub fn select_history(&mut self, id: &str) -> Result<String, SearchError> {
        self.begin_search(id)
    }

    /// Clicking a watch-list row refreshes that coin.
    pub fn activate_watchlist(&mut self, name: &str) -> Result<String, SearchError> {
        self.begin_search(&name.to_lowercase())
    }

    /// Applies the provider's answer for `id`.
    ///
    /// On success the record is shown, `id` moves to the front of the
    /// history and the search box is cleared; the returned [`Dirty`] tells
    /// the caller to persist the history. Loading always ends here.
    pub fn complete_search(
        &mut self,
        id: &str,
        outcome: Result<CoinLookup, ApiError>,
    ) -> Result<Dirty, SearchError> {
        self.query.loading = false;

        let error = match outcome {
            Ok(CoinLookup::Found(record)) => {
                info!("found {} ({})", record.name, id);
                self.query.record = Some(*record);
                self.query.error = None;
                self.query.input.clear();
                self.record_search(id);
                return Ok(Dirty::History);
            }
            Ok(CoinLookup::Failed { error }) => {
                warn!("backend reported an error for {}: {}", id, error);
                SearchError::BackendReported(error)
            }
            Err(e) => {
                warn!("fetching {} failed: {:#}", id, e);
                SearchError::transport(format!("{e:#}"))
            }
        };

        self.query.record = None;
        self.query.error = Some(error.to_string());
        Err(error)
    }

    /// Runs a whole search against `provider`.
    pub async fn search<P: MarketDataProvider>(
        &mut self,
        provider: &P,
        query: &str,
    ) -> Result<Dirty, SearchError> {
        let id = self.begin_search(query)?;
        let outcome = provider.fetch_coin(&id).await;
        self.complete_search(&id, outcome)
    }

    // --- History ---

    pub fn record_search(&mut self, id: &str) -> Dirty {
        self.history.record(id);
        Dirty::History
    }

    // --- Watchlist ---

    pub fn add_to_watchlist(&mut self, record: CoinRecord) -> Option<Dirty> {
        self.watchlist.add(record).then_some(Dirty::Watchlist)
    }

    pub fn remove_from_watchlist(&mut self, name: &str) -> Option<Dirty> {
        self.watchlist.remove(name).then_some(Dirty::Watchlist)
    }

    pub fn is_in_watchlist(&self, name: &str) -> bool {
        self.watchlist.contains(name)
    }

    // --- Comparison ---

    pub fn add_to_compare(&mut self, record: CoinRecord) -> Result<(), CompareError> {
        self.compare.add(record)
    }

    pub fn can_compare(&self, record: &CoinRecord) -> bool {
        self.compare.accepts(record)
    }

    pub fn remove_from_compare(&mut self, name: &str) {
        self.compare.remove(name);
    }

    pub fn clear_compare(&mut self) {
        self.compare.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin_record::tests::record;
    use crate::error::TRANSPORT_FAILURE_MESSAGE;
    use crate::suggestions::POPULAR_COINS;
    use serde_json::json;
    use std::cell::RefCell;

    /// Answers every lookup with the same canned reply.
    struct StubProvider {
        reply: Result<serde_json::Value, String>,
        requested: RefCell<Vec<String>>,
    }

    impl StubProvider {
        fn replying(body: serde_json::Value) -> Self {
            Self {
                reply: Ok(body),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl MarketDataProvider for StubProvider {
        async fn fetch_coin(&self, id: &str) -> Result<CoinLookup, ApiError> {
            self.requested.borrow_mut().push(id.to_string());
            match &self.reply {
                Ok(body) => Ok(serde_json::from_value(body.clone())?),
                Err(message) => Err(anyhow::anyhow!(message.clone())),
            }
        }
    }

    fn bitcoin_body() -> serde_json::Value {
        json!({
            "name": "Bitcoin",
            "symbol": "btc",
            "current_price": 50000,
            "price_change_percentage_24h": 2.5,
            "market_cap": 980000000000.0,
            "volume": 31000000000.0,
            "high_24h": 51000,
            "low_24h": 49000,
            "ath": 73738,
            "atl": 67.81,
            "circulating_supply": 19650000,
            "max_supply": 21000000,
            "last_updated": "2024-05-01T10:15:00.000Z"
        })
    }

    #[tokio::test]
    async fn successful_search_shows_record_and_records_history() {
        let provider = StubProvider::replying(bitcoin_body());
        let mut state = ClientState::default();
        state.set_input("bitcoin");

        let dirty = state.search(&provider, "bitcoin").await;

        assert_eq!(dirty, Ok(Dirty::History));
        let query = state.query();
        let shown = query.record.as_ref().unwrap();
        assert_eq!(shown.name, "Bitcoin");
        assert_eq!(shown.symbol, "btc");
        assert_eq!(shown.current_price, Some(50_000.0));
        assert_eq!(shown.price_change_percentage_24h, Some(2.5));
        assert_eq!(state.history().as_slice(), ["bitcoin"]);
        assert_eq!(query.input, "");
        assert!(!query.loading);
        assert_eq!(query.error, None);
    }

    #[tokio::test]
    async fn backend_error_is_shown_verbatim() {
        let provider = StubProvider::replying(json!({ "error": "coin not found" }));
        let mut state = ClientState::default();
        state.record_search("ethereum");

        let result = state.search(&provider, "notacoin").await;

        assert_eq!(
            result,
            Err(SearchError::BackendReported("coin not found".into()))
        );
        assert_eq!(state.query().error.as_deref(), Some("coin not found"));
        assert_eq!(state.query().record, None);
        assert!(!state.query().loading);
        assert_eq!(state.history().as_slice(), ["ethereum"]);
    }

    #[tokio::test]
    async fn transport_failure_uses_fixed_message() {
        let provider = StubProvider::failing("error sending request: connection refused");
        let mut state = ClientState::default();

        let result = state.search(&provider, "bitcoin").await;

        assert!(result.unwrap_err().is_transport_failure());
        assert_eq!(state.query().error.as_deref(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert!(!state.query().loading);
        assert!(state.history().is_empty());
    }

    #[tokio::test]
    async fn null_stat_in_reply_still_shows_the_record() {
        let mut body = bitcoin_body();
        body["price_change_percentage_24h"] = serde_json::Value::Null;
        body["volume"] = serde_json::Value::Null;
        let provider = StubProvider::replying(body);
        let mut state = ClientState::default();

        let result = state.search(&provider, "bitcoin").await;

        assert_eq!(result, Ok(Dirty::History));
        assert_eq!(state.query().error, None);
        let shown = state.query().record.as_ref().unwrap();
        assert_eq!(shown.price_change_percentage_24h, None);
        assert_eq!(shown.volume, None);
        assert_eq!(shown.current_price, Some(50_000.0));
    }

    #[tokio::test]
    async fn malformed_reply_is_a_transport_failure() {
        let provider = StubProvider::replying(json!({ "name": "Bitcoin" }));
        let mut state = ClientState::default();

        let result = state.search(&provider, "bitcoin").await;

        assert!(result.unwrap_err().is_transport_failure());
        assert_eq!(state.query().error.as_deref(), Some(TRANSPORT_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn blank_query_does_not_fetch() {
        let provider = StubProvider::replying(bitcoin_body());
        let mut state = ClientState::default();

        let result = state.search(&provider, "   ").await;

        assert_eq!(result, Err(SearchError::EmptyQuery));
        assert!(provider.requested.borrow().is_empty());
        assert_eq!(
            state.query().error.as_deref(),
            Some("Please enter a cryptocurrency name")
        );
        assert!(!state.query().loading);
    }

    #[tokio::test]
    async fn identifier_is_trimmed_and_lower_cased() {
        let provider = StubProvider::replying(bitcoin_body());
        let mut state = ClientState::default();

        state.search(&provider, "  BitCoin ").await.unwrap();

        assert_eq!(*provider.requested.borrow(), ["bitcoin"]);
        assert_eq!(state.history().as_slice(), ["bitcoin"]);
    }

    #[test]
    fn begin_search_resets_previous_outcome() {
        let mut state = ClientState::default();
        state.query.error = Some("old".into());
        state.query.record = Some(record("Bitcoin", 1.0));
        state.show_suggestions();

        let id = state.begin_search("Solana").unwrap();

        assert_eq!(id, "solana");
        assert!(state.query().loading);
        assert_eq!(state.query().error, None);
        assert_eq!(state.query().record, None);
        assert!(!state.query().show_suggestions);
        assert!(!state.query().shows_empty_state());
    }

    #[test]
    fn overlapping_searches_last_reply_wins() {
        let mut state = ClientState::default();
        let first = state.begin_search("bitcoin").unwrap();
        let second = state.begin_search("ethereum").unwrap();

        let mut eth = record("Ethereum", 3_000.0);
        eth.symbol = "ETH".into();
        state
            .complete_search(&second, Ok(CoinLookup::Found(Box::new(eth))))
            .unwrap();
        state
            .complete_search(&first, Ok(CoinLookup::Found(Box::new(record("Bitcoin", 50_000.0)))))
            .unwrap();

        assert_eq!(state.query().record.as_ref().unwrap().name, "Bitcoin");
        assert_eq!(state.history().as_slice(), ["bitcoin", "ethereum"]);
    }

    #[test]
    fn late_error_clears_earlier_record() {
        let mut state = ClientState::default();
        let first = state.begin_search("bitcoin").unwrap();
        let second = state.begin_search("nope").unwrap();

        state
            .complete_search(&first, Ok(CoinLookup::Found(Box::new(record("Bitcoin", 1.0)))))
            .unwrap();
        let _ = state.complete_search(
            &second,
            Ok(CoinLookup::Failed {
                error: "coin not found".into(),
            }),
        );

        assert_eq!(state.query().record, None);
        assert_eq!(state.query().error.as_deref(), Some("coin not found"));
    }

    #[test]
    fn typing_opens_suggestions_and_selecting_searches() {
        let mut state = ClientState::default();
        state.set_input("eth");
        assert_eq!(
            state.visible_suggestions(&POPULAR_COINS),
            ["ethereum", "tether", "ethereum-classic"]
        );

        let id = state.select_suggestion("ethereum-classic").unwrap();

        assert_eq!(id, "ethereum-classic");
        assert_eq!(state.query().input, "ethereum-classic");
        assert!(state.visible_suggestions(&POPULAR_COINS).is_empty());
        assert!(state.query().loading);
    }

    #[test]
    fn submit_uses_the_search_box() {
        let mut state = ClientState::default();
        state.set_input("Cardano");
        assert_eq!(state.submit().unwrap(), "cardano");
    }

    #[tokio::test]
    async fn history_chip_refetches() {
        let provider = StubProvider::replying(bitcoin_body());
        let mut state = ClientState::default();
        state.record_search("bitcoin");
        state.record_search("tron");

        let id = state.select_history("bitcoin").unwrap();
        let outcome = provider.fetch_coin(&id).await;
        state.complete_search(&id, outcome).unwrap();

        assert_eq!(provider.requested.borrow().len(), 1);
        assert_eq!(state.history().as_slice(), ["bitcoin", "tron"]);
    }

    #[test]
    fn watchlist_row_activation_uses_lower_case_name() {
        let mut state = ClientState::default();
        assert_eq!(state.activate_watchlist("Bitcoin").unwrap(), "bitcoin");
    }

    #[test]
    fn watchlist_changes_are_reported_for_persistence() {
        let mut state = ClientState::default();
        assert_eq!(
            state.add_to_watchlist(record("Bitcoin", 1.0)),
            Some(Dirty::Watchlist)
        );
        assert_eq!(state.add_to_watchlist(record("bitcoin", 2.0)), None);
        assert_eq!(state.watchlist().len(), 1);
        assert!(state.is_in_watchlist("BITCOIN"));
        assert_eq!(state.remove_from_watchlist("nope"), None);
    }

    #[test]
    fn compare_full_leaves_set_unchanged() {
        let mut state = ClientState::default();
        for name in ["Bitcoin", "Ethereum", "Solana", "Cardano"] {
            state.add_to_compare(record(name, 1.0)).unwrap();
        }
        let before = state.compare().clone();
        let doge = record("Dogecoin", 0.1);

        assert!(!state.can_compare(&doge));
        assert_eq!(state.add_to_compare(doge), Err(CompareError::CompareFull(4)));
        assert_eq!(state.compare(), &before);
    }

    #[test]
    fn compare_removal_is_exact_but_watchlist_removal_is_not() {
        let mut state = ClientState::default();
        state.add_to_compare(record("bitcoin", 1.0)).unwrap();
        state.add_to_watchlist(record("bitcoin", 1.0));

        state.remove_from_compare("Bitcoin");
        assert_eq!(state.compare().len(), 1);

        assert_eq!(state.remove_from_watchlist("Bitcoin"), Some(Dirty::Watchlist));
        assert!(state.watchlist().is_empty());
    }

    #[test]
    fn clear_compare_empties_it() {
        let mut state = ClientState::default();
        state.add_to_compare(record("Bitcoin", 1.0)).unwrap();
        state.add_to_compare(record("Tron", 1.0)).unwrap();
        state.clear_compare();
        assert!(state.compare().is_empty());
    }

    #[test]
    fn empty_state_only_when_idle() {
        let mut state = ClientState::default();
        assert!(state.query().shows_empty_state());

        let _ = state.begin_search("");
        assert!(!state.query().shows_empty_state());
    }
}
