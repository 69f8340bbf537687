//! Wires user actions to the client state store, the backend and durable
//! storage.

use std::time::Duration;

use api::client_state::ClientState;
use api::coin_record::CoinRecord;
use api::error::SearchError;
use api::market_data::MarketDataProvider;
use api::persistence::Dirty;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;

/// How long the suggestion list stays open after the search box loses focus,
/// so a click on a suggestion still lands.
const BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

#[derive(Clone, Copy)]
pub struct Lookup {
    client: Signal<ClientState>,
    app: CopyValue<AppState>,
}

impl Lookup {
    /// Returns the state signal. Call .read() on this in a component to
    /// subscribe to changes.
    pub fn client(&self) -> Signal<ClientState> {
        self.client
    }

    pub fn set_input(&mut self, text: String) {
        self.client.write().set_input(text);
    }

    pub fn focus(&mut self) {
        self.client.write().show_suggestions();
    }

    pub fn blur(&self) {
        let mut client = self.client;
        spawn(async move {
            compat::sleep(BLUR_HIDE_DELAY).await;
            client.write().hide_suggestions();
        });
    }

    pub fn submit(&mut self) {
        let begun = self.client.write().submit();
        self.fetch(begun);
    }

    pub fn select_suggestion(&mut self, suggestion: &str) {
        let begun = self.client.write().select_suggestion(suggestion);
        self.fetch(begun);
    }

    pub fn select_history(&mut self, id: &str) {
        let begun = self.client.write().select_history(id);
        self.fetch(begun);
    }

    pub fn activate_watchlist(&mut self, name: &str) {
        let begun = self.client.write().activate_watchlist(name);
        self.fetch(begun);
    }

    pub fn add_to_watchlist(&mut self, record: CoinRecord) {
        let dirty = self.client.write().add_to_watchlist(record);
        self.persist(dirty);
    }

    pub fn remove_from_watchlist(&mut self, name: &str) {
        let dirty = self.client.write().remove_from_watchlist(name);
        self.persist(dirty);
    }

    pub fn add_to_compare(&mut self, record: CoinRecord) {
        if let Err(e) = self.client.write().add_to_compare(record) {
            warn!("not added to comparison: {}", e);
        }
    }

    pub fn remove_from_compare(&mut self, name: &str) {
        self.client.write().remove_from_compare(name);
    }

    pub fn clear_compare(&mut self) {
        self.client.write().clear_compare();
    }

    /// Fetches the coin a search transition asked for.
    ///
    /// Requests are not cancelled or fenced; the reply that completes last
    /// decides what is shown.
    fn fetch(&self, begun: Result<String, SearchError>) {
        let Ok(id) = begun else {
            return;
        };
        let this = *self;
        let mut client = self.client;
        spawn(async move {
            let backend = this.app.read().backend.clone();
            let outcome = backend.fetch_coin(&id).await;
            let completed = client.write().complete_search(&id, outcome);
            if let Ok(dirty) = completed {
                this.persist(Some(dirty));
            }
        });
    }

    fn persist(&self, dirty: Option<Dirty>) {
        let Some(dirty) = dirty else {
            return;
        };
        let client = self.client.peek();
        if let Err(e) = self.app.read().persistence.flush(&client, dirty) {
            warn!("could not persist {:?}: {}", dirty, e);
        }
    }
}

pub fn use_lookup() -> Lookup {
    let client = use_context::<AppStateMut>().client;
    let app_state = use_context::<AppState>();
    let app = use_hook(|| CopyValue::new(app_state));
    Lookup { client, app }
}
