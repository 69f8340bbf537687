//! The single screen of the app: search, result, watch-list and comparison.

use dioxus::prelude::*;

use crate::components::coin_card::CoinCard;
use crate::components::compare_panel::ComparePanel;
use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::components::history_chips::HistoryChips;
use crate::components::search_bar::SearchBar;
use crate::components::watchlist_panel::WatchlistPanel;
use crate::hooks::use_lookup::use_lookup;

#[component]
pub fn LookupScreen() -> Element {
    let lookup = use_lookup();

    let (record, error, empty) = {
        let client = lookup.client();
        let state = client.read();
        let query = state.query();
        (query.record.clone(), query.error.clone(), query.shows_empty_state())
    };

    rsx! {
        section {
            class: "search-section",
            SearchBar {}
            HistoryChips {}
        }

        WatchlistPanel {}
        ComparePanel {}

        if let Some(message) = error {
            ErrorBanner { message }
        }

        if let Some(record) = record {
            CoinCard {
                key: "{record.name}",
                record,
            }
        }

        if empty {
            EmptyState {
                title: "Search for a cryptocurrency",
                description: "Enter a name like bitcoin, ethereum or solana to see live market data.",
                icon: "🪙",
            }
        }
    }
}
