//! The persisted watch-list. Rows show the stored snapshot; clicking a row
//! fetches fresh data for that coin.

use crate::components::change_badge::ChangeBadge;
use crate::components::pico::Card;
use crate::hooks::use_lookup::use_lookup;
use api::coin_record::CoinRecord;
use api::format;
use dioxus::prelude::*;

#[component]
fn WatchlistRow(record: CoinRecord) -> Element {
    let mut lookup = use_lookup();
    let price = format::or_missing(record.current_price, format::price);
    let name = record.name.clone();
    let remove_name = record.name.clone();

    rsx! {
        div {
            class: "watchlist-item",
            role: "button",
            tabindex: "0",
            onclick: move |_| lookup.activate_watchlist(&name),

            div {
                class: "watchlist-item-left",
                strong { class: "watchlist-item-name", "{record.name}" }
                " "
                small { class: "watchlist-item-symbol", "{record.symbol}" }
            }
            div {
                class: "watchlist-item-center",
                span { class: "watchlist-item-price", "{price}" }
                " "
                ChangeBadge {
                    percentage: record.price_change_percentage_24h,
                    class: "watchlist-item-change",
                }
            }
            button {
                class: "watchlist-remove-btn secondary outline",
                "aria-label": "Remove from watchlist",
                onclick: move |evt| {
                    // the row itself is clickable
                    evt.stop_propagation();
                    lookup.remove_from_watchlist(&remove_name);
                },
                "✕"
            }
        }
    }
}

#[component]
pub fn WatchlistPanel() -> Element {
    let lookup = use_lookup();
    let records: Vec<CoinRecord> = lookup.client().read().watchlist().iter().cloned().collect();

    if records.is_empty() {
        return rsx! {};
    }

    rsx! {
        Card {
            class: "watchlist-section",
            h3 { class: "watchlist-title", "⭐ My Watchlist" }
            div {
                class: "watchlist-list",
                for record in records {
                    WatchlistRow {
                        key: "{record.name}",
                        record: record.clone(),
                    }
                }
            }
        }
    }
}
