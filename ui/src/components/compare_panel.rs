//! Side-by-side comparison of up to four coin snapshots.

use crate::components::change_badge::ChangeBadge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_lookup::use_lookup;
use api::coin_record::CoinRecord;
use api::format;
use dioxus::prelude::*;

#[component]
fn CompareStat(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "compare-stat",
            small { class: "compare-stat-label", "{label}" }
            br {}
            span { class: "compare-stat-value", "{value}" }
        }
    }
}

#[component]
fn CompareCard(record: CoinRecord) -> Element {
    let mut lookup = use_lookup();
    let price = format::or_missing(record.current_price, format::price);
    let name = record.name.clone();

    rsx! {
        article {
            class: "compare-card",
            button {
                class: "compare-remove-btn secondary outline",
                "aria-label": "Remove from comparison",
                onclick: move |_| lookup.remove_from_compare(&name),
                "✕"
            }
            h4 { class: "compare-crypto-name", "{record.name}" }
            small { class: "compare-symbol", "{record.symbol}" }
            div { class: "compare-price", "{price}" }
            ChangeBadge {
                percentage: record.price_change_percentage_24h,
                suffix: " (24h)",
                class: "compare-change",
            }
            div {
                class: "compare-stats",
                CompareStat { label: "Market Cap", value: format::or_missing(record.market_cap, format::dollar_billions) }
                CompareStat { label: "Volume", value: format::or_missing(record.volume, format::dollar_billions) }
                CompareStat { label: "24h High", value: format::or_missing(record.high_24h, format::stat_price) }
                CompareStat { label: "24h Low", value: format::or_missing(record.low_24h, format::stat_price) }
            }
        }
    }
}

#[component]
pub fn ComparePanel() -> Element {
    let mut lookup = use_lookup();
    let records: Vec<CoinRecord> = lookup.client().read().compare().iter().cloned().collect();

    if records.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "compare-section",
            div {
                class: "compare-header",
                h3 { class: "compare-title", "📊 Comparison View" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| lookup.clear_compare(),
                    "Clear All"
                }
            }
            div {
                class: "compare-grid grid",
                for record in records {
                    CompareCard {
                        key: "{record.name}",
                        record: record.clone(),
                    }
                }
            }
        }
    }
}
