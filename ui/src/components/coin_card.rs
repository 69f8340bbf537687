//! Detail view of the current search result.

use crate::components::change_badge::ChangeBadge;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::hooks::use_lookup::use_lookup;
use api::coin_record::CoinRecord;
use api::format;
use dioxus::prelude::*;

#[component]
fn StatCard(label: String, value: String, #[props(default)] note: Option<String>) -> Element {
    rsx! {
        article {
            class: "stat-card",
            small { class: "stat-label", "{label}" }
            div { class: "stat-value", "{value}" }
            if let Some(note) = note {
                small { class: "stat-note", "{note}" }
            }
        }
    }
}

#[component]
pub fn CoinCard(record: CoinRecord) -> Element {
    let mut lookup = use_lookup();

    let (in_watchlist, can_compare) = {
        let client = lookup.client();
        let state = client.read();
        (state.is_in_watchlist(&record.name), state.can_compare(&record))
    };

    let watch_style = if in_watchlist {
        ButtonType::Secondary
    } else {
        ButtonType::Primary
    };
    let price = format::or_missing(record.current_price, format::price);
    let last_updated = format::local_timestamp(&record.last_updated);
    let watch_record = record.clone();
    let compare_record = record.clone();

    rsx! {
        Card {
            class: "crypto-card",
            div {
                class: "crypto-header",
                hgroup {
                    h2 { class: "crypto-name", "{record.name}" }
                    p { class: "crypto-symbol", "{record.symbol}" }
                }
                div {
                    class: "crypto-actions",
                    Button {
                        button_type: watch_style,
                        outline: true,
                        on_click: move |_| {
                            if in_watchlist {
                                lookup.remove_from_watchlist(&watch_record.name);
                            } else {
                                lookup.add_to_watchlist(watch_record.clone());
                            }
                        },
                        if in_watchlist { "★ Remove from Watchlist" } else { "☆ Add to Watchlist" }
                    }
                    if can_compare {
                        Button {
                            button_type: ButtonType::Contrast,
                            outline: true,
                            on_click: move |_| lookup.add_to_compare(compare_record.clone()),
                            "📊 Add to Compare"
                        }
                    }
                }
            }

            div {
                class: "price-section",
                div { class: "current-price", "{price}" }
                ChangeBadge {
                    percentage: record.price_change_percentage_24h,
                    suffix: " (24h)",
                    class: "price-change",
                }
            }

            div {
                class: "stats-grid grid",
                StatCard { label: "Market Cap", value: format::or_missing(record.market_cap, format::dollar_billions) }
                StatCard { label: "24h Volume", value: format::or_missing(record.volume, format::dollar_billions) }
                StatCard { label: "24h High", value: format::or_missing(record.high_24h, format::stat_price) }
                StatCard { label: "24h Low", value: format::or_missing(record.low_24h, format::stat_price) }
            }
            div {
                class: "stats-grid grid",
                StatCard {
                    label: "All-Time High",
                    value: format::or_missing(record.ath, format::stat_price),
                    note: record.ath_date.as_ref().map(format::date),
                }
                StatCard {
                    label: "All-Time Low",
                    value: format::or_missing(record.atl, format::stat_price),
                    note: record.atl_date.as_ref().map(format::date),
                }
                StatCard {
                    label: "Circulating Supply",
                    value: format::or_missing(record.circulating_supply, format::millions),
                }
                if let Some(max_supply) = record.capped_supply() {
                    StatCard {
                        label: "Max Supply",
                        value: format::millions(max_supply),
                    }
                }
            }

            footer {
                small {
                    class: "last-updated",
                    "Last updated: {last_updated}"
                }
            }
        }
    }
}
