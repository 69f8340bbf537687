//! The coloured 24h change indicator used by the detail card, the watch-list
//! and the comparison cards.

use api::format::PriceChange;
use api::format::MISSING;
use dioxus::prelude::*;

#[component]
pub fn ChangeBadge(
    // None when the backend has no 24h change for the coin
    percentage: Option<f64>,
    // appended after the value, e.g. " (24h)"
    #[props(default)]
    suffix: String,
    #[props(default = "change-badge".to_string())] class: String,
) -> Element {
    let Some(percentage) = percentage else {
        return rsx! {
            span { class: "{class}", "{MISSING}{suffix}" }
        };
    };
    let change = PriceChange::new(percentage);
    let classes = format!("{class} {}", change.direction().class());

    rsx! {
        span {
            class: "{classes}",
            "{change}{suffix}"
        }
    }
}
