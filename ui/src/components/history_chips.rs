use crate::hooks::use_lookup::use_lookup;
use dioxus::prelude::*;

/// Row of recently searched identifiers. Clicking one searches it again.
#[component]
pub fn HistoryChips() -> Element {
    let mut lookup = use_lookup();
    let ids: Vec<String> = lookup.client().read().history().iter().cloned().collect();

    if ids.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "history-container",
            small { class: "history-label", "Recent Searches:" }
            div {
                class: "history-chips",
                for id in ids {
                    button {
                        key: "{id}",
                        class: "history-chip secondary outline",
                        onclick: {
                            let id = id.clone();
                            move |_| lookup.select_history(&id)
                        },
                        "{id}"
                    }
                }
            }
        }
    }
}
