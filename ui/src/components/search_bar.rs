//! Search box with live autocomplete and the submit button.

use crate::components::pico::Button;
use crate::hooks::use_lookup::use_lookup;
use api::suggestions::POPULAR_COINS;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

#[component]
pub fn SearchBar() -> Element {
    let mut lookup = use_lookup();
    let (input, loading, suggestions) = {
        let client = lookup.client();
        let state = client.read();
        (
            state.query().input.clone(),
            state.query().loading,
            state.visible_suggestions(&POPULAR_COINS),
        )
    };

    rsx! {
        div {
            class: "search-container",
            role: "group",
            div {
                class: "search-wrapper",
                style: "position: relative; flex: 1;",
                input {
                    r#type: "search",
                    class: "search-input",
                    placeholder: "Enter cryptocurrency",
                    value: "{input}",
                    oninput: move |evt| lookup.set_input(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            lookup.submit();
                        }
                    },
                    onfocus: move |_| lookup.focus(),
                    onblur: move |_| lookup.blur(),
                }

                if !suggestions.is_empty() {
                    ul {
                        class: "suggestions-dropdown",
                        for suggestion in suggestions {
                            li {
                                key: "{suggestion}",
                                class: "suggestion-item",
                                onclick: move |_| lookup.select_suggestion(suggestion),
                                span { class: "suggestion-icon", "🪙 " }
                                "{suggestion}"
                            }
                        }
                    }
                }
            }

            Button {
                disabled: loading,
                busy: loading,
                on_click: move |_| lookup.submit(),
                if loading { "" } else { "🔍 Search" }
            }
        }
    }
}
