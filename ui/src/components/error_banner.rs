use dioxus::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-message",
            role: "alert",
            span { "⚠️" }
            " {message}"
        }
    }
}
