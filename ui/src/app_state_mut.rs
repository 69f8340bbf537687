//! Defines the mutable, reactive state for the application's UI.

use api::client_state::ClientState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// The whole client state store lives in one signal, so every transition is a
/// single `write()` and every panel re-renders from the same snapshot. It is
/// separate from the long-lived services in `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub client: Signal<ClientState>,
}
