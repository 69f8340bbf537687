// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::client_state::ClientState;
use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::lookup::LookupScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    * { box-sizing: border-box; }

    header.app-header { text-align: center; margin: 2rem 0 1.5rem; }
    header.app-header h1 { margin-bottom: 0.25rem; }

    /* --- SEARCH --- */
    .search-container { display: flex; gap: 0.5rem; align-items: flex-start; }
    .search-container button { width: auto; white-space: nowrap; }
    .suggestions-dropdown {
        position: absolute;
        top: 100%; left: 0; right: 0;
        z-index: 10;
        margin: 0;
        padding: 0;
        list-style: none;
        background-color: var(--pico-card-background-color);
        border: 1px solid var(--pico-card-border-color);
        border-radius: var(--pico-border-radius);
        box-shadow: var(--pico-card-box-shadow);
    }
    .suggestion-item { padding: 0.5rem 1rem; cursor: pointer; list-style: none; }
    .suggestion-item:hover { background-color: var(--pico-card-sectioning-background-color); }

    .history-container { display: flex; flex-wrap: wrap; gap: 0.5rem; align-items: center; }
    .history-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .history-chip { padding: 0.2rem 0.75rem; width: auto; font-size: 0.85rem; }

    /* --- CHANGE INDICATOR --- */
    .positive { color: #16a34a; }
    .negative { color: #dc2626; }

    /* --- WATCHLIST --- */
    .watchlist-item {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1rem;
        padding: 0.5rem 0.75rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
        cursor: pointer;
    }
    .watchlist-item:hover { background-color: var(--pico-card-sectioning-background-color); }
    .watchlist-remove-btn, .compare-remove-btn { width: auto; padding: 0.1rem 0.5rem; margin: 0; }

    /* --- COMPARE --- */
    .compare-header { display: flex; justify-content: space-between; align-items: center; }
    .compare-header button { width: auto; }
    .compare-card { position: relative; }
    .compare-remove-btn { position: absolute; top: 0.5rem; right: 0.5rem; }
    .compare-price { font-size: 1.4rem; font-weight: bold; }
    .compare-stats { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; margin-top: 0.75rem; }

    /* --- DETAIL CARD --- */
    .crypto-header { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 1rem; }
    .crypto-actions { display: flex; gap: 0.5rem; align-items: flex-start; }
    .crypto-actions button { width: auto; }
    .current-price { font-size: 2.25rem; font-weight: bold; }
    .price-change { font-size: 1.1rem; }
    .stat-card { margin: 0.5rem 0; padding: 0.75rem; }
    .stat-value { font-size: 1.2rem; font-weight: bold; }
    .last-updated { color: var(--pico-muted-color); }

    .error-message {
        padding: 1rem;
        margin: 1rem 0;
        border-radius: var(--pico-border-radius);
        color: #dc2626;
        background-color: color-mix(in srgb, #dc2626, transparent 90%);
        border: 1px solid color-mix(in srgb, #dc2626, transparent 70%);
    }

    footer.app-footer { text-align: center; color: var(--pico-muted-color); margin: 2rem 0 1rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{app_css}"
        }
        LoadedApp {
            user_prefs: UserPrefs::default(),
        }
    }
}

/// Owns the application's state and renders the lookup screen.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = use_context_provider(|| AppState::new(user_prefs.clone()));

    // Restore what was persisted before the first render.
    let client = use_signal(|| {
        let state: ClientState = app_state.persistence.load_state();
        dioxus_logger::tracing::info!(
            "restored {} recent searches and {} watched coins",
            state.history().len(),
            state.watchlist().len()
        );
        state
    });
    use_context_provider(|| AppStateMut { client });

    let backend_url = app_state.prefs.backend_preference().base_url().to_string();

    rsx! {
        Container {
            header {
                class: "app-header",
                h1 { "🪙 Nexus BlockChain" }
                p { "Real-time cryptocurrency market data" }
            }
            LookupScreen {}
            footer {
                class: "app-footer",
                small { "Market data from {backend_url}" }
            }
        }
    }
}
