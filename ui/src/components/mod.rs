//! Shared building blocks of the lookup screen.
pub mod change_badge;
pub mod coin_card;
pub mod compare_panel;
pub mod empty_state;
pub mod error_banner;
pub mod history_chips;
pub mod pico;
pub mod search_bar;
pub mod watchlist_panel;
