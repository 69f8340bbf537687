pub mod backend_preference;
pub mod user_prefs;
