use super::backend_preference::BackendPreference;
use serde::Serialize;
use serde::Deserialize;

/// Represents all user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct UserPrefs {
    backend_preference: BackendPreference,
}

impl UserPrefs {
    pub fn new(backend_preference: BackendPreference) -> Self {
        Self { backend_preference }
    }

    pub fn backend_preference(&self) -> &BackendPreference {
        &self.backend_preference
    }
}
