use api::market_data::backend::Backend;
use api::persistence::Persistence;
use api::prefs::user_prefs::UserPrefs;
use api::storage::KeyValueStore;
use api::storage::MemoryStore;
use std::ops::Deref;
use std::rc::Rc;

use crate::compat;

/// Long-lived services shared by every component.
pub struct AppStateData {
    pub prefs: UserPrefs,
    pub backend: Backend,
    pub persistence: Persistence<Box<dyn KeyValueStore>>,
}

#[derive(Clone)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: UserPrefs) -> Self {
        let store = compat::open_store(&prefs).unwrap_or_else(|e| {
            dioxus_logger::tracing::warn!("durable storage unavailable, using memory: {}", e);
            Box::new(MemoryStore::new()) as Box<dyn KeyValueStore>
        });

        Self(Rc::new(AppStateData {
            backend: Backend::new(prefs.backend_preference()),
            persistence: Persistence::new(store),
            prefs,
        }))
    }
}
