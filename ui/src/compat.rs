// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use api::error::StorageError;
    use api::prefs::user_prefs::UserPrefs;
    use api::storage::KeyValueStore;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// The browser's `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    fn js_err(value: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Unavailable(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }

    impl LocalStorage {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(js_err)?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(js_err)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(js_err)
        }
    }

    /// Opens the durable store for this platform.
    pub fn open_store(_prefs: &UserPrefs) -> Result<Box<dyn KeyValueStore>, StorageError> {
        Ok(Box::new(LocalStorage::open()?))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use api::error::StorageError;
    use api::prefs::user_prefs::UserPrefs;
    use api::storage::FileStore;
    use api::storage::KeyValueStore;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Opens the durable store for this platform: a json file in the
    /// configured data directory.
    pub fn open_store(prefs: &UserPrefs) -> Result<Box<dyn KeyValueStore>, StorageError> {
        let store = FileStore::in_dir(prefs.backend_preference().data_dir());
        dioxus_logger::tracing::info!("storage file: {}", store.path().display());
        Ok(Box::new(store))
    }
}
