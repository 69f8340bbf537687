use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Where the market-data backend lives and where native builds keep their
/// durable storage file.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BackendPreference {
    /// Base url of the backend, without a trailing slash.
    base_url: String,

    /// Directory holding the storage file on native targets.
    data_dir: PathBuf,
}

impl BackendPreference {
    /// Default backend address, matching the backend's own default port.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5000";

    /// Default directory for the native storage file.
    pub const DEFAULT_DATA_DIR: &'static str = ".";

    pub fn new(base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            data_dir: data_dir.into(),
        }
    }

    /// Creates a BackendPreference from environment variables, with in-code
    /// defaults.
    ///
    /// # Environment Variables
    /// - `NEXUS_BACKEND_URL`: base url of the market-data backend.
    ///   Read at runtime on native targets. Browsers have no environment, so
    ///   wasm builds take the value seen at compile time.
    /// - `NEXUS_DATA_DIR`: directory for the native storage file.
    pub fn from_env() -> Self {
        let base_url = env::var("NEXUS_BACKEND_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| option_env!("NEXUS_BACKEND_URL").map(str::to_string))
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let data_dir = env::var("NEXUS_DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATA_DIR.to_string());

        Self::new(base_url, data_dir)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

impl Default for BackendPreference {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let pref = BackendPreference::new("http://example.test:5000//", "/tmp");
        assert_eq!(pref.base_url(), "http://example.test:5000");
        assert_eq!(pref.data_dir(), &PathBuf::from("/tmp"));
    }
}
