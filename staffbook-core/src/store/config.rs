//! Configuration for contact store access

use std::time::Duration;

/// Configuration for reaching the contact store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the JSON server (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Collection path under the base URL
    pub collection: String,

    /// Upper bound for every backend call
    pub request_timeout: Duration,

    /// User agent sent with HTTP requests
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            collection: "contacts".to_string(),
            request_timeout: Duration::from_secs(10),
            user_agent: format!(
                "Staffbook/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ),
        }
    }
}

impl StoreConfig {
    /// Configure the server base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Configure the collection path
    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.trim_matches('/').to_string();
        self
    }

    /// Configure the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// URL of the whole collection
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    /// URL of one record by storage id
    pub fn record_url(&self, storage_id: &str) -> String {
        format!("{}/{}", self.collection_url(), storage_id)
    }
}
