//! CLI Configuration

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use staffbook_core::{ContactRepository, HttpStore, StoreConfig};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Contact server base URL.
    pub api_url: String,
    /// Upper bound for each server request.
    pub timeout: Duration,
}

impl CliConfig {
    pub fn new(api_url: &str, timeout_secs: u64) -> Self {
        CliConfig {
            api_url: api_url.to_string(),
            timeout: Duration::from_secs(timeout_secs.max(1)),
        }
    }

    /// Returns the store configuration for the contact server.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_base_url(&self.api_url)
            .with_timeout(self.timeout)
    }

    /// Opens a repository backed by the contact server.
    pub fn repository(&self) -> Result<ContactRepository> {
        let store_config = self.store_config();
        let store = HttpStore::new(&store_config)?;
        Ok(ContactRepository::from_config(
            Arc::new(store),
            &store_config,
        ))
    }
}
