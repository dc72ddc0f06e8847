use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Product feed location and result policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// HTTPS URL of the XML product feed.
    pub feed_url: String,
    /// Connect + read timeout for one feed fetch, in seconds.
    pub timeout_secs: u64,
    /// Maximum number of cars returned per lookup (valid range: 1-4).
    pub max_results: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            feed_url: "https://sale.peugeot.bg/ecommerce/fb/product_feed.xml".into(),
            timeout_secs: 7,
            max_results: 4,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
