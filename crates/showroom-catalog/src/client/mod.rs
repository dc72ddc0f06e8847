//! HTTP client for the product feed.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::feed::parse_feed;
use crate::policy::select_cars;
use crate::{CarQueryResult, Catalog, CatalogError};


/// Fetches the feed anew on every lookup; nothing is cached.
pub struct CatalogClient {
    feed_url: String,
    max_results: usize,
    http: reqwest::Client,
}

impl CatalogClient {
    /// `timeout` bounds both connecting and reading the whole feed, and must
    /// be shorter than the request budget of whoever calls this.
    pub fn new(
        feed_url: impl Into<String>,
        timeout: Duration,
        max_results: usize,
    ) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            feed_url: feed_url.into(),
            max_results,
            http,
        })
    }

    /// Download the raw feed document.
    pub async fn fetch_feed(&self) -> Result<String, CatalogError> {
        debug!(url = %self.feed_url, "Fetching product feed");

        let response = self
            .http
            .get(&self.feed_url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Upstream(format!("HTTP {status}")));
        }

        response.text().await.map_err(map_transport_error)
    }

    /// Run the full lookup, reporting failures as a tagged reason.
    pub async fn query(&self, model_filter: Option<&str>) -> Result<CarQueryResult, CatalogError> {
        let xml = self.fetch_feed().await?;
        let items = parse_feed(&xml)?;
        let total = items.len();
        let cars = select_cars(items, model_filter, self.max_results);

        debug!(
            feed_items = total,
            selected = cars.len(),
            filter = model_filter.unwrap_or(""),
            "Catalog lookup finished"
        );

        Ok(CarQueryResult::from_selection(cars, model_filter))
    }
}

fn map_transport_error(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout
    } else {
        CatalogError::Upstream(e.to_string())
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn get_available_cars(&self, model_filter: Option<&str>) -> CarQueryResult {
        match self.query(model_filter).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, url = %self.feed_url, "Catalog lookup failed");
                CarQueryResult::from_failure(&e)
            }
        }
    }
}
