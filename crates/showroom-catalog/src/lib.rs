//! Vehicle catalog lookup for the showroom assistant.
//!
//! Fetches the dealer's XML product feed, keeps in-stock cars, narrows
//! them by model name, and returns the cheapest few with a localized
//! summary. Every feed failure is absorbed into a well-formed, empty
//! result; nothing escapes [`Catalog::get_available_cars`].

pub mod client;
pub mod feed;
pub mod messages;
pub mod policy;
pub mod price;

use async_trait::async_trait;
use serde::Serialize;

pub use client::CatalogClient;
pub use feed::{parse_feed, FeedItem};
pub use policy::{select_cars, IN_STOCK, MAX_RESULTS};
pub use price::parse_price;

/// Source of car lookups for the tool dispatcher.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Look up in-stock cars, optionally narrowed by model name.
    async fn get_available_cars(&self, model_filter: Option<&str>) -> CarQueryResult;
}

/// One in-stock inventory item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarRecord {
    pub model: String,
    /// Raw localized price text from the feed.
    pub price: String,
    pub link: String,
    pub image_url: String,
    /// Ordering key derived from `price`; infinite when unparseable.
    #[serde(skip_serializing_if = "is_unpriced")]
    pub numeric_price: f64,
}

fn is_unpriced(price: &f64) -> bool {
    !price.is_finite()
}

/// Summary message plus at most [`MAX_RESULTS`] cars, cheapest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarQueryResult {
    pub summary: String,
    pub cars: Vec<CarRecord>,
}

impl CarQueryResult {
    /// Wrap a selection with the matching summary.
    pub fn from_selection(cars: Vec<CarRecord>, model_filter: Option<&str>) -> Self {
        let summary = match (cars.is_empty(), model_filter.filter(|f| !f.is_empty())) {
            (false, _) => messages::CARS_FOUND.to_string(),
            (true, Some(filter)) => messages::no_cars_matching(filter),
            (true, None) => messages::NO_CARS.to_string(),
        };
        Self { summary, cars }
    }

    /// Degraded result for a failed lookup.
    pub fn from_failure(err: &CatalogError) -> Self {
        let summary = match err {
            CatalogError::Timeout => messages::FEED_TIMEOUT,
            CatalogError::Upstream(_) | CatalogError::Parse(_) => messages::FEED_FAILURE,
        };
        Self {
            summary: summary.to_string(),
            cars: Vec::new(),
        }
    }
}

/// Why a lookup could not produce a selection.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("feed request timed out")]
    Timeout,
    #[error("feed request failed: {0}")]
    Upstream(String),
    #[error("feed parse error: {0}")]
    Parse(String),
}
