use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::models::Listing;
use crate::sources::listings_from_json;
use crate::sources::traits::ListingSource;

/// Listing source backed by the rental backend's HTTP API.
pub struct HttpListingSource {
    client: reqwest::Client,
    url: String,
}

impl HttpListingSource {
    /// Create a source fetching from the given listings endpoint.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("rental-filter/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        debug!("Fetching listings from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch listings")?;

        if !response.status().is_success() {
            warn!("Listing endpoint returned status: {}", response.status());
            anyhow::bail!("Failed to fetch listings: {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read listings body")?;

        debug!("Downloaded {} bytes of listing data", body.len());

        let listings = listings_from_json(&body)?;
        info!("Fetched {} listings from {}", listings.len(), self.url);

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "backend-api"
    }
}
