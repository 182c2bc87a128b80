pub mod file;
pub mod http;
pub mod sample;
pub mod traits;

pub use file::FileListingSource;
pub use http::HttpListingSource;
pub use sample::sample_listings;
pub use traits::ListingSource;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::Listing;

/// Decode a JSON array of listings.
///
/// Each element is decoded on its own; a record that fails to decode is
/// logged and skipped rather than failing the whole payload.
pub(crate) fn listings_from_json(body: &str) -> Result<Vec<Listing>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).context("Listing payload is not a JSON array")?;

    let total = records.len();
    let mut listings = Vec::with_capacity(total);

    for (idx, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Listing>(record) {
            Ok(listing) => listings.push(listing),
            Err(err) => warn!("Skipped listing record {}: {}", idx, err),
        }
    }

    if listings.len() < total {
        warn!(
            "Decoded {} of {} listing records",
            listings.len(),
            total
        );
    }

    Ok(listings)
}
