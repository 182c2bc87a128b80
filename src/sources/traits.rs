use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing sources
/// This keeps the filter engine decoupled from where listings come from
/// (backend API, local file, bundled samples)
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the current listing collection from the source
    async fn fetch(&self) -> Result<Vec<Listing>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
