use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::models::Listing;
use crate::sources::listings_from_json;
use crate::sources::traits::ListingSource;

/// Listing source reading a JSON array from a local file.
///
/// Useful for demos and for replaying a saved backend response.
pub struct FileListingSource {
    path: PathBuf,
}

impl FileListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for FileListingSource {
    async fn fetch(&self) -> Result<Vec<Listing>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let listings = listings_from_json(&body)?;
        info!(
            "Loaded {} listings from {}",
            listings.len(),
            self.path.display()
        );

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn reads_listings_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "1", "city_name": "Cairo", "property_type": "Villa", "price": 500}}]"#
        )
        .unwrap();

        let source = FileListingSource::new(file.path());
        let listings = source.fetch().await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].city_name.as_deref(), Some("Cairo"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = FileListingSource::new("/nonexistent/listings.json");
        assert!(source.fetch().await.is_err());
    }
}
