use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};

/// Session collaborator invoked by the sidebar's logout button.
///
/// Token handling and post-logout navigation live entirely behind this
/// seam; the filter engine never touches session state.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// End the current session.
    async fn logout(&self) -> Result<()>;
}

/// Session backed by the rental backend's auth endpoint.
pub struct HttpSession {
    client: reqwest::Client,
    logout_url: String,
    token: String,
}

impl HttpSession {
    pub fn new(logout_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("rental-filter/0.1")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            logout_url: logout_url.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl SessionService for HttpSession {
    async fn logout(&self) -> Result<()> {
        let response = self
            .client
            .post(&self.logout_url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("Failed to reach logout endpoint")?;

        if !response.status().is_success() {
            warn!("Logout endpoint returned status: {}", response.status());
            anyhow::bail!("Logout failed: {}", response.status());
        }

        info!("Logged out");
        Ok(())
    }
}
