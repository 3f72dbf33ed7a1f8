//! One-shot outlet retrieval.
//!
//! Any failure (transport error, non-2xx status, malformed payload) collapses
//! to an empty outlet set: the rest of the system treats "no outlets" as a
//! valid, renderable state with a functioning but data-less map. No retries.

use crate::core::config::MapConfig;
use crate::core::outlet::Outlet;
use crate::Result;

/// Client for the outlet retrieval endpoint
pub struct OutletClient {
    client: reqwest::Client,
    url: String,
}

impl OutletClient {
    pub fn new(config: &MapConfig) -> Self {
        Self::with_url(config.outlets_url.clone())
    }

    /// Points the client at a custom URL (staging, or a mock server in tests)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetches the full outlet set, yielding an empty vec on any failure.
    pub async fn load(&self) -> Vec<Outlet> {
        match self.try_load().await {
            Ok(outlets) => {
                log::info!("loaded {} outlets", outlets.len());
                outlets
            }
            Err(err) => {
                log::error!("outlet fetch failed: {err}");
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<Outlet>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}
