
use std::sync::Arc;
use anyhow::{Result, Context, bail};
use reqwest::{self, Client};
use tracing::info;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    pub fn new() -> Result<Arc<Self>> {
        // upload.wikimedia.org refuses requests without an identifying agent
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("failed to build http client")?;
        let this = Self {
            client,
        };
        let this = Arc::new(this);
        Ok(this)
    }

    // single GET, the whole body is buffered in memory
    pub async fn download(&self, url: &str) -> Result<Vec<u8>> {
        info!("downloading image {}...", url);
        let response = self.client.get(url)
            .send()
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("unexpected status {status} fetching {url}");
        }
        let bytes = response.bytes()
            .await
            .with_context(|| format!("failed to read body of {url}"))?;
        info!("download complete: {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}
