//! Blocking HTTP client for the device's configuration API.

use anyhow::{Context, Result};

mod fetch;
pub use self::fetch::FetchOutcome;
mod http;
mod snapshot;
pub use self::snapshot::{IMAGE_PATH, LOG_PATH};
mod update;

pub struct DeviceClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl DeviceClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("rowsync")
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
