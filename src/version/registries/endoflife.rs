//! endoflife.date API client

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registries::{build_client, fetch_json};
use crate::version::registry::EolSource;
use crate::version::types::ReleaseRecord;

/// Client for the Python release cycles published by endoflife.date
pub struct EolRegistry {
    client: Client,
    url: String,
}

impl EolRegistry {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl EolSource for EolRegistry {
    async fn fetch_releases(&self) -> Result<Vec<ReleaseRecord>, RegistryError> {
        let releases: Vec<ReleaseRecord> = fetch_json(&self.client, &self.url).await?;

        debug!("Found {} release cycles", releases.len());

        Ok(releases)
    }
}
