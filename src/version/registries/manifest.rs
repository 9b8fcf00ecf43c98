//! actions/python-versions manifest client

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::version::error::RegistryError;
use crate::version::registries::{build_client, fetch_json};
use crate::version::registry::ManifestSource;

/// Entry of the manifest; build files and release URLs are not needed
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    version: String,
}

/// Client for the versions manifest used by `actions/setup-python`
pub struct ManifestRegistry {
    client: Client,
    url: String,
}

impl ManifestRegistry {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl ManifestSource for ManifestRegistry {
    async fn fetch_versions(&self) -> Result<Vec<String>, RegistryError> {
        let entries: Vec<ManifestEntry> = fetch_json(&self.client, &self.url).await?;

        debug!("Found {} versions in manifest", entries.len());

        Ok(entries.into_iter().map(|entry| entry.version).collect())
    }
}
