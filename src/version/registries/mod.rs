//! HTTP implementations of the release feeds

pub mod endoflife;
pub mod manifest;

pub use endoflife::EolRegistry;
pub use manifest::ManifestRegistry;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::version::error::RegistryError;

const USER_AGENT: &str = concat!("python-versions-action/", env!("CARGO_PKG_VERSION"));

fn build_client(timeout: Duration) -> Result<Client, RegistryError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// GET `url` and decode the JSON body
async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, RegistryError> {
    debug!("Fetching {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(RegistryError::NotFound(url.to_string()));
    }

    if !status.is_success() {
        warn!("Feed returned status {}: {}", status, url);
        return Err(RegistryError::InvalidResponse(format!(
            "Unexpected status: {}",
            status
        )));
    }

    response.json().await.map_err(|e| {
        warn!("Failed to parse response from {}: {}", url, e);
        RegistryError::InvalidResponse(e.to_string())
    })
}
