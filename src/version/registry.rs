//! Feed traits for fetching Python release data from remote sources

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;
use crate::version::types::ReleaseRecord;

/// Source of the Python version manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetches every published version string
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Versions in feed order, expected newest first
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_versions(&self) -> Result<Vec<String>, RegistryError>;
}

/// Source of Python release cycles and their end-of-life dates
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait EolSource: Send + Sync {
    /// Fetches every release cycle in feed order
    async fn fetch_releases(&self) -> Result<Vec<ReleaseRecord>, RegistryError>;
}
