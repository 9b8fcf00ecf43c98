//! One invocation: resolve bounds, fetch the manifest, select versions

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::version::bound::{VersionBound, parse_bool_flag};
use crate::version::error::{RegistryError, SelectionError};
use crate::version::registry::{EolSource, ManifestSource};
use crate::version::selector::{SelectionCriteria, select_latest_per_minor};
use crate::version::types::SelectionResult;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Parsed command-line request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRequest {
    pub min_version: VersionBound,
    pub max_version: VersionBound,
    pub include_prereleases: bool,
}

impl SelectionRequest {
    pub fn parse(
        min_version: &str,
        max_version: &str,
        include_prereleases: &str,
    ) -> Result<Self, SelectionError> {
        Ok(Self {
            min_version: VersionBound::parse_lower(min_version)?,
            max_version: VersionBound::parse_upper(max_version)?,
            include_prereleases: parse_bool_flag(include_prereleases)?,
        })
    }

    fn needs_eol_feed(&self) -> bool {
        self.min_version.needs_eol_feed()
    }
}

/// Run the selection against the given feeds.
///
/// The end-of-life feed is only fetched when the lower bound is `EOL`.
pub async fn run<M, E>(
    request: &SelectionRequest,
    manifest: &M,
    eol: &E,
    today: NaiveDate,
) -> Result<SelectionResult, ActionError>
where
    M: ManifestSource + ?Sized,
    E: EolSource + ?Sized,
{
    let releases = if request.needs_eol_feed() {
        Some(eol.fetch_releases().await?)
    } else {
        None
    };

    let criteria = SelectionCriteria {
        min: request.min_version.resolve(releases.as_deref(), today)?,
        max: request.max_version.resolve(releases.as_deref(), today)?,
        include_prereleases: request.include_prereleases,
    };
    info!(
        "Selecting Python versions in [{}, {}] (prereleases: {})",
        criteria.min, criteria.max, criteria.include_prereleases
    );

    let versions = manifest.fetch_versions().await?;
    let result = select_latest_per_minor(&versions, &criteria)?;

    info!("Selected {} versions", result.versions.len());
    Ok(result)
}
