use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Feed endpoints
// =============================================================================

/// Manifest of Python builds published for `actions/setup-python`, newest first
pub const DEFAULT_MANIFEST_URL: &str =
    "https://raw.githubusercontent.com/actions/python-versions/main/versions-manifest.json";

/// endoflife.date release cycles for Python
pub const DEFAULT_EOL_URL: &str = "https://endoflife.date/api/python.json";

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Only release cycles whose end of life falls within this many days from
/// today are candidates for the `EOL` lower bound (roughly 10 years)
pub const EOL_HORIZON_DAYS: u64 = 3650;

// =============================================================================
// Version bounds
// =============================================================================

/// Major version the `latest` upper bound stands for (`4.0`)
pub const LATEST_MAJOR: u64 = 4;

/// Minor version the `latest` upper bound stands for
pub const LATEST_MINOR: u64 = 0;

// =============================================================================
// CI contract
// =============================================================================

/// Environment variable written to the `GITHUB_ENV` file
pub const ENV_KEY: &str = "LATEST_PYTHON_VERSIONS";

/// Step output written to the `GITHUB_OUTPUT` file
pub const OUTPUT_KEY: &str = "latest-python-versions";

/// Feed configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionConfig {
    pub manifest_url: String,
    pub eol_url: String,
    /// Per-request timeout in milliseconds
    pub fetch_timeout: u64,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            eol_url: DEFAULT_EOL_URL.to_string(),
            fetch_timeout: FETCH_TIMEOUT_MS,
        }
    }
}

/// Files the CI runner asks us to append to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CiTargets {
    /// `GITHUB_ENV`
    pub env_file: Option<PathBuf>,
    /// `GITHUB_OUTPUT`
    pub output_file: Option<PathBuf>,
}

impl CiTargets {
    /// Reads the target files from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self {
            env_file: path("GITHUB_ENV"),
            output_file: path("GITHUB_OUTPUT"),
        }
    }
}
