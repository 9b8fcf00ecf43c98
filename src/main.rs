use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use python_versions_action::action::{self, SelectionRequest};
use python_versions_action::ci;
use python_versions_action::config::{ActionConfig, CiTargets};
use python_versions_action::logging::{self, LogFormat};
use python_versions_action::version::registries::{EolRegistry, ManifestRegistry};
use python_versions_action::version::types::SelectionResult;

#[derive(Parser)]
#[command(name = "python-versions-action")]
#[command(
    version,
    about = "Print the latest Python patch release of every minor version in a range"
)]
struct Cli {
    /// Lower bound as major.minor, or EOL for the oldest supported release
    min_version: String,

    /// Upper bound as major.minor, or latest
    max_version: String,

    /// Whether to include prereleases (true/false, yes/no, 1/0)
    include_prereleases: String,

    /// JSON file with feed settings
    #[arg(long, env = "PYTHON_VERSIONS_CONFIG")]
    config: Option<PathBuf>,

    /// Versions manifest URL
    #[arg(long, env = "PYTHON_VERSIONS_MANIFEST_URL")]
    manifest_url: Option<String>,

    /// End-of-life feed URL
    #[arg(long, env = "PYTHON_VERSIONS_EOL_URL")]
    eol_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, env = "PYTHON_VERSIONS_FETCH_TIMEOUT_MS")]
    fetch_timeout_ms: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn action_config(&self) -> anyhow::Result<ActionConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ActionConfig::default(),
        };

        if let Some(url) = &self.manifest_url {
            config.manifest_url = url.clone();
        }
        if let Some(url) = &self.eol_url {
            config.eol_url = url.clone();
        }
        if let Some(timeout) = self.fetch_timeout_ms {
            config.fetch_timeout = timeout;
        }

        Ok(config)
    }
}

fn load_config(path: &Path) -> anyhow::Result<ActionConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

async fn fetch_and_select(
    config: &ActionConfig,
    request: &SelectionRequest,
) -> anyhow::Result<SelectionResult> {
    let timeout = Duration::from_millis(config.fetch_timeout);
    let manifest = ManifestRegistry::new(&config.manifest_url, timeout)?;
    let eol = EolRegistry::new(&config.eol_url, timeout)?;

    let today = chrono::Utc::now().date_naive();
    Ok(action::run(request, &manifest, &eol, today).await?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.verbose, cli.log_format);

    let config = cli.action_config()?;
    let request = SelectionRequest::parse(
        &cli.min_version,
        &cli.max_version,
        &cli.include_prereleases,
    )?;

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(fetch_and_select(&config, &request))?;

    ci::emit(&result, &CiTargets::from_env(), &mut std::io::stdout().lock())?;

    Ok(())
}
