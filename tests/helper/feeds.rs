//! Feed test utilities

use std::path::PathBuf;
use std::time::Duration;

use mockito::{Mock, Server, ServerGuard};

use python_versions_action::version::registries::{EolRegistry, ManifestRegistry};

pub const MANIFEST_PATH: &str = "/actions/python-versions/main/versions-manifest.json";
pub const EOL_PATH: &str = "/api/python.json";

/// Read a file from tests/fixtures
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A mockito server standing in for both feeds
pub struct FeedServer {
    pub server: ServerGuard,
}

impl FeedServer {
    pub async fn start() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn start_blocking() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn manifest_url(&self) -> String {
        format!("{}{}", self.server.url(), MANIFEST_PATH)
    }

    pub fn eol_url(&self) -> String {
        format!("{}{}", self.server.url(), EOL_PATH)
    }

    /// Serve `body` as JSON at `path`, expecting exactly `hits` requests
    pub async fn serve(&mut self, path: &str, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    pub fn serve_blocking(&mut self, path: &str, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create()
    }

    pub fn registries(&self) -> (ManifestRegistry, EolRegistry) {
        let timeout = Duration::from_secs(5);
        (
            ManifestRegistry::new(&self.manifest_url(), timeout).unwrap(),
            EolRegistry::new(&self.eol_url(), timeout).unwrap(),
        )
    }
}
