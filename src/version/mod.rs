//! Version selection layer
//!
//! This module fetches the Python release feeds, resolves the requested
//! version range and picks the newest release of every minor line in it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Manifest   │────▶│  Selector   │◀────│    Bound    │
//! │  (fetch)    │     │ (per minor) │     │  (min/max)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                ▲
//!                                                │
//!                                         ┌─────────────┐
//!                                         │  EOL feed   │
//!                                         │ (floor)     │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`bound`]: `X.Y`, `latest` and `EOL` bounds and the prerelease flag
//! - [`eol`]: Resolution of the `EOL` bound from end-of-life dates
//! - [`error`]: Error types for feed and selection failures
//! - [`registry`]: Feed traits for fetching release data
//! - [`registries`]: HTTP feed implementations (manifest, endoflife.date)
//! - [`selector`]: Newest-release-per-minor-line selection
//! - [`semver`]: Python version parsing on top of semver
//! - [`types`]: Common types like `ReleaseRecord` and `SelectionResult`

pub mod bound;
pub mod eol;
pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod semver;
pub mod types;
