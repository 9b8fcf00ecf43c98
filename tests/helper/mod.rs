//! Shared test utilities

#![allow(dead_code)]

pub mod feeds;

pub use feeds::{EOL_PATH, FeedServer, MANIFEST_PATH, fixture};
