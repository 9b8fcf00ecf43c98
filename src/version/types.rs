//! Common types shared by the feeds, the selector and the CI emitter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// End-of-life marker of a release cycle.
///
/// endoflife.date publishes either an ISO-8601 date or a boolean when a
/// cycle has no fixed date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EolDate {
    Date(NaiveDate),
    Flag(bool),
}

impl EolDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            EolDate::Date(date) => Some(*date),
            EolDate::Flag(_) => None,
        }
    }
}

/// One release cycle from the end-of-life feed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseRecord {
    /// major.minor identifier, e.g. "3.9"
    pub cycle: String,
    pub eol: EolDate,
}

impl ReleaseRecord {
    pub fn new(cycle: &str, eol: EolDate) -> Self {
        Self {
            cycle: cycle.to_string(),
            eol,
        }
    }
}

/// Selected versions, one per minor line, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionResult {
    pub versions: Vec<String>,
}

impl SelectionResult {
    pub fn new(versions: Vec<String>) -> Self {
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Compact JSON array, e.g. `["3.9.6","3.8.11"]`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
