//! Version range bounds and their resolution to concrete versions

use chrono::NaiveDate;
use semver::Version;

use crate::config::{LATEST_MAJOR, LATEST_MINOR};
use crate::version::eol::resolve_eol_floor;
use crate::version::error::SelectionError;
use crate::version::semver::PythonVersion;
use crate::version::types::ReleaseRecord;

/// A bound of the requested version range, as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionBound {
    /// A literal major.minor (or full) version
    Version(PythonVersion),
    /// `latest`: above every real release
    Latest,
    /// `EOL`: the oldest cycle that has not reached end of life yet
    Eol,
}

impl VersionBound {
    /// Whether resolving this bound needs the end-of-life feed
    pub fn needs_eol_feed(&self) -> bool {
        matches!(self, VersionBound::Eol)
    }

    /// Resolve the bound to a concrete version.
    ///
    /// `eol_records` is only consulted for [`VersionBound::Eol`]; passing
    /// `None` there is reported as no supported release.
    pub fn resolve(
        &self,
        eol_records: Option<&[ReleaseRecord]>,
        today: NaiveDate,
    ) -> Result<Version, SelectionError> {
        match self {
            VersionBound::Version(version) => Ok(version.version().clone()),
            VersionBound::Latest => Ok(latest_sentinel()),
            VersionBound::Eol => {
                resolve_eol_floor(eol_records.unwrap_or_default(), today)
                    .map(|floor| floor.version().clone())
            }
        }
    }

    /// Parse a lower bound: `X.Y` or `EOL`
    pub fn parse_lower(s: &str) -> Result<Self, SelectionError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("eol") {
            Ok(VersionBound::Eol)
        } else {
            parse_literal(s, "expected major.minor or EOL")
        }
    }

    /// Parse an upper bound: `X.Y` or `latest`
    pub fn parse_upper(s: &str) -> Result<Self, SelectionError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("latest") {
            Ok(VersionBound::Latest)
        } else {
            parse_literal(s, "expected major.minor or latest")
        }
    }
}

/// The other bound's sentinel is rejected with a reason naming what this
/// position accepts
fn parse_literal(s: &str, expected: &str) -> Result<VersionBound, SelectionError> {
    if s.eq_ignore_ascii_case("eol") || s.eq_ignore_ascii_case("latest") {
        return Err(SelectionError::InvalidVersion {
            version: s.to_string(),
            reason: expected.to_string(),
        });
    }
    s.parse().map(VersionBound::Version)
}

fn latest_sentinel() -> Version {
    Version::new(LATEST_MAJOR, LATEST_MINOR, 0)
}

/// Parse a boolean-like flag the way `strtobool` does.
///
/// `y`, `yes`, `t`, `true`, `on` and `1` are true; `n`, `no`, `f`,
/// `false`, `off` and `0` are false. Case-insensitive.
pub fn parse_bool_flag(value: &str) -> Result<bool, SelectionError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "on" | "1" => Ok(true),
        "n" | "no" | "f" | "false" | "off" | "0" => Ok(false),
        _ => Err(SelectionError::InvalidFlag(value.to_string())),
    }
}
