use std::fmt;
use std::str::FromStr;

use pep508_rs::pep440_rs;
use semver::{Prerelease, Version};

use crate::version::error::SelectionError;

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "3" or "3.9" by padding with zeros.
///
/// Examples:
/// - "3" -> Version(3, 0, 0)
/// - "3.9" -> Version(3, 9, 0)
/// - "3.10.0-rc.1" -> Version(3, 10, 0, pre: rc.1)
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Parse a PEP 440 version ("3.10.0rc1", "3.13.0b2", "3.12.0.dev1") into
/// the equivalent semver::Version ("3.10.0-rc.1", "3.13.0-beta.2", ...).
fn parse_pep440(version: &str) -> Result<Version, String> {
    let parsed = pep440_rs::Version::from_str(version).map_err(|e| e.to_string())?;

    if parsed.epoch() != 0 {
        return Err("epochs are not supported".to_string());
    }
    if parsed.is_post() || parsed.is_local() {
        return Err("post and local releases are not supported".to_string());
    }

    let release = parsed.release();
    if release.len() > 3 {
        return Err("more than three release components".to_string());
    }
    let component = |i: usize| release.get(i).copied().unwrap_or(0);

    let mut semver = Version::new(component(0), component(1), component(2));

    // The normalized form is `<release>[{a|b|rc}N][.devN]`
    let normalized = parsed.to_string();
    let release_str = release
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".");
    let suffix = normalized
        .strip_prefix(&release_str)
        .unwrap_or_default()
        .trim_start_matches('.');

    if !suffix.is_empty() {
        let identifiers: Vec<String> = suffix.split('.').map(pep440_identifier).collect();
        semver.pre = Prerelease::new(&identifiers.join("."))
            .map_err(|e| format!("unsupported prerelease '{}': {}", suffix, e))?;
    }

    Ok(semver)
}

/// Turn a normalized PEP 440 suffix segment ("rc1", "a2", "dev0") into
/// dotted semver identifiers ("rc.1", "alpha.2", "dev.0").
fn pep440_identifier(segment: &str) -> String {
    let split = segment
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(segment.len());
    let (kind, number) = segment.split_at(split);
    let kind = match kind {
        "a" => "alpha",
        "b" => "beta",
        other => other,
    };

    if number.is_empty() {
        kind.to_string()
    } else {
        format!("{}.{}", kind, number)
    }
}

/// A Python release version as listed in the manifest.
///
/// Keeps the original spelling for output while comparing through the
/// parsed semver form, so prereleases rank below their final release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonVersion {
    raw: String,
    version: Version,
}

impl PythonVersion {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    pub fn minor_line(&self) -> MinorLine {
        MinorLine {
            major: self.version.major,
            minor: self.version.minor,
        }
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl FromStr for PythonVersion {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();

        let version = match parse_version(raw) {
            Some(version) => version,
            None => parse_pep440(raw).map_err(|reason| SelectionError::InvalidVersion {
                version: raw.to_string(),
                reason,
            })?,
        };

        Ok(Self {
            raw: raw.to_string(),
            version,
        })
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A major.minor release series, e.g. 3.9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinorLine {
    pub major: u64,
    pub minor: u64,
}

impl MinorLine {
    /// The line as the version `major.minor.0`
    pub fn as_version(&self) -> Version {
        Version::new(self.major, self.minor, 0)
    }

    /// Whether `min <= major.minor.0 <= max`
    pub fn within(&self, min: &Version, max: &Version) -> bool {
        let line = self.as_version();
        *min <= line && line <= *max
    }
}

impl fmt::Display for MinorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
