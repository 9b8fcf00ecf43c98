//! Selection of the newest release per minor line

use indexmap::IndexMap;
use indexmap::map::Entry;
use semver::Version;
use tracing::debug;

use crate::version::error::SelectionError;
use crate::version::semver::{MinorLine, PythonVersion};
use crate::version::types::SelectionResult;

/// Resolved selection parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    /// Inclusive lower bound on the minor line
    pub min: Version,
    /// Inclusive upper bound on the minor line
    pub max: Version,
    pub include_prereleases: bool,
}

/// Pick the first version seen for each minor line within bounds.
///
/// `versions` must be ordered newest first; the first entry of a minor line
/// is taken as its latest release and later ones are ignored. Every entry is
/// parsed, so a malformed version anywhere in the list is an error.
pub fn select_latest_per_minor<I, S>(
    versions: I,
    criteria: &SelectionCriteria,
) -> Result<SelectionResult, SelectionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selected: IndexMap<MinorLine, PythonVersion> = IndexMap::new();

    for raw in versions {
        let version: PythonVersion = raw.as_ref().parse()?;

        if !criteria.include_prereleases && version.is_prerelease() {
            continue;
        }

        let line = version.minor_line();
        if !line.within(&criteria.min, &criteria.max) {
            continue;
        }

        if let Entry::Vacant(entry) = selected.entry(line) {
            debug!("Selected {} for {}", version, line);
            entry.insert(version);
        }
    }

    Ok(SelectionResult::new(
        selected
            .into_values()
            .map(PythonVersion::into_string)
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const MANIFEST: &[&str] = &[
        "3.10.0-rc.1",
        "3.10.0-beta.4",
        "3.9.6",
        "3.9.5",
        "3.8.11",
        "3.8.10",
        "3.7.11",
        "3.6.14",
        "3.5.10",
        "3.4.10",
        "2.7.18",
    ];

    fn criteria(min: &str, max: &str, include_prereleases: bool) -> SelectionCriteria {
        let bound = |s: &str| s.parse::<PythonVersion>().unwrap().version().clone();
        SelectionCriteria {
            min: bound(min),
            max: bound(max),
            include_prereleases,
        }
    }

    #[rstest]
    #[case("3.4", "3.9", false, vec!["3.9.6", "3.8.11", "3.7.11", "3.6.14", "3.5.10", "3.4.10"])]
    #[case("3.5", "3.9", false, vec!["3.9.6", "3.8.11", "3.7.11", "3.6.14", "3.5.10"])]
    #[case("3.5", "3.8", false, vec!["3.8.11", "3.7.11", "3.6.14", "3.5.10"])]
    #[case("3.5", "3.8", true, vec!["3.8.11", "3.7.11", "3.6.14", "3.5.10"])]
    #[case("3.5", "4.0", true, vec!["3.10.0-rc.1", "3.9.6", "3.8.11", "3.7.11", "3.6.14", "3.5.10"])]
    #[case("3.5", "4.0", false, vec!["3.9.6", "3.8.11", "3.7.11", "3.6.14", "3.5.10"])]
    #[case("2.7", "2.7", false, vec!["2.7.18"])]
    #[case("3.11", "4.0", true, vec![])]
    fn selects_latest_release_per_minor_line(
        #[case] min: &str,
        #[case] max: &str,
        #[case] include_prereleases: bool,
        #[case] expected: Vec<&str>,
    ) {
        let result =
            select_latest_per_minor(MANIFEST, &criteria(min, max, include_prereleases)).unwrap();
        assert_eq!(result.versions, expected);
    }

    #[test]
    fn keeps_manifest_order_even_when_not_sorted() {
        let manifest = ["3.7.11", "3.9.6", "3.8.11", "3.9.7"];

        let result = select_latest_per_minor(manifest, &criteria("3.7", "3.9", false)).unwrap();

        assert_eq!(result.versions, vec!["3.7.11", "3.9.6", "3.8.11"]);
    }

    #[test]
    fn excludes_prerelease_but_keeps_later_final_of_same_line() {
        let manifest = ["3.13.0-alpha.1", "3.12.0", "3.12.0-rc.2"];

        let result = select_latest_per_minor(manifest, &criteria("3.12", "4.0", false)).unwrap();

        assert_eq!(result.versions, vec!["3.12.0"]);
    }

    #[test]
    fn keeps_original_spelling_of_pep440_versions() {
        let manifest = ["3.13.0b2", "3.12.4"];

        let result = select_latest_per_minor(manifest, &criteria("3.12", "4.0", true)).unwrap();

        assert_eq!(result.versions, vec!["3.13.0b2", "3.12.4"]);
    }

    #[test]
    fn rejects_malformed_entry() {
        let manifest = ["3.9.6", "not-a-version"];

        let result = select_latest_per_minor(manifest, &criteria("3.4", "3.9", false));

        assert!(matches!(
            result,
            Err(SelectionError::InvalidVersion { version, .. }) if version == "not-a-version"
        ));
    }

    #[test]
    fn empty_manifest_selects_nothing() {
        let result =
            select_latest_per_minor(Vec::<String>::new(), &criteria("3.4", "3.9", false)).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn selection_is_idempotent() {
        let criteria = criteria("3.5", "4.0", true);

        let first = select_latest_per_minor(MANIFEST, &criteria).unwrap();
        let second = select_latest_per_minor(MANIFEST, &criteria).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case("3.4", "3.9", false)]
    #[case("3.5", "4.0", true)]
    #[case("2.7", "3.6", true)]
    fn result_honors_selection_invariants(
        #[case] min: &str,
        #[case] max: &str,
        #[case] include_prereleases: bool,
    ) {
        let criteria = criteria(min, max, include_prereleases);
        let result = select_latest_per_minor(MANIFEST, &criteria).unwrap();

        let parsed: Vec<PythonVersion> = result
            .versions
            .iter()
            .map(|v| v.parse().unwrap())
            .collect();

        let mut lines: Vec<MinorLine> = parsed.iter().map(PythonVersion::minor_line).collect();
        let count = lines.len();
        lines.sort();
        lines.dedup();
        assert_eq!(lines.len(), count, "one entry per minor line");

        for version in &parsed {
            assert!(version.minor_line().within(&criteria.min, &criteria.max));
            assert!(MANIFEST.contains(&version.as_str()));
            if !include_prereleases {
                assert!(!version.is_prerelease());
            }
        }
    }
}
