//! Resolution of the `EOL` lower bound from the end-of-life feed

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::config::EOL_HORIZON_DAYS;
use crate::version::error::SelectionError;
use crate::version::semver::PythonVersion;
use crate::version::types::ReleaseRecord;

/// Find the oldest release cycle that is still supported.
///
/// Considers every cycle whose end of life is strictly after `today` and
/// strictly before `today + EOL_HORIZON_DAYS`, and returns the one that
/// reaches end of life soonest. On equal dates the first cycle in feed
/// order wins.
pub fn resolve_eol_floor(
    records: &[ReleaseRecord],
    today: NaiveDate,
) -> Result<PythonVersion, SelectionError> {
    let horizon = today + Days::new(EOL_HORIZON_DAYS);

    let mut soonest: Option<(&ReleaseRecord, NaiveDate)> = None;
    for record in records {
        let Some(eol) = record.eol.date() else {
            debug!("Skipping cycle {}: no end-of-life date", record.cycle);
            continue;
        };

        let deadline = soonest.map(|(_, date)| date).unwrap_or(horizon);
        if today < eol && eol < deadline {
            soonest = Some((record, eol));
        }
    }

    let Some((record, eol)) = soonest else {
        return Err(SelectionError::NoSupportedRelease {
            today: today.to_string(),
            horizon: horizon.to_string(),
        });
    };

    debug!("Resolved EOL bound to cycle {} (end of life {})", record.cycle, eol);
    record.cycle.parse()
}
