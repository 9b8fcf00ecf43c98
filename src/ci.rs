//! Emission of the selected versions to stdout and the CI runner files

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{CiTargets, ENV_KEY, OUTPUT_KEY};
use crate::version::types::SelectionResult;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Failed to serialize versions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Write the result as a JSON array to `stdout`, to `GITHUB_ENV` as
/// `LATEST_PYTHON_VERSIONS` and to `GITHUB_OUTPUT` as `latest-python-versions`.
///
/// Both target files are opened before either is written, so a target that
/// cannot be opened leaves the other untouched. Missing targets are skipped.
pub fn emit<W: Write>(
    result: &SelectionResult,
    targets: &CiTargets,
    stdout: &mut W,
) -> Result<(), EmitError> {
    let json = result.to_json()?;

    let env_file = open_target(targets.env_file.as_deref(), "GITHUB_ENV", ENV_KEY)?;
    let output_file = open_target(targets.output_file.as_deref(), "GITHUB_OUTPUT", OUTPUT_KEY)?;

    if let Some(target) = env_file {
        target.append(ENV_KEY, &json)?;
    }
    if let Some(target) = output_file {
        target.append(OUTPUT_KEY, &json)?;
    }

    writeln!(stdout, "{}", json).map_err(EmitError::Stdout)?;
    stdout.flush().map_err(EmitError::Stdout)
}

/// A CI file opened for appending
struct Target<'a> {
    path: &'a Path,
    file: File,
}

impl Target<'_> {
    /// Append `key=value` as a single line
    fn append(mut self, key: &str, value: &str) -> Result<(), EmitError> {
        writeln!(self.file, "{}={}", key, value).map_err(|source| io_error(self.path, source))?;

        info!("Wrote {} to {}", key, self.path.display());
        Ok(())
    }
}

/// Open `path` for appending, creating it if needed
fn open_target<'a>(
    path: Option<&'a Path>,
    variable: &str,
    key: &str,
) -> Result<Option<Target<'a>>, EmitError> {
    let Some(path) = path else {
        debug!("{} is not set, skipping {}", variable, key);
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| io_error(path, source))?;
    Ok(Some(Target { path, file }))
}

fn io_error(path: &Path, source: io::Error) -> EmitError {
    EmitError::Io {
        path: path.to_path_buf(),
        source,
    }
}
