use std::{fs, path::Path};

use secret_recovery::{RecoveryConfig, TestCase};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Read and parse one JSON test case record.
pub fn load_case(path: &Path) -> CliResult<TestCase> {
    let case: TestCase = load_json(path)?;
    debug!(path = %path.display(), k = case.k(), n = case.n(), "loaded test case");
    Ok(case)
}

/// Read tolerances from a JSON file; missing fields keep their defaults.
pub fn load_config(path: &Path) -> CliResult<RecoveryConfig> {
    load_json(path)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
