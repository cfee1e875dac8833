use std::{io, path::PathBuf};

use secret_recovery::RecoveryError;
use thiserror::Error;

pub type CliResult<T> = std::result::Result<T, CliError>;

/// Failures of the command-line front end.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
    #[error("cannot serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Recovery(#[from] RecoveryError),
}
