//! Command-line front end: reads JSON test case files, recovers each secret
//! and reports inconsistent points.

pub mod error;
pub mod input;
pub mod report;

use std::{io::Write, path::PathBuf};

use clap::{ArgAction, Parser};
use secret_recovery::{Recovery, RecoveryConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    error::{CliError, CliResult},
    report::OutputFormat,
};

#[derive(Parser, Debug)]
#[command(
    name = "recover-secret",
    version,
    about = "Recover a polynomial's constant term from base-encoded samples"
)]
pub struct Cli {
    /// Test case files, processed in the order given
    #[arg(default_values = ["testcase1.json", "testcase2.json"])]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Human
    )]
    pub format: OutputFormat,

    /// JSON file with `elimination_tolerance` and/or `match_tolerance`
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Maximum deviation for a point to count as on the curve
    #[arg(long = "match-tolerance")]
    pub match_tolerance: Option<f64>,

    /// Pivots below this magnitude make a system singular
    #[arg(long = "elimination-tolerance")]
    pub elimination_tolerance: Option<f64>,

    /// Stop at the first failing case
    #[arg(long = "fail-fast", action = ArgAction::SetTrue)]
    pub fail_fast: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Defaults, then the config file, then individual flags.
    pub fn recovery_config(&self) -> CliResult<RecoveryConfig> {
        let mut config = match &self.config {
            Some(path) => input::load_config(path)?,
            None => RecoveryConfig::default(),
        };
        if let Some(tolerance) = self.match_tolerance {
            config = config.with_match_tolerance(tolerance);
        }
        if let Some(tolerance) = self.elimination_tolerance {
            config = config.with_elimination_tolerance(tolerance);
        }
        Ok(config)
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` takes precedence over the
/// verbosity count.
pub fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run every case file. Returns `Ok(true)` when all cases succeeded.
///
/// Per-case failures are reported and, unless `fail_fast` is set, the next
/// case still runs. Only configuration and output errors abort the run.
pub fn run<W: Write, E: Write>(
    cli: &Cli,
    out: &mut W,
    err: &mut E,
) -> CliResult<bool> {
    let recovery = Recovery::new(cli.recovery_config()?);
    info!(config = ?recovery.config(), files = cli.files.len(), "starting run");

    let mut all_ok = true;
    for (idx, path) in cli.files.iter().enumerate() {
        let case_number = idx + 1;
        let result = input::load_case(path)
            .and_then(|case| recovery.run_case(&case).map_err(CliError::from));

        match result {
            Ok(outcome) => {
                report::write_outcome(
                    out,
                    cli.format,
                    case_number,
                    path,
                    &outcome,
                )?;
            }
            Err(failure) => {
                all_ok = false;
                warn!(
                    case = case_number,
                    path = %path.display(),
                    %failure,
                    "case failed"
                );
                report::write_failure(
                    out,
                    err,
                    cli.format,
                    case_number,
                    path,
                    &failure,
                )?;
                if cli.fail_fast {
                    break;
                }
            }
        }
    }
    Ok(all_ok)
}
