use std::{io::Write, path::Path};

use clap::ValueEnum;
use secret_recovery::CaseOutcome;
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// How case results are printed on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Test Case <i> - Secret: <s>` lines
    #[default]
    Human,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Serialize)]
struct CaseReport<'a> {
    case: usize,
    file: &'a Path,
    #[serde(flatten)]
    body: ReportBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ReportBody<'a> {
    Solved(&'a CaseOutcome),
    Failed { error: String },
}

/// Write the result of case number `case` (1-based).
pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    case: usize,
    file: &Path,
    outcome: &CaseOutcome,
) -> CliResult<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "Test Case {case} - Secret: {}", outcome.secret)?;
            if let Some(wrong) = &outcome.wrong_points {
                writeln!(
                    out,
                    "Test Case {case} - Wrong points: {}",
                    format_wrong_points(wrong)
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(
            out,
            &CaseReport {
                case,
                file,
                body: ReportBody::Solved(outcome),
            },
        ),
    }
}

/// Write a failed case. Human output goes to `err`, JSON output to `out` so
/// the stream stays one record per case.
pub fn write_failure<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    format: OutputFormat,
    case: usize,
    file: &Path,
    failure: &CliError,
) -> CliResult<()> {
    match format {
        OutputFormat::Human => {
            writeln!(err, "Test Case {case} - Error: {failure}")?;
            Ok(())
        }
        OutputFormat::Json => write_json(
            out,
            &CaseReport {
                case,
                file,
                body: ReportBody::Failed {
                    error: failure.to_string(),
                },
            },
        ),
    }
}

/// `"2, 5"`, or `"None"` when every point is consistent.
pub fn format_wrong_points(wrong: &[usize]) -> String {
    if wrong.is_empty() {
        return "None".to_string();
    }
    wrong
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> CliResult<()> {
    let line = serde_json::to_string(value).map_err(CliError::Serialize)?;
    writeln!(out, "{line}")?;
    Ok(())
}
