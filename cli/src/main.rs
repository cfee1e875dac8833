use std::{io, process::ExitCode};

use clap::Parser;
use secret_recovery_cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let stdout = io::stdout();
    let stderr = io::stderr();
    match run(&cli, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("recover-secret: {err}");
            ExitCode::from(2)
        }
    }
}
