//! CLI entrypoint for `deck-check`.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use deck_check::cli::Args;
use deck_check::error::DeckCheckError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match check(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "deck-check failed");
            // Nothing left to report to if stderr itself is gone.
            let _ignored = deck_check::report_failure(&err, &mut std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}

fn check(args: &Args) -> Result<(), DeckCheckError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    deck_check::run(args, &mut out)?;
    out.flush()?;
    Ok(())
}
