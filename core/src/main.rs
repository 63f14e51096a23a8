use std::io;

use anyhow::Context;
use workout_tracker_core::cli;

fn main() -> anyhow::Result<()> {
    // Logg til stderr (stdout er forbeholdt rapportlinjene). Filter fra RUST_LOG, default warn.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();

    let packages = cli::sample_packages();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run(&packages, &mut out).context("workout report aborted")?;
    Ok(())
}
