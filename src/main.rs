//! fibscm - classify First Internet Backgammon Server output line by line.
//!
//! Reads a session from stdin, a capture file or a live server, prints the
//! cookie code of every line and a tally of the codes seen.

mod config;
mod error;
mod session;
mod tally;
mod telemetry;

use std::io::{LineWriter, Write};

use crate::config::{Config, LogConfig};
use tracing::{Instrument, error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (defaults when no path is given)
    let config_path = std::env::args().nth(1);
    let loaded = match config_path.as_deref() {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    };

    // Initialize tracing
    telemetry::init(
        loaded
            .as_ref()
            .map(|config| &config.log)
            .unwrap_or(&LogConfig::default()),
    );

    let config = loaded.map_err(|e| {
        error!(path = config_path.as_deref().unwrap_or("-"), error = %e, "Failed to load config");
        e
    })?;

    info!(
        source = %config.input.source,
        target = %config.input.describe(),
        "Starting fibscm"
    );

    let stdout = std::io::stdout();
    let mut out = LineWriter::new(stdout.lock());

    let span = telemetry::spans::session(config.input.source.as_str(), &config.input.describe());
    let tally = session::run(&config.input, config.output.echo, &mut out)
        .instrument(span)
        .await
        .map_err(|e| {
            error!(error = %e, "Session failed");
            e
        })?;

    if config.output.summary {
        tally.write(config.output.format, &mut out)?;
    }
    out.flush()?;

    info!(
        lines = tally.lines(),
        cookies = tally.distinct(),
        "Finished"
    );
    Ok(())
}
