mod config;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Args;
use session::ConsoleSession;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting console game: {:?}", args);

    let stdin = io::stdin();
    let echoed = stdin.is_terminal();
    let mut session = ConsoleSession::new(
        stdin.lock(),
        io::stdout().lock(),
        args.game.rng(),
        args.game.mode(),
    )
    .with_json(args.json)
    .with_echoed_input(echoed);

    session.run().context("console session failed")
}
