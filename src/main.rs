//! Terminal front end: one shared keyboard, black and white alternate.

mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use reversi_engine::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(hints = cli.hints, "starting game");

    let mut game = Game::new();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    cli::play(&mut game, &mut input, &mut output, cli.hints)
}
