//! Command-line options and the interactive game loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use reversi_engine::{Game, Position, Winner};
use tracing::debug;

/// Play reversi in the terminal
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter directive, used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_filter: String,

    /// Print the legal moves for the side to move each turn
    #[arg(long)]
    pub hints: bool,
}

/// Runs the game until it finishes, stalls, or input ends.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
    hints: bool,
) -> Result<()> {
    loop {
        writeln!(output, "{}", game.board())?;

        if let Some(result) = game.result() {
            writeln!(output, "Finish")?;
            match result.winner {
                Winner::Draw => writeln!(output, "draw!")?,
                winner => writeln!(output, "{winner} wins!")?,
            }
            writeln!(
                output,
                "black: {}, white: {}",
                result.black_count, result.white_count
            )?;
            return Ok(());
        }

        let Some(color) = game.phase().to_move() else {
            bail!("game is not accepting moves in phase '{}'", game.phase());
        };

        if game.is_stalled() {
            writeln!(output, "{color} has no legal move; the game cannot continue")?;
            return Ok(());
        }

        writeln!(output, "{color} turn")?;
        if hints {
            let moves: Vec<String> = game
                .legal_moves(color)
                .iter()
                .map(Position::to_string)
                .collect();
            writeln!(output, "legal moves: {}", moves.join(" "))?;
        }

        let Some(position) = read_position(input, output)? else {
            debug!("input closed");
            return Ok(());
        };

        if let Err(err) = game.submit_move(color, position) {
            writeln!(output, "{err}")?;
        }
    }
}

/// Prompts for X then Y. `None` once input is exhausted.
fn read_position<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Option<Position>> {
    loop {
        let Some(x) = prompt(input, output, "X: ")? else {
            return Ok(None);
        };
        let Some(y) = prompt(input, output, "Y: ")? else {
            return Ok(None);
        };

        match (parse_coordinate(&x), parse_coordinate(&y)) {
            (Ok(x), Ok(y)) => return Ok(Some(Position::new(x, y))),
            (Err(err), _) | (_, Err(err)) => writeln!(output, "{err:#}")?,
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_coordinate(raw: &str) -> Result<i32> {
    let raw = raw.trim();
    raw.parse()
        .with_context(|| format!("'{raw}' is not a coordinate"))
}
