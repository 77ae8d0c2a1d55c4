//! Error kinds reported by the board and the game.

use derive_more::{Display, Error};

use crate::types::GamePhase;

/// Why a move was rejected. Every variant is recoverable: the board and
/// phase are untouched and the caller may retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinate outside the board.
    #[display("position ({x}, {y}) is outside the board")]
    InvalidPosition { x: i32, y: i32 },
    /// Target cell already holds a disc.
    #[display("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },
    /// Placement would not flip any opponent run.
    #[display("placing at ({x}, {y}) captures nothing")]
    NoCapture { x: i32, y: i32 },
    /// The submitting side may not move in this phase.
    #[display("out of turn: game is in phase '{phase}'")]
    OutOfTurn { phase: GamePhase },
}

/// Why a board layout could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    /// No rows, or a first row without cells.
    #[display("board layout is empty")]
    Empty,
    /// Rows of different lengths.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Character other than `_`, `x` or `o` in a textual layout.
    #[display("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}
