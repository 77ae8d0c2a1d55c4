use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Color, GamePhase, GameResult, GameState, Position, Winner};

/// A single game: one board plus the turn state machine driving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    phase: GamePhase,
    flipped: Vec<Position>,
}

impl Game {
    /// Starts a game on the standard 8x8 board with black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Starts a game on an arbitrary layout with black to move.
    pub fn from_board(board: Board) -> Self {
        let mut game = Self {
            board,
            phase: GamePhase::Setup,
            flipped: Vec::new(),
        };
        game.update_phase(GamePhase::BlackToMove);
        game
    }

    /// Places a stone for `color`.
    ///
    /// Board errors propagate unchanged. A rejected move leaves both the
    /// board and the phase as they were.
    #[instrument(level = "debug", skip(self, position), fields(position = %position, phase = %self.phase))]
    pub fn submit_move(&mut self, color: Color, position: Position) -> Result<(), MoveError> {
        if self.phase.to_move() != Some(color) {
            debug!("move rejected: out of turn");
            return Err(MoveError::OutOfTurn { phase: self.phase });
        }

        self.flipped = self
            .board
            .place_stone(color, position)
            .inspect_err(|err| debug!(%err, "move rejected"))?;

        if self.board.is_full() {
            self.update_phase(GamePhase::Finished);
            return Ok(());
        }

        let opponent = Board::opponent_of(color);
        if self.board.has_legal_move(opponent) {
            self.update_phase(GamePhase::turn_of(opponent));
        } else {
            debug!(%opponent, "opponent has no legal move, turn stays");
        }
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells flipped by the last accepted move.
    pub fn last_flipped(&self) -> &[Position] {
        &self.flipped
    }

    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        self.board.legal_moves(color)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn count_discs(&self, color: Color) -> usize {
        self.board.count_discs(color)
    }

    /// True when the side to move has no legal move.
    ///
    /// The phase is not changed by this condition; a caller driving the game
    /// decides what to do when neither side can play on a board that is not
    /// full.
    pub fn is_stalled(&self) -> bool {
        self.phase
            .to_move()
            .is_some_and(|color| !self.board.has_legal_move(color))
    }

    /// `None` until the game is finished.
    pub fn winner(&self) -> Option<Winner> {
        self.result().map(|result| result.winner)
    }

    /// `None` until the game is finished.
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != GamePhase::Finished {
            return None;
        }

        let black_count = self.board.count_discs(Color::Black);
        let white_count = self.board.count_discs(Color::White);
        let winner = if black_count > white_count {
            Winner::Black
        } else if white_count > black_count {
            Winner::White
        } else {
            Winner::Draw
        };

        Some(GameResult {
            winner,
            black_count,
            white_count,
        })
    }

    pub fn snapshot(&self) -> GameState {
        GameState {
            width: self.board.width(),
            height: self.board.height(),
            cells: self.board.cells().to_vec(),
            phase: self.phase,
            black_count: self.board.count_discs(Color::Black),
            white_count: self.board.count_discs(Color::White),
            is_game_over: self.phase == GamePhase::Finished,
            flipped: self.flipped.clone(),
        }
    }

    fn update_phase(&mut self, next: GamePhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal phase transition {} -> {}",
            self.phase,
            next
        );
        debug!(from = %self.phase, to = %next, "phase transition");
        self.phase = next;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
