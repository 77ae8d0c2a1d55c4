use derive_more::Display;
use serde::Serialize;

/// One of the two sides.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[display("black")]
    Black,
    #[display("white")]
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl TryFrom<u8> for Color {
    type Error = u8;

    /// 1 = black, 2 = white. 0 is the empty sentinel and never names a side.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Black),
            2 => Ok(Self::White),
            other => Err(other),
        }
    }
}

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl CellState {
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl From<Color> for CellState {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// A board coordinate: `x` is the column, `y` the row, both zero-based.
///
/// Coordinates are signed so that off-board requests can be expressed and
/// rejected instead of wrapping.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[display("({x}, {y})")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A board square. Only the owning board can change its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    x: i32,
    y: i32,
    state: CellState,
}

impl Cell {
    pub(crate) fn new(x: i32, y: i32, state: CellState) -> Self {
        Self { x, y, state }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub(crate) fn update(&mut self, state: CellState) {
        self.state = state;
    }
}

/// Lifecycle of a game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[display("setup")]
    Setup,
    #[display("black to move")]
    BlackToMove,
    #[display("white to move")]
    WhiteToMove,
    #[display("finished")]
    Finished,
}

impl GamePhase {
    /// Phase in which `color` is the side to move.
    pub fn turn_of(color: Color) -> Self {
        match color {
            Color::Black => Self::BlackToMove,
            Color::White => Self::WhiteToMove,
        }
    }

    /// The side allowed to move, if any.
    pub fn to_move(self) -> Option<Color> {
        match self {
            Self::BlackToMove => Some(Color::Black),
            Self::WhiteToMove => Some(Color::White),
            Self::Setup | Self::Finished => None,
        }
    }

    /// Setup -> BlackToMove, turn phases -> any turn phase or Finished.
    pub fn can_advance_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Setup, Self::BlackToMove) => true,
            (Self::BlackToMove | Self::WhiteToMove, Self::Setup) => false,
            (Self::BlackToMove | Self::WhiteToMove, _) => true,
            _ => false,
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    #[display("black")]
    Black,
    #[display("white")]
    White,
    #[display("draw")]
    Draw,
}

/// Public game state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    /// Every cell in row-major order.
    pub cells: Vec<Cell>,
    pub phase: GamePhase,
    pub black_count: usize,
    pub white_count: usize,
    pub is_game_over: bool,
    /// Cells flipped by the last accepted move. Empty before the first move.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: usize,
    pub white_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent().opponent(), Color::Black);
    }

    #[test]
    fn empty_sentinel_is_not_a_color() {
        assert_eq!(Color::try_from(1), Ok(Color::Black));
        assert_eq!(Color::try_from(2), Ok(Color::White));
        assert_eq!(Color::try_from(0), Err(0));
        assert_eq!(Color::try_from(7), Err(7));
        assert_eq!(CellState::Empty as u8, 0);
        assert_eq!(CellState::Empty.color(), None);
    }

    #[test]
    fn only_turn_phases_have_a_mover() {
        assert_eq!(GamePhase::Setup.to_move(), None);
        assert_eq!(GamePhase::Finished.to_move(), None);
        assert_eq!(GamePhase::BlackToMove.to_move(), Some(Color::Black));
        assert_eq!(GamePhase::turn_of(Color::White), GamePhase::WhiteToMove);
    }

    #[test]
    fn finished_is_terminal() {
        for next in [
            GamePhase::Setup,
            GamePhase::BlackToMove,
            GamePhase::WhiteToMove,
            GamePhase::Finished,
        ] {
            assert!(!GamePhase::Finished.can_advance_to(next));
        }
        assert!(GamePhase::Setup.can_advance_to(GamePhase::BlackToMove));
        assert!(!GamePhase::Setup.can_advance_to(GamePhase::WhiteToMove));
        assert!(!GamePhase::Setup.can_advance_to(GamePhase::Finished));
        assert!(GamePhase::WhiteToMove.can_advance_to(GamePhase::WhiteToMove));
    }
}
