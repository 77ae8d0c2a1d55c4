use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::direction::{DIRECTIONS, Direction};
use crate::error::{LayoutError, MoveError};
use crate::types::{Cell, CellState, Color, Position};

pub const BOARD_SIZE: usize = 8;

/// Rectangular grid of cells. Cells are created once at construction and
/// only their states change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the 8x8 starting board:
    /// (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white.
    pub fn new() -> Self {
        let mut rows = vec![vec![CellState::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mid = BOARD_SIZE / 2;
        rows[mid - 1][mid - 1] = CellState::White;
        rows[mid - 1][mid] = CellState::Black;
        rows[mid][mid - 1] = CellState::Black;
        rows[mid][mid] = CellState::White;

        Self::build(BOARD_SIZE, BOARD_SIZE, &rows)
    }

    /// Builds a board from rows of cell states, `rows[y][x]`.
    pub fn from_rows<R: AsRef<[CellState]>>(rows: &[R]) -> Result<Self, LayoutError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(LayoutError::Empty);
        }
        for (row, line) in rows.iter().enumerate() {
            let found = line.as_ref().len();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        Ok(Self::build(width, rows.len(), rows))
    }

    fn build<R: AsRef<[CellState]>>(width: usize, height: usize, rows: &[R]) -> Self {
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(y, line)| {
                line.as_ref()
                    .iter()
                    .enumerate()
                    .map(move |(x, &state)| Cell::new(x as i32, y as i32, state))
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Bounds-checked lookup. Off-board coordinates are a miss, never a fault.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Places a stone and flips every captured run.
    /// Returns the flipped positions. On error the board is unchanged.
    #[instrument(level = "debug", skip(self, position), fields(position = %position))]
    pub fn place_stone(
        &mut self,
        color: Color,
        position: Position,
    ) -> Result<Vec<Position>, MoveError> {
        let Position { x, y } = position;
        let idx = self
            .index(x, y)
            .ok_or(MoveError::InvalidPosition { x, y })?;
        if !self.cells[idx].state().is_empty() {
            return Err(MoveError::CellOccupied { x, y });
        }

        let flips = self.collect_flips(color, position);
        if flips.is_empty() {
            return Err(MoveError::NoCapture { x, y });
        }

        let state = CellState::from(color);
        self.cells[idx].update(state);
        for flipped in &flips {
            if let Some(i) = self.index(flipped.x, flipped.y) {
                self.cells[i].update(state);
            }
        }

        debug!(flipped = flips.len(), "stone placed");
        Ok(flips)
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.state().is_empty())
    }

    pub fn opponent_of(color: Color) -> Color {
        color.opponent()
    }

    pub fn count_discs(&self, color: Color) -> usize {
        let state = CellState::from(color);
        self.cells
            .iter()
            .filter(|cell| cell.state() == state)
            .count()
    }

    /// Every empty cell where `color` would capture, in row-major order.
    /// Does not modify the board.
    pub fn legal_moves(&self, color: Color) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|cell| cell.state().is_empty())
            .map(Cell::position)
            .filter(|&position| self.captures_any(color, position))
            .collect()
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        self.cells
            .iter()
            .filter(|cell| cell.state().is_empty())
            .any(|cell| self.captures_any(color, cell.position()))
    }

    fn captures_any(&self, color: Color, origin: Position) -> bool {
        DIRECTIONS
            .iter()
            .any(|&direction| self.capture_run(color, origin, direction).is_some())
    }

    fn collect_flips(&self, color: Color, origin: Position) -> Vec<Position> {
        DIRECTIONS
            .iter()
            .filter_map(|&direction| self.capture_run(color, origin, direction))
            .flatten()
            .collect()
    }

    /// Walks from `origin` along `direction` and returns the opponent run
    /// that `color` would capture there, or `None` when the run is empty,
    /// hits an empty cell, or runs off the board.
    fn capture_run(
        &self,
        color: Color,
        origin: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let mut run = Vec::new();
        let mut cursor = direction.step(origin);

        loop {
            let cell = self.cell_at(cursor.x, cursor.y)?;
            match cell.state().color() {
                Some(owner) if owner == color => {
                    return if run.is_empty() { None } else { Some(run) };
                }
                Some(_) => {
                    run.push(cursor);
                    cursor = direction.step(cursor);
                }
                None => return None,
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let col = usize::try_from(x).ok().filter(|&col| col < self.width)?;
        let row = usize::try_from(y).ok().filter(|&row| row < self.height)?;
        Some(row * self.width + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '_',
        CellState::Black => 'x',
        CellState::White => 'o',
    }
}

/// Column header, then one line per row prefixed with its index.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width {
            write!(f, " {x}")?;
        }
        writeln!(f)?;

        for (y, row) in self.rows().enumerate() {
            write!(f, "{y:>2} ")?;
            for cell in row {
                write!(f, " {}", symbol(cell.state()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses whitespace-separated rows of `_` (empty), `x` (black) and `o` (white).
impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split_whitespace()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| match symbol {
                        '_' => Ok(CellState::Empty),
                        'x' => Ok(CellState::Black),
                        'o' => Ok(CellState::White),
                        symbol => Err(LayoutError::UnknownSymbol { symbol, row, col }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(&rows)
    }
}
