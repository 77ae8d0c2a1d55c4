use wasm_bindgen::prelude::*;

pub mod board;
pub mod direction;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{LayoutError, MoveError};
pub use game::Game;
pub use types::{Cell, CellState, Color, GamePhase, GameResult, GameState, Position, Winner};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
