//! JavaScript binding for browser front ends.

use wasm_bindgen::prelude::*;

use crate::error::MoveError;
use crate::game::Game;
use crate::types::{Color, Position};

/// A game handle owned by the JS side.
#[wasm_bindgen]
pub struct ReversiGame {
    game: Game,
}

#[wasm_bindgen]
impl ReversiGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Submits a move. `color` is 1 for black and 2 for white.
    /// Returns the new state, or throws the rejection message.
    pub fn submit_move(&mut self, color: u8, x: i32, y: i32) -> Result<JsValue, JsValue> {
        let color = self.color(color)?;
        self.game
            .submit_move(color, Position::new(x, y))
            .map_err(to_js_error)?;
        self.state()
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.snapshot())?)
    }

    pub fn legal_moves(&self, color: u8) -> Result<JsValue, JsValue> {
        let moves = match Color::try_from(color) {
            Ok(color) => self.game.legal_moves(color),
            Err(_) => Vec::new(),
        };
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// `null` until the game is finished.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.game.result() {
            Some(result) => Ok(serde_wasm_bindgen::to_value(&result)?),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn is_stalled(&self) -> bool {
        self.game.is_stalled()
    }
}

impl ReversiGame {
    /// The empty sentinel and unknown values never hold the turn.
    fn color(&self, value: u8) -> Result<Color, JsValue> {
        Color::try_from(value).map_err(|_| {
            to_js_error(MoveError::OutOfTurn {
                phase: self.game.phase(),
            })
        })
    }
}

impl Default for ReversiGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: MoveError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
