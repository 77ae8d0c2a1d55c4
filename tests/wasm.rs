#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use reversi_engine::wasm::ReversiGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn initial_state_has_black_to_move() {
    let game = ReversiGame::new();
    let state = game.state().unwrap();

    assert_eq!(field(&state, "phase").as_string().as_deref(), Some("black_to_move"));
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
    assert!(game.result().unwrap().is_null());
}

#[wasm_bindgen_test]
fn submit_move_returns_new_state() {
    let mut game = ReversiGame::new();

    let state = game.submit_move(1, 2, 3).unwrap();

    assert_eq!(field(&state, "phase").as_string().as_deref(), Some("white_to_move"));
    assert_eq!(field(&state, "black_count").as_f64(), Some(4.0));
}

#[wasm_bindgen_test]
fn rejected_moves_throw_messages() {
    let mut game = ReversiGame::new();

    let err = game.submit_move(2, 2, 3).unwrap_err();
    assert!(err.as_string().unwrap().contains("out of turn"));

    let err = game.submit_move(0, 2, 3).unwrap_err();
    assert!(err.as_string().unwrap().contains("out of turn"));

    let err = game.submit_move(1, 0, 0).unwrap_err();
    assert!(err.as_string().unwrap().contains("captures nothing"));
}

#[wasm_bindgen_test]
fn legal_moves_are_listed_for_a_color() {
    let game = ReversiGame::new();

    let moves = js_sys::Array::from(&game.legal_moves(1).unwrap());
    assert_eq!(moves.length(), 4);

    let none = js_sys::Array::from(&game.legal_moves(0).unwrap());
    assert_eq!(none.length(), 0);
}
