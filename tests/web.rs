#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use reversi_rules::wasm::WasmGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_reports_black_to_move() {
    let game = WasmGame::new();
    let state = game.game_state().unwrap();

    assert_eq!(field(&state, "turn").as_string().as_deref(), Some("Black"));
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(game.turn_display(), "Black");
    assert!(!game.is_finished());
}

#[wasm_bindgen_test]
fn play_returns_flipped_cells() {
    let mut game = WasmGame::new();
    let report = game.play(2, 3).unwrap();

    let flipped = js_sys::Array::from(&field(&report, "flipped"));
    assert_eq!(flipped.length(), 2);
    assert_eq!(field(&report, "passed").as_bool(), Some(false));
    assert_eq!(game.turn_display(), "White");
}

#[wasm_bindgen_test]
fn illegal_move_surfaces_as_js_error() {
    let mut game = WasmGame::new();
    let err = game.play(0, 0).unwrap_err();

    assert_eq!(err.as_string().as_deref(), Some("illegal move at (0, 0)"));
}

#[wasm_bindgen_test]
fn state_string_survives_reload() {
    let mut game = WasmGame::new();
    game.play(2, 3).unwrap();
    let saved = game.state_string();

    let mut restored = WasmGame::new();
    restored.load_state_string(&saved).unwrap();
    assert_eq!(restored.state_string(), saved);

    assert!(restored.load_state_string("B:bad").is_err());
    assert_eq!(restored.state_string(), saved);
}
