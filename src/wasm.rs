use wasm_bindgen::prelude::*;

use crate::game::Game;

/// JavaScript handle to a running game.
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { inner: Game::new() }
    }

    /// Restores a saved game; an empty string starts a new one.
    #[wasm_bindgen(js_name = fromStateString)]
    pub fn from_state_string(s: &str) -> Result<WasmGame, JsValue> {
        let inner = Game::from_state_string(s).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    pub fn play(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let report = self.inner.play(row, col).map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    pub fn pass(&mut self) -> Result<JsValue, JsValue> {
        let change = self.inner.pass().map_err(to_js_error)?;
        Ok(serde_wasm_bindgen::to_value(&change)?)
    }

    pub fn finish(&mut self) {
        self.inner.finish();
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }

    #[wasm_bindgen(js_name = turnDisplay)]
    pub fn turn_display(&self) -> String {
        self.inner.board().turn_display().to_string()
    }

    #[wasm_bindgen(js_name = stateString)]
    pub fn state_string(&self) -> String {
        self.inner.state_string()
    }

    #[wasm_bindgen(js_name = loadStateString)]
    pub fn load_state_string(&mut self, s: &str) -> Result<(), JsValue> {
        self.inner.load(s).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = gameState)]
    pub fn game_state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_state())?)
    }

    #[wasm_bindgen(js_name = gameResult)]
    pub fn game_result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.to_game_result())?)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: crate::error::ReversiError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
