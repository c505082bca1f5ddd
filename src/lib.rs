use wasm_bindgen::prelude::*;

pub mod board;
pub mod cell;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use cell::{Cell, DiscState};
pub use error::{ReversiError, Result};
pub use game::Game;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
