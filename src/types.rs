use serde::Serialize;

use crate::cell::DiscState;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cells whose highlight status changed during a turn switch, plus the
/// number of legal moves available to the side now on turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnChange {
    pub legal_moves: usize,
    pub changed: Vec<Position>,
}

/// Outcome of one accepted move as seen by a UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// Captured cells followed by the placed cell.
    pub flipped: Vec<Position>,
    /// Cells whose legal-move highlight changed, possibly with duplicates.
    pub changed: Vec<Position>,
    /// Contract:
    /// - `true` when the opponent had no legal move and the turn came back.
    /// - `false` otherwise.
    pub passed: bool,
    pub is_finished: bool,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cell states.
    pub board: Vec<DiscState>,
    /// `Empty` once the game is finished.
    pub turn: DiscState,
    pub black_count: usize,
    pub white_count: usize,
    pub is_finished: bool,
    pub legal_moves: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `Empty` means a draw.
    pub winner: DiscState,
    pub black_count: usize,
    pub white_count: usize,
}
