use tracing::{debug, info};

use crate::board::Board;
use crate::cell::DiscState;
use crate::error::Result;
use crate::types::{GameResult, GameState, MoveReport, Position, TurnChange};

/// Turn sequencing on top of [`Board`]: a move is applied and the turn
/// advanced in one call, a side without legal moves passes, and the game
/// ends when neither side can move or the board is full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Resumes a saved game. An empty string yields a fresh game.
    pub fn from_state_string(s: &str) -> Result<Self> {
        let mut game = Self::new();
        game.load(s)?;
        Ok(game)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> DiscState {
        self.board.turn()
    }

    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    /// Plays for the side on turn at `(row, col)`.
    pub fn play(&mut self, row: usize, col: usize) -> Result<MoveReport> {
        let mover = self.board.turn();
        let flipped = self.board.apply_move(row, col, mover)?;
        let mut change = self.board.advance_turn()?;
        let mut passed = false;

        if self.board.is_full() {
            self.finish();
        } else if change.legal_moves == 0 {
            passed = true;
            let again = self.pass()?;
            change.changed.extend(again.changed);
            if again.legal_moves == 0 {
                self.finish();
            }
        }

        Ok(MoveReport {
            flipped,
            changed: change.changed,
            passed,
            is_finished: self.board.is_finished(),
        })
    }

    /// Skips the side on turn.
    pub fn pass(&mut self) -> Result<TurnChange> {
        info!(side = ?self.board.turn(), "no legal move, passing");
        self.board.advance_turn()
    }

    pub fn finish(&mut self) {
        info!(winner = ?self.board.winner(), "game over");
        self.board.set_finished();
    }

    pub fn has_legal_moves_for_current(&self) -> bool {
        self.board.cells().any(|cell| cell.is_legal_move())
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves()
    }

    pub fn state_string(&self) -> String {
        self.board.state_string()
    }

    /// Replaces the board with a saved state. Malformed input leaves the game as it was.
    pub fn load(&mut self, s: &str) -> Result<()> {
        self.board.load_from_state_string(s)?;
        debug!(turn = ?self.board.turn(), "game restored");
        Ok(())
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.cells().map(|cell| cell.state()).collect(),
            turn: self.board.turn(),
            black_count: self.board.count(DiscState::Black),
            white_count: self.board.count(DiscState::White),
            is_finished: self.board.is_finished(),
            legal_moves: self.board.legal_moves(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            winner: self.board.winner(),
            black_count: self.board.count(DiscState::Black),
            white_count: self.board.count(DiscState::White),
        }
    }
}
