use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::cell::{Cell, DiscState, char_to_state, state_to_char};
use crate::error::{ReversiError, Result};
use crate::types::{Position, TurnChange};

pub const ROWS: usize = 8;
pub const COLS: usize = 8;
pub const NUM_CELLS: usize = ROWS * COLS;
pub const STATE_SEPARATOR: char = ':';
/// Turn code, separator, then one code per cell.
pub const STATE_STRING_LEN: usize = NUM_CELLS + 2;

/// Read-only snapshot of cell states used while scanning capture runs.
pub type StateGrid = [[DiscState; COLS]; ROWS];

/// Reversi board: 8x8 cells plus the side on turn.
///
/// `turn == DiscState::Empty` marks a finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    turn: DiscState,
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white, black to move.
    pub fn new() -> Self {
        let mut board = Self {
            cells: std::array::from_fn(|row| std::array::from_fn(|col| Cell::new(row, col))),
            turn: DiscState::Black,
        };

        board.cells[ROWS / 2 - 1][COLS / 2 - 1].set_state(DiscState::White);
        board.cells[ROWS / 2 - 1][COLS / 2].set_state(DiscState::Black);
        board.cells[ROWS / 2][COLS / 2 - 1].set_state(DiscState::Black);
        board.cells[ROWS / 2][COLS / 2].set_state(DiscState::White);

        board.recompute_all();
        board
    }

    /// `(rows, cols)` of the grid. Pixel mapping is left to the renderer.
    pub const fn grid_dimensions() -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Side to move, or `Empty` once the game is finished.
    pub fn turn(&self) -> DiscState {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.turn == DiscState::Empty
    }

    /// Marks the game finished. No cell is a legal move afterwards.
    pub fn set_finished(&mut self) {
        self.turn = DiscState::Empty;
        self.recompute_all();
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn states(&self) -> StateGrid {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cells[row][col].state()))
    }

    /// Cells where the side on turn may place a disc.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.is_legal_move())
            .map(Cell::position)
            .collect()
    }

    /// Places a disc for `mover` and flips its capture set.
    ///
    /// Returns the flipped cells followed by the placed cell. Capture sets of
    /// the other cells are stale until [`Board::advance_turn`] runs.
    pub fn apply_move(&mut self, row: usize, col: usize, mover: DiscState) -> Result<Vec<Position>> {
        if self.is_finished() {
            return Err(ReversiError::InvalidState("game is already finished"));
        }
        if row >= ROWS || col >= COLS || mover != self.turn {
            debug!(row, col, ?mover, turn = ?self.turn, "move rejected");
            return Err(ReversiError::IllegalMove { row, col });
        }

        let mut changed = self.cells[row][col].capture_set().to_vec();
        if changed.is_empty() {
            debug!(row, col, ?mover, "move captures nothing");
            return Err(ReversiError::IllegalMove { row, col });
        }

        for pos in &changed {
            self.cells[pos.row][pos.col].set_state(mover);
        }
        self.cells[row][col].set_state(mover);
        changed.push(Position::new(row, col));

        Ok(changed)
    }

    /// Hands the turn to the other side and recomputes every capture set.
    ///
    /// A zero `legal_moves` count means the new side must pass; deciding
    /// whether that ends the game is up to the caller.
    pub fn advance_turn(&mut self) -> Result<TurnChange> {
        if self.is_finished() {
            return Err(ReversiError::InvalidState(
                "cannot advance the turn of a finished game",
            ));
        }

        self.turn = self.turn.opponent();
        let change = self.recompute_all();
        debug!(turn = ?self.turn, legal_moves = change.legal_moves, "turn advanced");
        Ok(change)
    }

    pub fn count(&self, state: DiscState) -> usize {
        self.cells().filter(|cell| cell.state() == state).count()
    }

    pub fn count_empty(&self) -> usize {
        self.count(DiscState::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Side with more discs, `Empty` on a tie.
    pub fn winner(&self) -> DiscState {
        let black = self.count(DiscState::Black);
        let white = self.count(DiscState::White);
        if black > white {
            DiscState::Black
        } else if white > black {
            DiscState::White
        } else {
            DiscState::Empty
        }
    }

    pub fn turn_display(&self) -> &'static str {
        match self.turn {
            DiscState::Black => "Black",
            DiscState::White => "White",
            DiscState::Empty => "-",
        }
    }

    /// `<turn>:<64 cell codes, row-major>`.
    pub fn state_string(&self) -> String {
        let mut s = String::with_capacity(STATE_STRING_LEN);
        s.push(state_to_char(self.turn));
        s.push(STATE_SEPARATOR);
        s.extend(self.cells().map(Cell::state_char));
        debug!(state = %s, "board serialized");
        s
    }

    /// Restores turn and cells from a state string.
    ///
    /// An empty string leaves the board unchanged. Malformed input is
    /// rejected before anything is written.
    pub fn load_from_state_string(&mut self, s: &str) -> Result<()> {
        if s.is_empty() {
            return Ok(());
        }

        let (turn, grid) = parse_state_string(s)?;

        self.turn = turn;
        for (row, states) in grid.iter().enumerate() {
            for (col, &state) in states.iter().enumerate() {
                self.cells[row][col].set_state(state);
            }
        }
        self.recompute_all();
        debug!(turn = ?self.turn, "board loaded from state string");

        Ok(())
    }

    fn recompute_all(&mut self) -> TurnChange {
        let grid = self.states();
        let turn = self.turn;
        let mut change = TurnChange::default();

        for cell in self.cells.iter_mut().flatten() {
            if cell.is_legal_move() {
                change.changed.push(cell.position());
            }

            cell.recompute_capture_set(&grid, turn);

            if cell.is_legal_move() {
                change.legal_moves += 1;
                change.changed.push(cell.position());
            }
        }

        change
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state_string())
    }
}

impl FromStr for Board {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ReversiError::MalformedState("empty state string".to_string()));
        }
        let mut board = Self::new();
        board.load_from_state_string(s)?;
        Ok(board)
    }
}

fn parse_state_string(s: &str) -> Result<(DiscState, StateGrid)> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != STATE_STRING_LEN {
        return Err(ReversiError::MalformedState(format!(
            "expected {STATE_STRING_LEN} characters, got {}",
            chars.len()
        )));
    }
    if chars[1] != STATE_SEPARATOR {
        return Err(ReversiError::MalformedState(format!(
            "expected {STATE_SEPARATOR:?} at index 1, got {:?}",
            chars[1]
        )));
    }

    let turn = char_to_state(chars[0])?;
    let mut grid = [[DiscState::Empty; COLS]; ROWS];
    for (idx, &c) in chars[2..].iter().enumerate() {
        grid[idx / COLS][idx % COLS] = char_to_state(c)?;
    }

    Ok((turn, grid))
}
