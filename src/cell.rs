use std::fmt;

use serde::Serialize;

use crate::board::{COLS, ROWS, StateGrid};
use crate::error::{ReversiError, Result};
use crate::types::Position;

pub const EMPTY_CODE: char = 'N';
pub const BLACK_CODE: char = 'B';
pub const WHITE_CODE: char = 'W';

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Occupancy of a single cell.
///
/// `Empty` carries two more meanings outside of cells: as a board turn it
/// marks a finished game (nobody moves), and as a winner it marks a draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DiscState {
    #[default]
    Empty,
    Black,
    White,
}

impl DiscState {
    /// The other color. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
            Self::Empty => Self::Empty,
        }
    }

    pub fn to_char(self) -> char {
        state_to_char(self)
    }
}

impl fmt::Display for DiscState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for DiscState {
    type Error = ReversiError;

    fn try_from(c: char) -> Result<Self> {
        char_to_state(c)
    }
}

pub fn state_to_char(state: DiscState) -> char {
    match state {
        DiscState::Empty => EMPTY_CODE,
        DiscState::Black => BLACK_CODE,
        DiscState::White => WHITE_CODE,
    }
}

pub fn char_to_state(c: char) -> Result<DiscState> {
    match c {
        EMPTY_CODE => Ok(DiscState::Empty),
        BLACK_CODE => Ok(DiscState::Black),
        WHITE_CODE => Ok(DiscState::White),
        other => Err(ReversiError::MalformedState(format!(
            "unrecognized cell code {other:?}"
        ))),
    }
}

/// One grid position: its occupancy and the discs a placement here would
/// flip for the side currently on turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    state: DiscState,
    capture_set: Vec<Position>,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            state: DiscState::Empty,
            capture_set: Vec::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn state(&self) -> DiscState {
        self.state
    }

    pub fn set_state(&mut self, state: DiscState) {
        self.state = state;
    }

    /// Coordinates flipped if the side on turn placed a disc here.
    /// Empty when the move would be illegal.
    pub fn capture_set(&self) -> &[Position] {
        &self.capture_set
    }

    pub fn is_legal_move(&self) -> bool {
        !self.capture_set.is_empty()
    }

    pub fn state_char(&self) -> char {
        state_to_char(self.state)
    }

    /// Rebuilds the capture set against `grid` for a placement by `acting_turn`.
    ///
    /// Occupied cells and an `Empty` acting turn (finished game) never capture.
    pub fn recompute_capture_set(&mut self, grid: &StateGrid, acting_turn: DiscState) {
        self.capture_set.clear();
        if self.state != DiscState::Empty || acting_turn == DiscState::Empty {
            return;
        }

        let opponent = acting_turn.opponent();
        let mut line = Vec::new();

        for (dr, dc) in DIRECTIONS {
            line.clear();
            let mut r = self.row as isize + dr;
            let mut c = self.col as isize + dc;

            while in_bounds(r, c) {
                let square = grid[r as usize][c as usize];
                if square == opponent {
                    line.push(Position::new(r as usize, c as usize));
                } else {
                    if square == acting_turn {
                        self.capture_set.extend_from_slice(&line);
                    }
                    break;
                }

                r += dr;
                c += dc;
            }
        }
    }
}

fn in_bounds(row: isize, col: isize) -> bool {
    (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid() -> StateGrid {
        [[DiscState::Empty; COLS]; ROWS]
    }

    fn captures(grid: &StateGrid, row: usize, col: usize, turn: DiscState) -> Vec<Position> {
        let mut cell = Cell::new(row, col);
        cell.set_state(grid[row][col]);
        cell.recompute_capture_set(grid, turn);
        let mut out = cell.capture_set().to_vec();
        out.sort();
        out
    }

    #[test]
    fn codes_map_both_ways() {
        for state in [DiscState::Empty, DiscState::Black, DiscState::White] {
            assert_eq!(char_to_state(state_to_char(state)).unwrap(), state);
        }
        assert_eq!(state_to_char(DiscState::Empty), 'N');
        assert_eq!(DiscState::try_from('W').unwrap(), DiscState::White);
        assert_eq!(DiscState::Black.to_string(), "B");
    }

    #[test]
    fn unknown_code_is_malformed() {
        let err = char_to_state('x').unwrap_err();
        assert!(matches!(err, ReversiError::MalformedState(_)));
        assert!(char_to_state('b').is_err());
    }

    #[test]
    fn opponent_swaps_colors_and_keeps_empty() {
        assert_eq!(DiscState::Black.opponent(), DiscState::White);
        assert_eq!(DiscState::White.opponent(), DiscState::Black);
        assert_eq!(DiscState::Empty.opponent(), DiscState::Empty);
    }

    #[test]
    fn bounded_run_is_captured() {
        let mut grid = empty_grid();
        grid[0][1] = DiscState::White;
        grid[0][2] = DiscState::White;
        grid[0][3] = DiscState::Black;

        assert_eq!(
            captures(&grid, 0, 0, DiscState::Black),
            vec![Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn run_ending_at_edge_or_gap_is_discarded() {
        let mut grid = empty_grid();
        // runs off the east edge
        grid[0][1] = DiscState::White;
        grid[0][7] = DiscState::White;
        for c in 2..7 {
            grid[0][c] = DiscState::White;
        }
        // run broken by an empty gap before the black bound
        grid[1][0] = DiscState::White;
        grid[3][0] = DiscState::Black;

        assert!(captures(&grid, 0, 0, DiscState::Black).is_empty());
    }

    #[test]
    fn adjacent_own_disc_contributes_nothing() {
        let mut grid = empty_grid();
        grid[4][5] = DiscState::Black;
        grid[4][6] = DiscState::White;
        grid[4][7] = DiscState::Black;

        assert!(captures(&grid, 4, 4, DiscState::Black).is_empty());
    }

    #[test]
    fn runs_from_several_directions_are_united() {
        let mut grid = empty_grid();
        grid[3][3] = DiscState::White;
        grid[2][2] = DiscState::Black;
        grid[4][3] = DiscState::White;
        grid[5][3] = DiscState::White;
        grid[6][3] = DiscState::Black;
        grid[3][4] = DiscState::White;

        assert_eq!(
            captures(&grid, 4, 4, DiscState::Black),
            vec![Position::new(3, 3)]
        );

        let mut grid = empty_grid();
        grid[2][2] = DiscState::Black;
        grid[3][3] = DiscState::White;
        grid[4][5] = DiscState::White;
        grid[4][6] = DiscState::Black;
        assert_eq!(
            captures(&grid, 4, 4, DiscState::Black),
            vec![Position::new(3, 3), Position::new(4, 5)]
        );
    }

    #[test]
    fn occupied_or_finished_never_captures() {
        let mut grid = empty_grid();
        grid[0][0] = DiscState::Black;
        grid[0][1] = DiscState::White;
        grid[0][2] = DiscState::Black;

        let mut cell = Cell::new(0, 2);
        cell.set_state(DiscState::Black);
        cell.recompute_capture_set(&grid, DiscState::White);
        assert!(cell.capture_set().is_empty());

        grid[0][2] = DiscState::Empty;
        assert!(captures(&grid, 0, 2, DiscState::Empty).is_empty());
        assert_eq!(
            captures(&grid, 0, 2, DiscState::Black),
            vec![Position::new(0, 1)]
        );
    }
}
