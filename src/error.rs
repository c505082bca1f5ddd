/// Errors returned by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReversiError {
    /// The target cell would capture nothing for the side to move.
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: usize, col: usize },

    #[error("malformed state string: {0}")]
    MalformedState(String),

    /// Caller contract violation, e.g. advancing the turn after the game finished.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

pub type Result<T> = std::result::Result<T, ReversiError>;
