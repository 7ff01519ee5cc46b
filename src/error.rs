use thiserror::Error;

use crate::puzzle::Move;
use crate::search::NoSolution;

/// Errors raised by puzzle construction, move application and agent selection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The move is not in `legal_moves()` for the state it was applied to.
    #[error("illegal move {mv} with the blank at ({row}, {col})")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// Row of the blank when the move was attempted.
        row: usize,
        /// Column of the blank when the move was attempted.
        col: usize,
    },

    #[error("agent index {0} is out of range, expected a value between 0 and 8")]
    InvalidAgentIndex(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error(transparent)]
    NoSolution(#[from] NoSolution),
}

/// Construction parameters outside of the puzzle's domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("size must be at least 2, got {0}")]
    SizeTooSmall(usize),

    #[error("there are {count} stored puzzles, got index {index}")]
    FixtureOutOfRange { index: usize, count: usize },

    #[error("size must be 3 to use the stored puzzles, got {0}")]
    FixtureSize(usize),

    #[error("the number of shuffle moves must not be negative, got {0}")]
    NegativeMoves(i64),

    #[error("expected {expected} numbers for a board of side {size}, got {actual}")]
    LayoutLength {
        size: usize,
        expected: usize,
        actual: usize,
    },

    #[error("layout is not a permutation of 0..{cells}: {value} is repeated or out of range")]
    LayoutValue { value: u32, cells: usize },
}
