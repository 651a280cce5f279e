//! Typed errors for the board contract.

use thiserror::Error;

/// Errors from applying a move to a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is outside a {dim}x{dim} board")]
    OutOfBounds { row: usize, col: usize, dim: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}
