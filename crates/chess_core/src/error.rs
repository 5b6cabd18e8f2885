//! Errors raised at the boundary of the rules core.
//!
//! Illegal moves are not errors: `Board::apply_move` reports them as `false`.
//! These variants cover malformed input handed to the core by a shell.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("square ({row}, {col}) is outside the 8x8 board")]
    SquareOutOfRange { row: u8, col: u8 },

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid move notation: {0}")]
    InvalidMove(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
