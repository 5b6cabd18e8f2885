//! Terminal-state classification.

use serde::{Deserialize, Serialize};

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::movegen::has_legal_move;
use crate::types::Color;

/// State of the game from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

/// In check, and no legal move gets out of it.
///
/// Every generated move already leaves the king safe, so "no move escapes
/// check" is the same as "no legal move".
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_in_check(board, color) && !has_legal_move(board, color)
}

/// Not in check, and no legal move.
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    !is_in_check(board, color) && !has_legal_move(board, color)
}

pub fn game_status(board: &Board, color: Color) -> GameStatus {
    let in_check = is_in_check(board, color);
    match (in_check, has_legal_move(board, color)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
