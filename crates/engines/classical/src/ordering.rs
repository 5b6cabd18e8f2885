//! Move ordering heuristic.
//!
//! Alpha-beta prunes most when the best move is tried first, so candidates
//! are sorted by a cheap guess: captures of valuable pieces, moves into the
//! center, then checks.

use std::cmp::Reverse;

use chess_core::{Board, Color, Move, is_in_check};

use crate::config::EvalWeights;
use crate::eval::{is_center, material};

const CAPTURE_FACTOR: i32 = 10;
const CENTER_BONUS: i32 = 5;
const CHECK_BONUS: i32 = 30;

/// Heuristic priority of `mv` for `color`. Higher is searched first.
///
/// `board` is used as scratch to test whether the move gives check and is
/// restored before returning.
pub fn move_priority(board: &mut Board, mv: Move, color: Color, weights: &EvalWeights) -> i32 {
    let mut score = 0;

    if let Some(victim) = board.piece_at(mv.to) {
        score += CAPTURE_FACTOR * material(victim.kind, weights);
    }
    if is_center(mv.to) {
        score += CENTER_BONUS;
    }

    let undo = board.make_move(mv);
    if is_in_check(board, color.other()) {
        score += CHECK_BONUS;
    }
    board.unmake_move(mv, undo);

    score
}

/// Sorts `moves` by descending priority. Ties keep generation order.
pub fn order_moves(board: &mut Board, moves: &mut Vec<Move>, color: Color, weights: &EvalWeights) {
    let mut scored: Vec<(i32, Move)> = moves
        .iter()
        .map(|&mv| (move_priority(board, mv, color, weights), mv))
        .collect();
    scored.sort_by_key(|&(score, _)| Reverse(score));

    moves.clear();
    moves.extend(scored.into_iter().map(|(_, mv)| mv));
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
