//! Attack detection on the mailbox grid.
//!
//! Rather than asking every enemy piece whether it reaches the target, the
//! scan starts from the target square and looks outward along each attack
//! pattern for a piece of the right kind.

use crate::board::Board;
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if `c` has a king on the board and an enemy piece attacks it.
/// A missing king is never in check.
pub fn is_in_check(board: &Board, c: Color) -> bool {
    match board.king_square(c) {
        Some(k) => is_square_attacked(board, k, c.other()),
        None => false,
    }
}

/// True if any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let holds = |s: Square, kinds: &[PieceKind]| {
        board
            .piece_at(s)
            .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
    };

    // A pawn of `by` attacks one row toward its own direction of travel, so
    // look one row back against that direction.
    let back = -by.forward();
    for dc in [-1, 1] {
        if let Some(s) = target.offset(back, dc)
            && holds(s, &[PieceKind::Pawn])
        {
            return true;
        }
    }

    for (dr, dc) in KNIGHT_OFFSETS {
        if let Some(s) = target.offset(dr, dc)
            && holds(s, &[PieceKind::Knight])
        {
            return true;
        }
    }

    for (dr, dc) in KING_OFFSETS {
        if let Some(s) = target.offset(dr, dc)
            && holds(s, &[PieceKind::King])
        {
            return true;
        }
    }

    slider_hits(board, target, &DIAGONALS, |s| {
        holds(s, &[PieceKind::Bishop, PieceKind::Queen])
    }) || slider_hits(board, target, &ORTHOGONALS, |s| {
        holds(s, &[PieceKind::Rook, PieceKind::Queen])
    })
}

/// Walks each ray from `target` to the first occupied square and reports
/// whether `is_attacker` accepts it. Squares behind a blocker are not seen.
fn slider_hits(
    board: &Board,
    target: Square,
    dirs: &[(i8, i8)],
    is_attacker: impl Fn(Square) -> bool,
) -> bool {
    for &(dr, dc) in dirs {
        let mut cur = target.offset(dr, dc);
        while let Some(s) = cur {
            if !board.is_empty(s) {
                if is_attacker(s) {
                    return true;
                }
                break;
            }
            cur = s.offset(dr, dc);
        }
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
