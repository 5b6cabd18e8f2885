//! Move legality: per-piece geometry followed by the own-king safety filter.

use crate::attacks::{is_in_check, is_square_attacked};
use crate::board::Board;
use crate::types::*;

/// The authoritative legality test.
///
/// `start` must hold a piece of `color`; the move must satisfy that piece's
/// movement rule and must not leave `color`'s king in check.
pub fn is_legal_move(board: &Board, start: Square, color: Color, end: Square) -> bool {
    if !is_geometric_move(board, start, color, end) {
        return false;
    }
    let mut scratch = board.scratch_copy();
    leaves_king_safe(&mut scratch, Move::new(start, end), color)
}

/// Same as [`is_legal_move`], but plays the safety probe on `board` itself
/// and restores it. Used by the generator to avoid one copy per candidate.
pub(crate) fn is_legal_move_in_place(
    board: &mut Board,
    start: Square,
    color: Color,
    end: Square,
) -> bool {
    is_geometric_move(board, start, color, end)
        && leaves_king_safe(board, Move::new(start, end), color)
}

fn leaves_king_safe(board: &mut Board, mv: Move, color: Color) -> bool {
    let undo = board.make_move(mv);
    let safe = !is_in_check(board, color);
    board.unmake_move(mv, undo);
    safe
}

/// Movement rule of the piece on `start`, ignoring own-king safety.
pub fn is_geometric_move(board: &Board, start: Square, color: Color, end: Square) -> bool {
    if start == end {
        return false;
    }
    let Some(pc) = board.piece_at(start) else {
        return false;
    };
    if pc.color != color {
        return false;
    }
    match pc.kind {
        PieceKind::Pawn => pawn_move(board, start, end, color),
        PieceKind::Knight => knight_move(board, start, end, color),
        PieceKind::Bishop => bishop_move(board, start, end, color),
        PieceKind::Rook => rook_move(board, start, end, color),
        PieceKind::Queen => {
            rook_move(board, start, end, color) || bishop_move(board, start, end, color)
        }
        PieceKind::King => {
            king_step(board, start, end, color) || castle_move(board, start, end, color)
        }
    }
}

fn deltas(start: Square, end: Square) -> (i8, i8) {
    (
        end.row() as i8 - start.row() as i8,
        end.col() as i8 - start.col() as i8,
    )
}

/// Empty or holding an enemy piece.
fn is_target(board: &Board, s: Square, color: Color) -> bool {
    board.piece_at(s).is_none_or(|pc| pc.color != color)
}

/// Every square strictly between `start` and `end` along a straight line is empty.
fn path_clear(board: &Board, start: Square, end: Square) -> bool {
    let (dr, dc) = deltas(start, end);
    let step = (dr.signum(), dc.signum());
    let mut cur = start.offset(step.0, step.1);
    while let Some(s) = cur {
        if s == end {
            return true;
        }
        if !board.is_empty(s) {
            return false;
        }
        cur = s.offset(step.0, step.1);
    }
    false
}

fn pawn_move(board: &Board, start: Square, end: Square, color: Color) -> bool {
    let dir = color.forward();
    let (dr, dc) = deltas(start, end);

    if dc == 0 {
        if dr == dir {
            return board.is_empty(end);
        }
        if dr == 2 * dir && start.row() == color.pawn_start_row() {
            return start
                .offset(dir, 0)
                .is_some_and(|mid| board.is_empty(mid))
                && board.is_empty(end);
        }
        return false;
    }

    if dc.abs() == 1 && dr == dir {
        return match board.piece_at(end) {
            Some(target) => target.color != color,
            None => is_en_passant_capture(board, start, end, color),
        };
    }
    false
}

/// `end` is the en-passant target and an enemy pawn sits beside `start`
/// on the target's column.
fn is_en_passant_capture(board: &Board, start: Square, end: Square, color: Color) -> bool {
    board.en_passant() == Some(end)
        && board.piece_at(Square::new(start.row(), end.col()))
            == Some(Piece::new(color.other(), PieceKind::Pawn))
}

fn knight_move(board: &Board, start: Square, end: Square, color: Color) -> bool {
    let (dr, dc) = deltas(start, end);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)) && is_target(board, end, color)
}

fn rook_move(board: &Board, start: Square, end: Square, color: Color) -> bool {
    (start.row() == end.row() || start.col() == end.col())
        && path_clear(board, start, end)
        && is_target(board, end, color)
}

fn bishop_move(board: &Board, start: Square, end: Square, color: Color) -> bool {
    let (dr, dc) = deltas(start, end);
    dr.abs() == dc.abs() && path_clear(board, start, end) && is_target(board, end, color)
}

fn king_step(board: &Board, start: Square, end: Square, color: Color) -> bool {
    let (dr, dc) = deltas(start, end);
    dr.abs().max(dc.abs()) == 1 && is_target(board, end, color)
}

/// King moves two columns along its home row toward a rook that still has
/// its castling right.
fn castle_move(board: &Board, start: Square, end: Square, color: Color) -> bool {
    let row = color.back_row();
    if start != Square::new(row, 4) || end.row() != row {
        return false;
    }
    let rights = board.castling_rights();
    let (held, rook_col, between): (bool, u8, &[u8]) = match end.col() {
        6 => (rights.kingside(color), 7, &[5, 6]),
        2 => (rights.queenside(color), 0, &[1, 2, 3]),
        _ => return false,
    };
    if !held {
        return false;
    }
    let rook = Piece::new(color, PieceKind::Rook);
    if board.piece_at(Square::new(row, rook_col)) != Some(rook) {
        return false;
    }
    if between.iter().any(|&c| !board.is_empty(Square::new(row, c))) {
        return false;
    }
    if is_in_check(board, color) {
        return false;
    }
    // The king's own path: start, transit square, destination.
    let step: i8 = if end.col() > start.col() { 1 } else { -1 };
    let enemy = color.other();
    (0..=2).all(|i| {
        start
            .offset(0, step * i)
            .is_some_and(|s| !is_square_attacked(board, s, enemy))
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod validate_tests;
