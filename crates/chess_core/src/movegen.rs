use crate::attacks::{DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};
use crate::board::Board;
use crate::types::*;
use crate::validate::is_legal_move_in_place;

/// All legal moves for `color`, as (start, end) pairs in board order.
///
/// The result is exactly the set of pairs accepted by
/// [`is_legal_move`](crate::validate::is_legal_move). Only destinations a
/// piece of that kind could geometrically reach are offered to the
/// validator, instead of all 64.
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut tmp = board.scratch_copy();
    let mut out = Vec::with_capacity(48);
    all_moves_into(&mut tmp, color, &mut out);
    out
}

/// Same as [`all_moves`], reusing `out` and probing on `board` in place.
/// `board` is restored before returning.
pub fn all_moves_into(board: &mut Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    let mut targets = Vec::with_capacity(28);
    for from in Square::all() {
        let Some(pc) = board.piece_at(from) else {
            continue;
        };
        if pc.color != color {
            continue;
        }
        candidate_targets(pc, from, &mut targets);
        for &to in &targets {
            if is_legal_move_in_place(board, from, color, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// True as soon as one legal move for `color` is found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let mut tmp = board.scratch_copy();
    let mut targets = Vec::with_capacity(28);
    for from in Square::all() {
        let Some(pc) = tmp.piece_at(from) else {
            continue;
        };
        if pc.color != color {
            continue;
        }
        candidate_targets(pc, from, &mut targets);
        if targets
            .iter()
            .any(|&to| is_legal_move_in_place(&mut tmp, from, color, to))
        {
            return true;
        }
    }
    false
}

/// Every on-board square the piece's movement pattern could reach on an
/// empty board, plus the two castling destinations for a king.
fn candidate_targets(pc: Piece, from: Square, out: &mut Vec<Square>) {
    out.clear();
    let jumps = |offsets: &[(i8, i8)], out: &mut Vec<Square>| {
        out.extend(offsets.iter().filter_map(|&(dr, dc)| from.offset(dr, dc)));
    };
    match pc.kind {
        PieceKind::Pawn => {
            let dir = pc.color.forward();
            jumps(&[(dir, -1), (dir, 0), (dir, 1), (2 * dir, 0)], out);
        }
        PieceKind::Knight => jumps(&KNIGHT_OFFSETS, out),
        PieceKind::King => {
            jumps(&KING_OFFSETS, out);
            jumps(&[(0, -2), (0, 2)], out);
        }
        PieceKind::Bishop => rays(from, &DIAGONALS, out),
        PieceKind::Rook => rays(from, &ORTHOGONALS, out),
        PieceKind::Queen => {
            rays(from, &DIAGONALS, out);
            rays(from, &ORTHOGONALS, out);
        }
    }
}

fn rays(from: Square, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(s) = cur {
            out.push(s);
            cur = s.offset(dr, dc);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
