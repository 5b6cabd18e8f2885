//! Static evaluation: material plus piece-square tables plus two small
//! positional terms.

use chess_core::{Board, Color, PieceKind, Square, has_legal_move, is_in_check};

use crate::config::EvalWeights;

/// Score of a decided game. Larger than any material sum.
pub const CHECKMATE_SCORE: i32 = 100_000;
pub const STALEMATE_SCORE: i32 = 0;

type Table = [[i32; 8]; 8];

// Tables are indexed [row][col], row 0 being black's back rank.

const KNIGHT_TABLE: Table = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_TABLE: Table = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const QUEEN_TABLE: Table = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 1, 1, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

const ROOK_TABLE: Table = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

const WHITE_PAWN_TABLE: Table = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BLACK_PAWN_TABLE: Table = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
];

/// d5, e5, d4, e4.
pub const CENTER: [Square; 4] = [
    Square::new(3, 3),
    Square::new(3, 4),
    Square::new(4, 3),
    Square::new(4, 4),
];

#[inline]
pub fn is_center(s: Square) -> bool {
    CENTER.contains(&s)
}

fn piece_square_bonus(kind: PieceKind, color: Color, s: Square) -> i32 {
    let table = match (kind, color) {
        (PieceKind::Pawn, Color::White) => &WHITE_PAWN_TABLE,
        (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_TABLE,
        (PieceKind::Knight, _) => &KNIGHT_TABLE,
        (PieceKind::Bishop, _) => &BISHOP_TABLE,
        (PieceKind::Rook, _) => &ROOK_TABLE,
        (PieceKind::Queen, _) => &QUEEN_TABLE,
        (PieceKind::King, _) => return 0,
    };
    table[s.row() as usize][s.col() as usize]
}

/// A minor piece counts as developed once it is off its own two home ranks.
fn is_developed(kind: PieceKind, color: Color, s: Square) -> bool {
    if !matches!(kind, PieceKind::Knight | PieceKind::Bishop) {
        return false;
    }
    match color {
        Color::White => s.row() < 6,
        Color::Black => s.row() > 1,
    }
}

/// Value of a piece kind under `weights`.
#[inline]
pub fn material(kind: PieceKind, weights: &EvalWeights) -> i32 {
    weights.material[kind.idx()]
}

/// Evaluates `board` from white's point of view.
///
/// Decided positions short-circuit: `CHECKMATE_SCORE` if black is mated,
/// `-CHECKMATE_SCORE` if white is, and `STALEMATE_SCORE` if either side is
/// stalemated. Otherwise the score is the white-minus-black sum of material,
/// piece-square bonus, center occupation and minor-piece development.
pub fn evaluate(board: &Board, weights: &EvalWeights) -> i32 {
    let white_can_move = has_legal_move(board, Color::White);
    let black_can_move = has_legal_move(board, Color::Black);

    if !black_can_move && is_in_check(board, Color::Black) {
        return CHECKMATE_SCORE;
    }
    if !white_can_move && is_in_check(board, Color::White) {
        return -CHECKMATE_SCORE;
    }
    if !white_can_move || !black_can_move {
        return STALEMATE_SCORE;
    }

    static_score(board, weights)
}

/// The positional sum alone, without the terminal-state checks.
pub fn static_score(board: &Board, weights: &EvalWeights) -> i32 {
    let mut score = 0;
    let mut center = 0;
    let mut development = 0;

    for (s, piece) in board.pieces() {
        let sign = piece.color.sign();
        let mut value = material(piece.kind, weights);
        if weights.use_piece_squares {
            value += piece_square_bonus(piece.kind, piece.color, s);
        }
        score += sign * value;

        if is_center(s) {
            center += sign;
        }
        if is_developed(piece.kind, piece.color, s) {
            development += sign;
        }
    }

    score + center * weights.center_weight + development * weights.development_weight
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
