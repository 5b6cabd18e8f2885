use std::fmt;

use crate::error::ChessError;
use crate::types::*;
use crate::validate::is_legal_move;
use crate::zobrist::ZOBRIST;

pub type Grid = [[Option<Piece>; 8]; 8];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn kingside(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }
    pub fn queenside(&self, c: Color) -> bool {
        match c {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// Drops the right tied to the rook home square `col` (0 or 7).
    fn revoke_corner(&mut self, c: Color, col: u8) {
        match (c, col) {
            (Color::White, 0) => self.white_queenside = false,
            (Color::White, 7) => self.white_kingside = false,
            (Color::Black, 0) => self.black_queenside = false,
            (Color::Black, 7) => self.black_kingside = false,
            _ => {}
        }
    }

    fn revoke_all(&mut self, c: Color) {
        match c {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Flags in Zobrist key order.
    fn flags(&self) -> [bool; 4] {
        [
            self.white_kingside,
            self.white_queenside,
            self.black_kingside,
            self.black_queenside,
        ]
    }

    fn zobrist(&self) -> u64 {
        self.flags()
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .fold(0, |h, (i, _)| h ^ ZOBRIST.castling_key(i))
    }
}

/// Full pre-move state pushed by [`Board::apply_move`].
#[derive(Clone, Debug)]
struct Snapshot {
    grid: Grid,
    castling: CastlingRights,
    en_passant: Option<Square>,
    hash: u64,
}

/// What [`Board::unmake_move`] needs to restore the position.
#[derive(Clone, Debug)]
pub struct Undo {
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    /// Differs from the move's destination only for en passant.
    pub captured_sq: Square,
    pub rook_move: Option<(Square, Square)>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub hash: u64,
}

#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    castling: CastlingRights,
    en_passant: Option<Square>,
    history: Vec<Snapshot>,
    hash: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// A board with no pieces and no castling rights.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            castling: CastlingRights::NONE,
            en_passant: None,
            history: Vec::new(),
            hash: 0,
        }
    }

    /// The standard initial arrangement.
    pub fn new_game() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            let col = col as u8;
            b.set_piece(Square::new(0, col), Some(Piece::new(Color::Black, kind)));
            b.set_piece(Square::new(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            b.set_piece(Square::new(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            b.set_piece(Square::new(7, col), Some(Piece::new(Color::White, kind)));
        }
        b.set_castling_rights(CastlingRights::ALL);
        b
    }

    /// Parses a FEN string, ignoring the side-to-move and clock fields.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Self::from_fen_with_side(fen).map(|(board, _)| board)
    }

    /// Parses a FEN string and also returns its side to move.
    ///
    /// Only the placement field is required; side defaults to white,
    /// castling and en passant to `-`.
    pub fn from_fen_with_side(fen: &str) -> Result<(Self, Color), ChessError> {
        let bad = |why: &str| ChessError::InvalidFen(format!("{why}: '{fen}'"));
        let parts: Vec<&str> = fen.split_whitespace().collect();
        let placement = parts.first().ok_or_else(|| bad("empty string"))?;

        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }
        for (row, rank) in ranks.iter().enumerate() {
            let mut col: u8 = 0;
            for ch in rank.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as u8;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_code(ch).ok_or_else(|| bad("bad piece char"))?;
                    if col >= 8 {
                        return Err(bad("too many files in rank"));
                    }
                    board.set_piece(Square::new(row as u8, col), Some(Piece::new(color, kind)));
                    col += 1;
                }
                if col > 8 {
                    return Err(bad("too many files in rank"));
                }
            }
            if col != 8 {
                return Err(bad("not enough files in rank"));
            }
        }

        let side = match parts.get(1).copied().unwrap_or("w") {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(bad("bad side to move")),
        };

        let mut castling = CastlingRights::NONE;
        let castle_part = parts.get(2).copied().unwrap_or("-");
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.white_kingside = true,
                    'Q' => castling.white_queenside = true,
                    'k' => castling.black_kingside = true,
                    'q' => castling.black_queenside = true,
                    _ => return Err(bad("bad castling char")),
                }
            }
        }
        board.set_castling_rights(castling);

        let ep_part = parts.get(3).copied().unwrap_or("-");
        if ep_part != "-" {
            let target: Square = ep_part.parse().map_err(|_| bad("bad en passant square"))?;
            board.set_en_passant(Some(target));
        }

        Ok((board, side))
    }

    /// Placement, side, castling and en-passant fields plus fixed clocks.
    pub fn to_fen(&self, side_to_move: Color) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            let mut gap = 0;
            for col in 0..8u8 {
                match self.piece_at(Square::new(row, col)) {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        let ch = pc.kind.code();
                        out.push(match pc.color {
                            Color::White => ch,
                            Color::Black => ch.to_ascii_lowercase(),
                        });
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(side_to_move.code());
        out.push(' ');
        let c = self.castling;
        let mut rights = String::new();
        for (held, ch) in [
            (c.white_kingside, 'K'),
            (c.white_queenside, 'Q'),
            (c.black_kingside, 'k'),
            (c.black_queenside, 'q'),
        ] {
            if held {
                rights.push(ch);
            }
        }
        if rights.is_empty() {
            rights.push('-');
        }
        out.push_str(&rights);
        out.push(' ');
        match self.en_passant {
            Some(s) => out.push_str(&s.to_string()),
            None => out.push('-'),
        }
        out.push_str(" 0 1");
        out
    }

    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        self.grid[s.row() as usize][s.col() as usize]
    }

    /// Places or clears a square, keeping the hash in step.
    pub fn set_piece(&mut self, s: Square, pc: Option<Piece>) {
        if let Some(old) = self.piece_at(s) {
            self.hash ^= ZOBRIST.piece_key(old, s);
        }
        if let Some(new) = pc {
            self.hash ^= ZOBRIST.piece_key(new, s);
        }
        self.put(s, pc);
    }

    #[inline]
    fn put(&mut self, s: Square, pc: Option<Piece>) {
        self.grid[s.row() as usize][s.col() as usize] = pc;
    }

    pub fn is_empty(&self, s: Square) -> bool {
        self.piece_at(s).is_none()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.hash ^= self.castling.zobrist() ^ rights.zobrist();
        self.castling = rights;
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn set_en_passant(&mut self, target: Option<Square>) {
        if let Some(old) = self.en_passant {
            self.hash ^= ZOBRIST.ep_key(old.col());
        }
        if let Some(new) = target {
            self.hash ^= ZOBRIST.ep_key(new.col());
        }
        self.en_passant = target;
    }

    /// Incrementally maintained Zobrist hash (side to move not included).
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Recomputes the hash from scratch.
    pub fn compute_hash(&self) -> u64 {
        let mut h = self
            .pieces()
            .fold(0, |h, (s, pc)| h ^ ZOBRIST.piece_key(pc, s));
        h ^= self.castling.zobrist();
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(ep.col());
        }
        h
    }

    /// Occupied squares, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |s| self.piece_at(s).map(|pc| (s, pc)))
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(s, _)| s)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// A copy of the position without the move history, for hypothetical play.
    pub fn scratch_copy(&self) -> Board {
        Board {
            grid: self.grid,
            castling: self.castling,
            en_passant: self.en_passant,
            history: Vec::new(),
            hash: self.hash,
        }
    }

    /// Two-character display code: `"  "`/`"##"` for empty squares by
    /// parity, otherwise color and piece letter such as `wP`.
    pub fn square_code(&self, s: Square) -> String {
        match self.piece_at(s) {
            Some(pc) => pc.code(),
            None if s.is_light() => "  ".to_string(),
            None => "##".to_string(),
        }
    }

    /// Validates and plays `mv` for `color` on the real game board.
    ///
    /// Returns `false` and leaves the board untouched if the move is illegal.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> bool {
        if !is_legal_move(self, mv.from, color, mv.to) {
            return false;
        }
        self.history.push(Snapshot {
            grid: self.grid,
            castling: self.castling,
            en_passant: self.en_passant,
            hash: self.hash,
        });
        self.make_move(mv);
        true
    }

    /// Restores the state before the last successful `apply_move`.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snap) => {
                self.grid = snap.grid;
                self.castling = snap.castling;
                self.en_passant = snap.en_passant;
                self.hash = snap.hash;
                true
            }
            None => false,
        }
    }

    /// Plays `mv` without validating it. Castling, en passant and promotion
    /// (always to a queen) are inferred from the position.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let (from, to) = (mv.from, mv.to);
        let mut undo = Undo {
            moved: self.piece_at(from),
            captured: self.piece_at(to),
            captured_sq: to,
            rook_move: None,
            castling: self.castling,
            en_passant: self.en_passant,
            hash: self.hash,
        };
        let Some(moved) = undo.moved else {
            return undo;
        };

        let is_pawn = moved.kind == PieceKind::Pawn;

        let victim = Square::new(from.row(), to.col());
        if is_pawn
            && from.col() != to.col()
            && undo.captured.is_none()
            && self.en_passant == Some(to)
            && self.piece_at(victim) == Some(Piece::new(moved.color.other(), PieceKind::Pawn))
        {
            undo.captured = self.piece_at(victim);
            undo.captured_sq = victim;
            self.set_piece(victim, None);
        }

        self.set_piece(from, None);
        let landed = if is_pawn && to.row() == moved.color.other().back_row() {
            Piece::new(moved.color, PieceKind::Queen)
        } else {
            moved
        };
        self.set_piece(to, Some(landed));

        let mut rights = self.castling;
        if moved.kind == PieceKind::King {
            if from.row() == to.row() && from.col().abs_diff(to.col()) == 2 {
                let row = from.row();
                let (rook_from, rook_to) = if to.col() > from.col() {
                    (Square::new(row, 7), Square::new(row, 5))
                } else {
                    (Square::new(row, 0), Square::new(row, 3))
                };
                if let Some(rook) = self.piece_at(rook_from) {
                    self.set_piece(rook_from, None);
                    self.set_piece(rook_to, Some(rook));
                    undo.rook_move = Some((rook_from, rook_to));
                }
            }
            rights.revoke_all(moved.color);
        }
        if moved.kind == PieceKind::Rook && from.row() == moved.color.back_row() {
            rights.revoke_corner(moved.color, from.col());
        }
        if let Some(cap) = undo.captured
            && cap.kind == PieceKind::Rook
            && undo.captured_sq.row() == cap.color.back_row()
        {
            rights.revoke_corner(cap.color, undo.captured_sq.col());
        }
        self.set_castling_rights(rights);

        let double_step = is_pawn && from.row().abs_diff(to.row()) == 2;
        self.set_en_passant(if double_step {
            Some(Square::new((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        });

        undo
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        if let Some(moved) = undo.moved {
            if let Some((rook_from, rook_to)) = undo.rook_move {
                let rook = self.piece_at(rook_to);
                self.put(rook_to, None);
                self.put(rook_from, rook);
            }
            self.put(mv.to, None);
            self.put(mv.from, Some(moved));
            self.put(undo.captured_sq, undo.captured);
        }
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.hash = undo.hash;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   a  b  c  d  e  f  g  h")?;
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                write!(f, " {}", self.square_code(Square::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
