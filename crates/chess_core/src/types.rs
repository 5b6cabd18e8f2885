use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChessError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// +1 for white, -1 for black. Scores are white-positive.
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Row delta of a pawn step. White moves toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_code(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Two-character display code, e.g. `wP` or `bK`.
    pub fn code(self) -> String {
        format!("{}{}", self.color.code(), self.kind.code())
    }
}

/// A board square addressed as (row, col).
///
/// Row 0 is black's back rank and row 7 is white's back rank; col 0 is the
/// a-file. Both coordinates are always in `0..8`, including when read back
/// through serde.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Square`].
#[derive(Deserialize)]
struct RawSquare {
    row: u8,
    col: u8,
}

impl TryFrom<RawSquare> for Square {
    type Error = ChessError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::try_new(raw.row, raw.col)
    }
}

impl Square {
    /// Builds a square from trusted coordinates.
    ///
    /// Out-of-range input is masked into the board; use [`Square::try_new`]
    /// for anything coming from outside the crate.
    pub const fn new(row: u8, col: u8) -> Self {
        Self {
            row: row & 7,
            col: col & 7,
        }
    }

    pub fn try_new(row: u8, col: u8) -> Result<Self, ChessError> {
        if row < 8 && col < 8 {
            Ok(Self { row, col })
        } else {
            Err(ChessError::SquareOutOfRange { row, col })
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    /// Dense index in `0..64`, row-major from a8.
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// The square displaced by (dr, dc), or `None` when it leaves the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        sq(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square::new(i / 8, i % 8))
    }

    /// Light squares carry the `"  "` empty marker, dark ones `"##"`.
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(b'8' - r, f - b'a'))
    }
}

/// Signed-coordinate helper; `None` when off the board.
pub fn sq(row: i8, col: i8) -> Option<Square> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some(Square::new(row as u8, col as u8))
    } else {
        None
    }
}

/// An ordered (start, end) pair. Castling, en passant and promotion are
/// inferred from the board when the move is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ChessError;

    /// Parses coordinate notation such as `e2e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ChessError::InvalidMove(s.to_string()));
        }
        let from: Square = s[0..2].parse()?;
        let to: Square = s[2..4].parse()?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
