//! Zobrist keys for board identity.
//!
//! The board keeps a running XOR of:
//! - one key per (piece, square) that is occupied
//! - one key per castling right still held
//! - one key for the en-passant target column, when set
//!
//! The side to move is not part of a `Board`; search code XORs
//! [`ZobristKeys::side_key`] in when it builds cache keys.

use crate::types::{Color, Piece, Square};

const SEED: u64 = 0xC0FF_EE00_D15E_A5E5;

/// splitmix64 finalizer. A bijection on `u64`, so distinct slots get
/// distinct keys.
const fn splitmix(slot: u64) -> u64 {
    let mut z = SEED.wrapping_add(slot.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square index]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [white kingside, white queenside, black kingside, black queenside]
    pub castling: [u64; 4],
    /// By en-passant target column
    pub en_passant: [u64; 8],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Slots 0..768 are pieces, then the side key, castling and en passant.
    pub const fn new() -> Self {
        let mut keys = ZobristKeys {
            pieces: [[[0; 64]; 6]; 2],
            black_to_move: splitmix(768),
            castling: [0; 4],
            en_passant: [0; 8],
        };

        let mut slot = 0;
        while slot < 768 {
            keys.pieces[slot / 384][(slot / 64) % 6][slot % 64] = splitmix(slot as u64);
            slot += 1;
        }
        let mut i = 0;
        while i < 4 {
            keys.castling[i] = splitmix(769 + i as u64);
            i += 1;
        }
        let mut col = 0;
        while col < 8 {
            keys.en_passant[col] = splitmix(773 + col as u64);
            col += 1;
        }
        keys
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][square.index()]
    }

    /// Same index order as [`ZobristKeys::castling`].
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, col: u8) -> u64 {
        self.en_passant[(col & 7) as usize]
    }

    /// Zero for white, so a board hash doubles as the white-to-move key.
    #[inline(always)]
    pub fn side_key(&self, to_move: Color) -> u64 {
        match to_move {
            Color::White => 0,
            Color::Black => self.black_to_move,
        }
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
