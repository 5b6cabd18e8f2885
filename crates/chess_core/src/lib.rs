pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod terminal;
pub mod time_control;
pub mod types;
pub mod validate;
pub mod zobrist;

// Rules core: board state, attack detection, validation, generation, terminal states
pub use attacks::{is_in_check, is_square_attacked};
pub use board::*;
pub use error::ChessError;
pub use movegen::{all_moves, all_moves_into, has_legal_move};
pub use perft::perft;
pub use terminal::{GameStatus, game_status, is_checkmate, is_stalemate};
pub use time_control::*;
pub use types::*;
pub use validate::{is_geometric_move, is_legal_move};
pub use zobrist::ZOBRIST;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// =============================================================================
// Engine trait: anything that picks a move for one side
// =============================================================================

/// Outcome of one [`Engine::search`] call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side that searched
    pub score: i32,
    /// Plies searched at the root
    pub depth: u8,
    pub nodes: u64,
    /// True when a deadline or stop request cut the search short
    pub stopped: bool,
}

/// A move-selecting agent.
///
/// Shells (self-play driver, a GUI, a text loop) talk to engines through
/// this trait. The board handed in is never modified.
pub trait Engine: Send {
    /// Picks a move for `color` on `board` within `limits`.
    fn search(&mut self, board: &Board, color: Color, limits: SearchLimits) -> SearchResult;

    fn name(&self) -> &str;

    /// Drops per-game state such as cached scores.
    fn new_game(&mut self) {}
}
