//! Engine-vs-engine games with a serializable record.

use std::path::Path;
use std::time::Duration;

use chess_core::{Board, Color, Engine, GameStatus, Move, SearchLimits, game_status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Settings for one game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Plies after which the game is scored a draw.
    pub max_plies: u32,
    /// Fixed search depth; `None` lets each engine choose.
    pub depth: Option<u8>,
    /// Per-move deadline.
    pub move_time: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            depth: None,
            move_time: None,
        }
    }
}

impl GameConfig {
    /// Fresh limits for each move, so every move gets its own clock.
    fn search_limits(&self) -> SearchLimits {
        match (self.depth, self.move_time) {
            (Some(d), Some(t)) => SearchLimits::depth_and_time(d, t),
            (Some(d), None) => SearchLimits::depth(d),
            (None, Some(t)) => SearchLimits {
                move_time: Some(t),
                ..SearchLimits::adaptive()
            },
            (None, None) => SearchLimits::adaptive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// Ply limit reached with the game still going.
    MoveLimit,
    /// An engine produced a move the board refused.
    IllegalMove,
}

impl GameResult {
    /// Conventional score string.
    pub fn score(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Stalemate | GameResult::MoveLimit => "1/2-1/2",
            GameResult::IllegalMove => "*",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub started_at: DateTime<Utc>,
    pub white: String,
    pub black: String,
    /// Moves in coordinate notation, e.g. `e2e4`.
    pub moves: Vec<String>,
    pub result: GameResult,
    /// Position the game ended in.
    pub final_fen: String,
}

impl GameRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Replays the recorded moves from the opening position.
    pub fn replay(&self) -> anyhow::Result<(Board, Color)> {
        let mut board = Board::new_game();
        let mut side = Color::White;
        for text in &self.moves {
            let mv: Move = text.parse()?;
            anyhow::ensure!(board.apply_move(mv, side), "illegal move {text} for {side}");
            side = side.other();
        }
        Ok((board, side))
    }
}

/// Plays one game from the opening position and returns its record.
pub fn play_game(white: &mut dyn Engine, black: &mut dyn Engine, config: &GameConfig) -> GameRecord {
    let started_at = Utc::now();
    let mut board = Board::new_game();
    let mut side = Color::White;
    let mut moves = Vec::new();
    white.new_game();
    black.new_game();

    let result = loop {
        match game_status(&board, side) {
            GameStatus::Checkmate => {
                break match side {
                    Color::White => GameResult::BlackWins,
                    Color::Black => GameResult::WhiteWins,
                };
            }
            GameStatus::Stalemate => break GameResult::Stalemate,
            GameStatus::Check => debug!(%side, "in check"),
            GameStatus::Ongoing => {}
        }
        if moves.len() as u32 >= config.max_plies {
            break GameResult::MoveLimit;
        }

        let limits = config.search_limits();
        let searched = match side {
            Color::White => white.search(&board, side, limits),
            Color::Black => black.search(&board, side, limits),
        };
        let Some(mv) = searched.best_move else {
            // The status check above saw a legal move.
            warn!(%side, "engine returned no move");
            break GameResult::IllegalMove;
        };
        if !board.apply_move(mv, side) {
            warn!(%side, %mv, "engine played an illegal move");
            break GameResult::IllegalMove;
        }

        debug!(
            ply = moves.len() + 1,
            %side,
            %mv,
            score = searched.score,
            nodes = searched.nodes,
            "move played"
        );
        moves.push(mv.to_string());
        side = side.other();
    };

    info!(result = result.score(), plies = moves.len(), "game over");

    GameRecord {
        started_at,
        white: white.name().to_string(),
        black: black.name().to_string(),
        moves,
        result,
        final_fen: board.to_fen(side),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
