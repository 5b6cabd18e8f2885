//! Classical Chess Engine
//!
//! Minimax with alpha-beta pruning over a material and piece-square
//! evaluation, with adaptive depth, a per-search position cache and
//! difficulty levels that mix in random play.

pub mod cache;
pub mod config;
pub mod eval;
pub mod ordering;
pub mod search;

use std::time::{Duration, Instant};

use chess_core::{
    Board, Color, Engine, Move, SearchLimits, SearchResult, TimeControl, all_moves, is_in_check,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

pub use cache::PositionCache;
pub use config::{ConfigError, Difficulty, EngineConfig, EvalWeights, SearchConfig};
pub use eval::{CHECKMATE_SCORE, STALEMATE_SCORE, evaluate};
pub use search::{SearchOutcome, Searcher};

/// Classical engine: searches with [`Searcher`] or, at lower difficulty,
/// plays random legal moves.
#[derive(Debug, Clone)]
pub struct ClassicalEngine {
    config: EngineConfig,
    cache: PositionCache,
    rng: StdRng,
    nodes: u64,
}

impl Default for ClassicalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let cache = PositionCache::new(config.search.cache_capacity);
        Self {
            config,
            cache,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Fixes the random source, for reproducible games at `Easy`/`Medium`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Move for `color` using the configured depth policy, or `None` when
    /// `color` has no legal move.
    pub fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color, SearchLimits::adaptive()).best_move
    }

    /// Whether this call should skip searching and play at random.
    fn plays_randomly(&mut self) -> bool {
        match self.config.difficulty {
            Difficulty::Easy => true,
            Difficulty::Medium => self.rng.r#gen::<f64>() < self.config.search.medium_random_chance,
            Difficulty::Hard => false,
        }
    }

    /// Clock for one search: the caller's time control if it has a limit,
    /// else `limits.move_time`, else the configured `move_time_ms`.
    fn deadline(&self, limits: &SearchLimits) -> TimeControl {
        if limits.time_control.time_limit().is_some() {
            return limits.time_control.clone();
        }
        let budget = limits
            .move_time
            .or_else(|| self.config.search.move_time_ms.map(Duration::from_millis));
        match budget {
            Some(budget) => TimeControl::new(Some(budget)),
            None => limits.time_control.clone(),
        }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, color: Color, limits: SearchLimits) -> SearchResult {
        let started = Instant::now();
        self.nodes = 0;

        let moves = all_moves(board, color);
        if moves.is_empty() {
            let score = if is_in_check(board, color) { -CHECKMATE_SCORE } else { STALEMATE_SCORE };
            return SearchResult {
                best_move: None,
                score,
                depth: 0,
                nodes: 0,
                stopped: false,
            };
        }

        // Nothing to decide.
        if let &[only] = moves.as_slice() {
            debug!(%color, mv = %only, "single legal move");
            return SearchResult {
                best_move: Some(only),
                score: 0,
                depth: 0,
                nodes: 0,
                stopped: false,
            };
        }

        if self.plays_randomly() {
            let pick = moves.choose(&mut self.rng).copied();
            debug!(%color, difficulty = ?self.config.difficulty, mv = ?pick.map(|m| m.to_string()), "random move");
            return SearchResult {
                best_move: pick,
                score: 0,
                depth: 0,
                nodes: 0,
                stopped: false,
            };
        }

        let depth = limits
            .depth
            .unwrap_or_else(|| self.config.search.depth_for(board.piece_count()))
            .max(1);
        let mut tc = self.deadline(&limits);
        tc.start();

        let mut scratch = board.scratch_copy();
        let outcome = Searcher::new(&self.config.eval, &mut self.cache, color)
            .with_time_control(&tc)
            .search(&mut scratch, depth);
        self.nodes = outcome.nodes;

        info!(
            %color,
            depth,
            nodes = outcome.nodes,
            elapsed = ?started.elapsed(),
            "AI move time"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: outcome.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Classical minimax"
    }

    fn new_game(&mut self) {
        self.cache.clear();
        self.nodes = 0;
    }
}

/// Best move for `color` with the default engine settings, or `None` when
/// `color` is checkmated or stalemated.
///
/// A position with exactly one legal move returns it without searching.
pub fn get_ai_move(board: &Board, color: Color) -> Option<Move> {
    ClassicalEngine::new().choose_move(board, color)
}
