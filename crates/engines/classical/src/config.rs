//! Engine configuration, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```toml
//! difficulty = "hard"
//!
//! [search]
//! base_depth = 4
//!
//! [eval]
//! center_weight = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How hard the engine tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move.
    Easy,
    /// Random legal move some of the time, searched move otherwise.
    Medium,
    #[default]
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched in the middlegame.
    pub base_depth: u8,
    /// Extra plies once the board thins out.
    pub endgame_depth_bonus: u8,
    /// Piece count (both sides, kings included) below which the bonus applies.
    pub endgame_piece_threshold: usize,
    /// Slots in the position cache; 0 disables caching.
    pub cache_capacity: usize,
    /// Optional per-move deadline in milliseconds.
    pub move_time_ms: Option<u64>,
    /// Chance that `Medium` plays a random move instead of searching.
    pub medium_random_chance: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_depth: 3,
            endgame_depth_bonus: 1,
            endgame_piece_threshold: 10,
            cache_capacity: 1 << 16,
            move_time_ms: None,
            medium_random_chance: 0.3,
        }
    }
}

impl SearchConfig {
    /// Depth for a position holding `piece_count` pieces.
    pub fn depth_for(&self, piece_count: usize) -> u8 {
        if piece_count < self.endgame_piece_threshold {
            self.base_depth.saturating_add(self.endgame_depth_bonus)
        } else {
            self.base_depth
        }
    }
}

/// Tunable scoring weights. Material is indexed by `PieceKind::idx()`:
/// pawn, knight, bishop, rook, queen, king.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub material: [i32; 6],
    /// Per piece on d4, e4, d5 or e5.
    pub center_weight: i32,
    /// Per knight or bishop that has left its home ranks.
    pub development_weight: i32,
    /// Set to false to score material only.
    pub use_piece_squares: bool,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: [10, 30, 35, 50, 90, 0],
            center_weight: 3,
            development_weight: 2,
            use_piece_squares: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub search: SearchConfig,
    pub eval: EvalWeights,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
