//! Minimax search with alpha-beta pruning.
//!
//! Scores are always from the point of view of the side that started the
//! search (the root color): the evaluator's white-positive score is flipped
//! for black, and "maximizing" means "the root color is to move".

use std::time::Instant;

use chess_core::{Board, Color, Move, TimeControl, all_moves, all_moves_into, is_in_check};
use tracing::{debug, trace};

use crate::cache::{Bound, CacheEntry, PositionCache, position_key};
use crate::config::EvalWeights;
use crate::eval::{CHECKMATE_SCORE, STALEMATE_SCORE, evaluate};
use crate::ordering::order_moves;

/// Wider than any reachable score.
pub const INFINITY: i32 = 1_000_000;

/// What a root search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// `None` only when the root side has no legal move.
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes: u64,
    /// True if the deadline or a stop request ended the search early.
    pub stopped: bool,
}

pub struct Searcher<'a> {
    weights: &'a EvalWeights,
    cache: &'a mut PositionCache,
    time_control: Option<&'a TimeControl>,
    root_color: Color,
    nodes: u64,
    stopped: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(weights: &'a EvalWeights, cache: &'a mut PositionCache, root_color: Color) -> Self {
        Self {
            weights,
            cache,
            time_control: None,
            root_color,
            nodes: 0,
            stopped: false,
        }
    }

    /// Abort the search once `tc` reports its deadline has passed.
    pub fn with_time_control(mut self, tc: &'a TimeControl) -> Self {
        self.time_control = Some(tc);
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `depth` plies from `board` with the root color to move.
    ///
    /// A move is reported whenever the root side has one, even at depth 0.
    /// The cache is cleared first. `board` is used as scratch and comes back
    /// unchanged.
    pub fn search(&mut self, board: &mut Board, depth: u8) -> SearchOutcome {
        let started = Instant::now();
        self.cache.clear();
        self.nodes = 0;
        self.stopped = false;

        let root = self.root_color;
        let (score, mut best_move) = self.minimax(board, depth, -INFINITY, INFINITY, true, root);

        // No root move finished (deadline hit, or depth 0): take the first legal one.
        if best_move.is_none() {
            best_move = all_moves(board, root).first().copied();
        }

        debug!(
            color = %root,
            depth,
            score,
            nodes = self.nodes,
            stopped = self.stopped,
            best = ?best_move.map(|m| m.to_string()),
            elapsed = ?started.elapsed(),
            "root search finished"
        );
        let stats = self.cache.stats();
        trace!(
            probes = stats.probes,
            hits = stats.hits,
            stores = stats.stores,
            "position cache"
        );

        SearchOutcome {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stopped: self.stopped,
        }
    }

    /// Minimax value of `board` searched `depth` plies deep, with `color` to
    /// move, together with the move that achieves it.
    ///
    /// `maximizing` is true when `color` is the root color. A node whose side
    /// has no legal move scores as a mate (in check) or a stalemate. Moves are
    /// tried in [`order_moves`] order and the loop stops once
    /// `beta <= alpha`.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        color: Color,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if let Some(tc) = self.time_control
            && tc.should_check_time(self.nodes)
            && tc.check_time()
        {
            self.stopped = true;
            return (0, None);
        }

        if depth == 0 {
            return (self.leaf_score(board), None);
        }

        let key = position_key(board, color);
        if let Some(hit) = self.cache.probe(key, depth)
            && let Some(score) = hit.usable_score(alpha, beta)
        {
            return (score, hit.best_move);
        }

        let mut moves = Vec::with_capacity(48);
        all_moves_into(board, color, &mut moves);
        if moves.is_empty() {
            let score = if !is_in_check(board, color) {
                STALEMATE_SCORE
            } else if maximizing {
                -CHECKMATE_SCORE
            } else {
                CHECKMATE_SCORE
            };
            return (score, None);
        }
        order_moves(board, &mut moves, color, self.weights);

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in moves {
            let undo = board.make_move(mv);
            let (score, _) = self.minimax(board, depth - 1, alpha, beta, !maximizing, color.other());
            board.unmake_move(mv, undo);

            // A cut-short subtree has no meaningful score.
            if self.stopped {
                break;
            }

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                    alpha = alpha.max(score);
                }
            } else if score < best_score {
                best_score = score;
                best_move = Some(mv);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        if self.stopped {
            return match best_move {
                Some(_) => (best_score, best_move),
                None => (0, None),
            };
        }

        let bound = if best_score <= alpha_orig {
            Bound::Upper
        } else if best_score >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.cache.store(CacheEntry {
            key,
            depth,
            score: best_score,
            bound,
            best_move,
        });

        (best_score, best_move)
    }

    #[inline]
    fn leaf_score(&self, board: &Board) -> i32 {
        evaluate(board, self.weights) * self.root_color.sign()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
