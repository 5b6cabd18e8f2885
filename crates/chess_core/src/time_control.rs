//! Search limits and an optional wall-clock deadline.
//!
//! By default a search has no deadline and runs to completion. With a move
//! time set, the engine polls the clock every few hundred nodes and, once it
//! has expired, stops and reports the best move found so far.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Nodes between two clock reads.
const POLL_EVERY: u64 = 256;

/// Limits for one call to [`Engine::search`](crate::Engine::search).
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Fixed depth in plies; `None` lets the engine pick (adaptive depth).
    pub depth: Option<u8>,
    pub move_time: Option<Duration>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Engine-chosen depth, no deadline.
    pub fn adaptive() -> Self {
        Self::default()
    }

    pub fn depth(depth: u8) -> Self {
        SearchLimits {
            depth: Some(depth),
            ..Default::default()
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        SearchLimits {
            depth: Some(depth),
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    pub fn start(&mut self) {
        self.time_control.start();
    }
}

/// Clock for a single search.
///
/// The stop flag is shared, so a handle taken with [`stop_handle`] can end
/// the search from another thread. Clones share the flag but not the clock.
///
/// [`stop_handle`]: TimeControl::stop_handle
#[derive(Debug, Clone, Default)]
pub struct TimeControl {
    flag: Arc<AtomicBool>,
    time_limit: Option<Duration>,
    started_at: Option<Instant>,
    deadline: Option<Instant>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        TimeControl {
            time_limit,
            ..Default::default()
        }
    }

    /// Starts (or restarts) the clock and lowers the stop flag.
    pub fn start(&mut self) {
        let now = Instant::now();
        self.started_at = Some(now);
        self.deadline = self.time_limit.map(|limit| now + limit);
        self.flag.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.flag.clone()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// True once the search must end, either because the deadline passed or
    /// because someone raised the flag. A passed deadline raises the flag.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.stop();
                true
            }
            _ => false,
        }
    }

    /// Whether `nodes` falls on a clock poll.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(POLL_EVERY)
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.map_or(Duration::ZERO, |at| at.elapsed())
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
