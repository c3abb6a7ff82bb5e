//! Search statistics.
//!
//! Stack-allocated counters for one solve's backtracking search.

use std::time::{Duration, Instant};

/// Statistics of a single solve.
///
/// # Example
///
/// ```
/// use seatforge_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node(1);
/// stats.record_node(2);
/// stats.record_rejection();
/// stats.record_backtrack();
/// stats.stop();
///
/// assert_eq!(stats.nodes_visited, 2);
/// assert_eq!(stats.placements_rejected, 1);
/// assert_eq!(stats.backtracks, 1);
/// assert_eq!(stats.max_depth, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    duration: Option<Duration>,
    /// Tentative placements tried.
    pub nodes_visited: u64,
    /// Placements that failed the consistency check.
    pub placements_rejected: u64,
    /// Placements undone after a failed subtree or check.
    pub backtracks: u64,
    /// Deepest search level reached (number of seated students).
    pub max_depth: usize,
}

impl SearchStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.duration = None;
    }

    /// Freezes the elapsed time.
    pub fn stop(&mut self) {
        self.duration = Some(self.elapsed());
    }

    /// Time spent solving; frozen once [`stop`](Self::stop) is called.
    pub fn elapsed(&self) -> Duration {
        self.duration
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    /// Records a tentative placement at the given depth (1 = first student).
    pub fn record_node(&mut self, depth: usize) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub fn record_rejection(&mut self) {
        self.placements_rejected += 1;
    }

    pub fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }

    /// Nodes visited per second.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_visited as f64 / secs
        } else {
            0.0
        }
    }
}
