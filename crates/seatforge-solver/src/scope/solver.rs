//! Solver-level scope.

use std::time::Duration;

use crate::stats::SearchStats;

/// Mutable bookkeeping for one solve.
///
/// Terminations inspect the scope at every search node.
#[derive(Debug, Default)]
pub struct SolverScope {
    stats: SearchStats,
}

impl SolverScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_solving(&mut self) {
        self.stats = SearchStats::default();
        self.stats.start();
    }

    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn node_count(&self) -> u64 {
        self.stats.nodes_visited
    }

    pub fn record_node(&mut self, depth: usize) {
        self.stats.record_node(depth);
    }

    pub fn record_rejection(&mut self) {
        self.stats.record_rejection();
    }

    pub fn record_backtrack(&mut self) {
        self.stats.record_backtrack();
    }

    /// Stops the clock and hands back the statistics.
    pub fn finish(mut self) -> SearchStats {
        self.stats.stop();
        self.stats
    }
}
