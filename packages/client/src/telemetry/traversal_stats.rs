//! Lock-free traversal statistics
//!
//! Counters shared between any number of chains through an `Arc`. Chains only
//! ever add to them, so relaxed ordering is sufficient.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Thread-safe traversal statistics
#[derive(Debug)]
pub struct TraversalStats {
    /// Chains started, valid document or not
    pub chains_started: AtomicU64,
    /// Operations applied to an active chain
    pub operations_applied: AtomicU64,
    /// Nodes placed in working sets by those operations
    pub nodes_produced: AtomicU64,
    /// Chains that entered the errored state
    pub errors: AtomicU64,
    /// Bytes written by `end`
    pub bytes_written: AtomicU64,
    /// Collection start time
    pub start_time: Instant,
}

impl Default for TraversalStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalStats {
    /// Create new traversal statistics
    #[must_use]
    pub fn new() -> Self {
        Self {
            chains_started: AtomicU64::new(0),
            operations_applied: AtomicU64::new(0),
            nodes_produced: AtomicU64::new(0),
            errors: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a chain start
    pub fn record_start(&self) {
        self.chains_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one operation and the size of the working set it produced
    pub fn record_operation(&self, nodes: usize) {
        self.operations_applied.fetch_add(1, Ordering::Relaxed);
        self.nodes_produced
            .fetch_add(u64::try_from(nodes).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    /// Record a chain entering the errored state
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record bytes serialized to a sink
    pub fn record_bytes(&self, bytes: usize) {
        self.bytes_written
            .fetch_add(u64::try_from(bytes).unwrap_or(u64::MAX), Ordering::Relaxed);
    }

    /// Get collection duration
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Get current statistics snapshot
    #[must_use]
    pub fn snapshot(&self) -> TraversalStatsSnapshot {
        TraversalStatsSnapshot {
            chains_started: self.chains_started.load(Ordering::Relaxed),
            operations_applied: self.operations_applied.load(Ordering::Relaxed),
            nodes_produced: self.nodes_produced.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            bytes_written: self.bytes_written.load(Ordering::Relaxed),
            elapsed: self.duration(),
        }
    }
}

/// Immutable snapshot of traversal statistics at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalStatsSnapshot {
    pub chains_started: u64,
    pub operations_applied: u64,
    pub nodes_produced: u64,
    pub errors: u64,
    pub bytes_written: u64,
    pub elapsed: Duration,
}
