//! Telemetry and statistics collection for traversals

pub mod traversal_stats;

pub use traversal_stats::{TraversalStats, TraversalStatsSnapshot};
