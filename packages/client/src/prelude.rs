//! Traverse Prelude
//!
//! The types callers need to build and run a chain.

pub use crate::config::{EndPolicy, TraversalConfig};
pub use crate::error::{DecodeError, ErrorKind, TraversalError, TraversalResult};
pub use crate::node::{FieldMap, Node, NodeKind};
pub use crate::telemetry::{TraversalStats, TraversalStatsSnapshot};
pub use crate::traversal::{ChainState, Traversal};
