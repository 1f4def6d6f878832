//! Traverse Public API
//!
//! Fluent navigation of JSON documents. Chains are built with [`start`] and
//! evaluated lazily; the first failing operation freezes the chain and its
//! error is reported by `end`.
//!
//! ```rust
//! let out = traverse::start(r#"{"name":"tagging","category":"http"}"#)
//!     .object_key("category")
//!     .end_to_string()?;
//! assert_eq!(out, r#""http""#);
//! # Ok::<(), traverse::TraversalError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod script;

// Re-export the engine's public API
pub use traverse_core::{
    ChainState, DecodeError, EndPolicy, ErrorKind, FieldMap, Node, NodeKind, Traversal,
    TraversalConfig, TraversalError, TraversalResult, TraversalStats, TraversalStatsSnapshot,
};
pub use traverse_core::{config, node};

pub use script::{RunSummary, Script, ScriptError, ScriptRunner, Step};

/// Begin a traversal with the default configuration
///
/// Shorthand for `Traversal::start(data)`
#[must_use]
pub fn start(data: impl AsRef<[u8]>) -> Traversal {
    Traversal::start(data)
}

/// Begin a traversal with an explicit configuration
///
/// Shorthand for `Traversal::start_with(data, config)`
#[must_use]
pub fn start_with(data: impl AsRef<[u8]>, config: TraversalConfig) -> Traversal {
    Traversal::start_with(data, config)
}
