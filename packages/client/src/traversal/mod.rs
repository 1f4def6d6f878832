//! Chain evaluation
//!
//! A [`Traversal`] is either active, holding a non-empty ordered working set of
//! [`Node`](crate::node::Node)s, or errored. Operations consume one traversal
//! and return the next; an errored traversal passes through every operation
//! unchanged, so the first failure is the one reported by `end`.

mod array_operations;
mod core;
mod object_operations;
mod selector_operations;
mod terminal;

pub use self::core::{ChainState, Traversal};
