//! Traversal error handling module
//!
//! Error types for chain evaluation, the constructors operations use to qualify
//! them, and conversions from std and serde errors.

mod constructors;
mod conversions;
mod types;

pub use types::{DecodeError, ErrorKind, Shape, TraversalError, TraversalResult};
