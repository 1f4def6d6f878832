//! Traversal Error Types
//!
//! Core error types for chain evaluation and raw-value decoding.

use std::fmt;

use crate::config::ConfigurationError;

/// Result type for traversal operations
pub type TraversalResult<T> = Result<T, TraversalError>;

/// Terminal error carried by an errored traversal
///
/// Once a traversal holds one of these, every further operation passes it
/// through unchanged, so the error reported at the end of a chain is always
/// the first one that occurred.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    /// Input bytes are not one complete JSON value
    #[error("invalid JSON document: {0}")]
    InvalidDocument(String),

    /// Working-set node at `index` is not a JSON object
    #[error("{index}: not an object: {source}")]
    NotAnObject { index: usize, source: DecodeError },

    /// Working-set node at `index` is not a JSON array
    #[error("{index}: not an array: {source}")]
    NotAnArray { index: usize, source: DecodeError },

    /// Object at `index` has no field named `key`
    #[error("{index}: no entry for key '{key}'")]
    KeyNotFound { index: usize, key: String },

    /// An operation needing a specific cardinality received another one
    #[error("expecting working set size of {expected}; found {found}")]
    WrongWorkingSetSize { expected: usize, found: usize },

    /// An operation would have produced zero nodes
    #[error("no entries in working set")]
    EmptyWorkingSet,

    /// Array element requested past the end of the array
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Decode failure surfaced by a caller-supplied selector
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Failure reported by a caller-supplied selector
    #[error("selector failed: {0}")]
    Selector(String),

    /// Chain started with a configuration that does not validate
    #[error("invalid traversal configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Output sink rejected the serialized node
    #[error("write failed: {0}")]
    Io(String),
}

/// Payload-free discriminant of [`TraversalError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidDocument,
    NotAnObject,
    NotAnArray,
    KeyNotFound,
    WrongWorkingSetSize,
    EmptyWorkingSet,
    IndexOutOfBounds,
    Decode,
    Selector,
    Configuration,
    Io,
}

impl TraversalError {
    /// Get the kind of this error, without its context
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TraversalError::InvalidDocument(_) => ErrorKind::InvalidDocument,
            TraversalError::NotAnObject { .. } => ErrorKind::NotAnObject,
            TraversalError::NotAnArray { .. } => ErrorKind::NotAnArray,
            TraversalError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            TraversalError::WrongWorkingSetSize { .. } => ErrorKind::WrongWorkingSetSize,
            TraversalError::EmptyWorkingSet => ErrorKind::EmptyWorkingSet,
            TraversalError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            TraversalError::Decode(_) => ErrorKind::Decode,
            TraversalError::Selector(_) => ErrorKind::Selector,
            TraversalError::Configuration(_) => ErrorKind::Configuration,
            TraversalError::Io(_) => ErrorKind::Io,
        }
    }

    /// Working-set index the error is qualified with, if any
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            TraversalError::NotAnObject { index, .. }
            | TraversalError::NotAnArray { index, .. }
            | TraversalError::KeyNotFound { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Projection requested from a document node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    String,
    Boolean,
    Integer32,
    Array,
    Object,
    ArrayOfObjects,
    /// Caller-chosen serde target, named by its Rust type
    Typed(&'static str),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String => f.write_str("string"),
            Shape::Boolean => f.write_str("boolean"),
            Shape::Integer32 => f.write_str("32-bit integer"),
            Shape::Array => f.write_str("array"),
            Shape::Object => f.write_str("object"),
            Shape::ArrayOfObjects => f.write_str("array of objects"),
            Shape::Typed(name) => f.write_str(name),
        }
    }
}

/// A node's actual shape did not match the requested projection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot decode {shape} from '{fragment}': {message}")]
pub struct DecodeError {
    /// What the caller asked for
    pub shape: Shape,
    /// Leading text of the offending node
    pub fragment: String,
    /// Underlying parser message
    pub message: String,
}
