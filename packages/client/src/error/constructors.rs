//! Error constructor functions
//!
//! Factory methods that attach the working-set context each operation reports.

use super::types::{DecodeError, Shape, TraversalError};

/// Longest node excerpt kept in a [`DecodeError`]
const FRAGMENT_LIMIT: usize = 64;

impl TraversalError {
    /// Creates an invalid document error
    ///
    /// # Examples
    /// ```
    /// use traverse_core::error::{ErrorKind, TraversalError};
    ///
    /// let error = TraversalError::invalid_document("unexpected '}' at line 1");
    /// assert_eq!(error.kind(), ErrorKind::InvalidDocument);
    /// ```
    #[must_use]
    pub fn invalid_document(message: impl Into<String>) -> Self {
        TraversalError::InvalidDocument(message.into())
    }

    /// Creates a projection error for a node that should have been an object
    #[must_use]
    pub fn not_an_object(index: usize, source: DecodeError) -> Self {
        TraversalError::NotAnObject { index, source }
    }

    /// Creates a projection error for a node that should have been an array
    #[must_use]
    pub fn not_an_array(index: usize, source: DecodeError) -> Self {
        TraversalError::NotAnArray { index, source }
    }

    /// Creates a missing field error
    #[must_use]
    pub fn key_not_found(index: usize, key: impl Into<String>) -> Self {
        TraversalError::KeyNotFound {
            index,
            key: key.into(),
        }
    }

    /// Creates a cardinality error
    #[must_use]
    pub fn wrong_working_set_size(expected: usize, found: usize) -> Self {
        TraversalError::WrongWorkingSetSize { expected, found }
    }

    /// Creates an out of bounds error for array element access
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        TraversalError::IndexOutOfBounds { index, len }
    }

    /// Creates a selector failure from any displayable reason
    ///
    /// # Examples
    /// ```
    /// use traverse_core::error::TraversalError;
    ///
    /// let error = TraversalError::selector("not found");
    /// assert_eq!(error.to_string(), "selector failed: not found");
    /// ```
    #[must_use]
    pub fn selector(reason: impl std::fmt::Display) -> Self {
        TraversalError::Selector(reason.to_string())
    }
}

impl DecodeError {
    /// Creates a decode error for `raw` text that failed to project as `shape`
    #[must_use]
    pub fn new(shape: Shape, raw: &str, message: impl Into<String>) -> Self {
        Self {
            shape,
            fragment: fragment(raw),
            message: message.into(),
        }
    }
}

/// Cut `raw` down to a log-friendly excerpt on a char boundary
fn fragment(raw: &str) -> String {
    if raw.len() <= FRAGMENT_LIMIT {
        return raw.to_string();
    }
    let mut end = FRAGMENT_LIMIT;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &raw[..end])
}
