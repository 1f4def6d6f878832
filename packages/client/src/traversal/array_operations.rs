//! Array operations for traversal evaluation
//!
//! Explosion of a singleton array into the working set, and the element
//! accessors built on the same singleton requirement.

use super::core::Traversal;
use crate::error::{TraversalError, TraversalResult};
use crate::node::{Node, decode};

/// Take the only node of a working set, or fail with the size found
fn singleton(nodes: Vec<Node>) -> TraversalResult<Node> {
    let found = nodes.len();
    let mut nodes = nodes.into_iter();
    match (nodes.next(), nodes.next()) {
        (Some(node), None) => Ok(node),
        _ => Err(TraversalError::wrong_working_set_size(1, found)),
    }
}

/// Decode the only node of a working set as an array
fn singleton_elements(nodes: Vec<Node>) -> TraversalResult<Vec<Node>> {
    let node = singleton(nodes)?;
    decode::as_nodes(&node).map_err(|e| TraversalError::not_an_array(0, e))
}

impl Traversal {
    /// Replace a singleton working set with the elements of its array
    ///
    /// Fails with `WrongWorkingSetSize` unless exactly one node is current,
    /// `NotAnArray` if that node is not an array, and `EmptyWorkingSet` if
    /// the array has no elements. Element order is preserved.
    #[must_use]
    pub fn array_slice(self) -> Self {
        self.step("array_slice", true, singleton_elements)
    }

    /// Replace a singleton working set with element `index` of its array
    ///
    /// Fails with `IndexOutOfBounds` when the array is too short.
    #[must_use]
    pub fn array_index(self, index: usize) -> Self {
        self.step("array_index", true, |nodes| {
            let elements = singleton_elements(nodes)?;
            let len = elements.len();
            elements
                .into_iter()
                .nth(index)
                .map(|element| vec![element])
                .ok_or(TraversalError::index_out_of_bounds(index, len))
        })
    }

    /// Unwrap a singleton working set holding a one-element array
    ///
    /// `[x]` becomes `x`. An empty array fails with `EmptyWorkingSet`, a longer
    /// one with `WrongWorkingSetSize`.
    ///
    /// # Examples
    /// ```
    /// use traverse_core::Traversal;
    ///
    /// let out = Traversal::start(r#"[{"A":"a","B":43,"C":true}]"#)
    ///     .array_singleton()
    ///     .end_to_string()?;
    /// assert_eq!(out, r#"{"A":"a","B":43,"C":true}"#);
    /// # Ok::<(), traverse_core::TraversalError>(())
    /// ```
    #[must_use]
    pub fn array_singleton(self) -> Self {
        self.step("array_singleton", true, |nodes| {
            let elements = singleton_elements(nodes)?;
            match elements.len() {
                0 => Err(TraversalError::EmptyWorkingSet),
                1 => Ok(elements),
                found => Err(TraversalError::wrong_working_set_size(1, found)),
            }
        })
    }
}
