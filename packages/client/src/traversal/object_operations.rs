//! Object operations for traversal evaluation
//!
//! Keyed-field descent over every node of the working set.

use super::core::Traversal;
use crate::error::TraversalError;
use crate::node::decode;

impl Traversal {
    /// Replace each node with the value of its field `key`
    ///
    /// Every node must be an object holding `key`. This is not a filter: one
    /// failing node aborts the operation for all of them, with
    /// `NotAnObject` or `KeyNotFound` qualified by the node's index.
    ///
    /// # Examples
    /// ```
    /// use traverse_core::Traversal;
    ///
    /// let out = Traversal::start(r#"{"A":"a","B":43,"C":true}"#)
    ///     .object_key("B")
    ///     .end_to_string()?;
    /// assert_eq!(out, "43");
    /// # Ok::<(), traverse_core::TraversalError>(())
    /// ```
    #[must_use]
    pub fn object_key(self, key: &str) -> Self {
        self.step("object_key", true, |nodes| {
            nodes
                .into_iter()
                .enumerate()
                .map(|(index, node)| {
                    let mut fields = decode::as_field_map(&node)
                        .map_err(|e| TraversalError::not_an_object(index, e))?;
                    fields
                        .remove(key)
                        .ok_or_else(|| TraversalError::key_not_found(index, key))
                })
                .collect()
        })
    }
}
