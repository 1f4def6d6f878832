//! Caller-supplied operations: filter, selector and inspect
//!
//! These accept closures instead of fixed navigation rules. Closures only ever
//! see nodes by shared reference, so none of them can alter the document.

use super::core::{ChainState, Traversal};
use crate::error::TraversalResult;
use crate::node::Node;

impl Traversal {
    /// Keep the nodes for which `predicate` returns true
    ///
    /// The predicate runs once per node in working-set order and survivors keep
    /// that order. It should return `false` rather than fail when it cannot
    /// decode a node. Zero survivors fail the chain with `EmptyWorkingSet`.
    /// There is no implicit collapse to one node; follow with an explicit
    /// cardinality check if exactly one match is required.
    ///
    /// # Examples
    /// ```
    /// use traverse_core::{Traversal, node::decode};
    ///
    /// let out = Traversal::start(r#"[{"k":"v1"},{"k":"v2"},{"k":"v3"}]"#)
    ///     .array_slice()
    ///     .filter(|node| {
    ///         decode::as_field_map(node)
    ///             .ok()
    ///             .and_then(|m| m.get("k").and_then(|v| decode::as_string(v).ok()))
    ///             .is_some_and(|k| k == "v3")
    ///     })
    ///     .end_to_string()?;
    /// assert_eq!(out, r#"{"k":"v3"}"#);
    /// # Ok::<(), traverse_core::TraversalError>(())
    /// ```
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&Node) -> bool,
    {
        self.step("filter", true, |nodes| {
            Ok(nodes
                .into_iter()
                .enumerate()
                .filter(|(index, node)| {
                    let keep = predicate(node);
                    tracing::trace!(index, keep, "filter predicate");
                    keep
                })
                .map(|(_, node)| node)
                .collect())
        })
    }

    /// Replace the working set with whatever `transform` computes from it
    ///
    /// Escape hatch for navigation the other operations cannot express. An
    /// error from `transform` becomes the chain's terminal error exactly as
    /// returned. A successful result is installed as-is, without the
    /// non-empty check, and may hold nodes synthesized with
    /// [`Node::from_value`].
    ///
    /// `transform` must be free of side effects and should only pass on nodes
    /// derived from its input.
    #[must_use]
    pub fn selector<S>(self, transform: S) -> Self
    where
        S: FnOnce(&[Node]) -> TraversalResult<Vec<Node>>,
    {
        self.step("selector", false, |nodes| transform(&nodes))
    }

    /// Observe each node without changing the chain
    ///
    /// `visitor` receives the working-set index and node. Nothing happens on an
    /// errored chain.
    #[must_use]
    pub fn inspect<V>(self, mut visitor: V) -> Self
    where
        V: FnMut(usize, &Node),
    {
        if let ChainState::Active(nodes) = &self.state {
            for (index, node) in nodes.iter().enumerate() {
                visitor(index, node);
            }
        }
        self
    }
}
