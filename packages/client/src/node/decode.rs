//! Raw-value decoders
//!
//! Typed projections from a [`Node`] to Rust values. Each one fails with a
//! [`DecodeError`] when the node's actual shape does not match the request,
//! e.g. asking for a field map from a node that holds an array.
//!
//! Predicates passed to [`Traversal::filter`](crate::traversal::Traversal::filter)
//! are expected to treat these failures as "no match":
//!
//! ```
//! use traverse_core::node::{Node, decode};
//!
//! fn is_http(node: &Node) -> bool {
//!     decode::as_field_map(node)
//!         .ok()
//!         .and_then(|fields| fields.get("category").and_then(|v| decode::as_string(v).ok()))
//!         .is_some_and(|category| category == "http")
//! }
//! ```

use serde::de::DeserializeOwned;

use super::Node;
use crate::error::{DecodeError, Shape};

/// Object fields keyed by name, values left undecoded
pub type FieldMap = hashbrown::HashMap<String, Node>;

fn project<T: DeserializeOwned>(node: &Node, shape: Shape) -> Result<T, DecodeError> {
    serde_json::from_str(node.raw()).map_err(|e| DecodeError::from_serde(shape, node.raw(), &e))
}

/// Decode a JSON string, resolving escape sequences
///
/// # Errors
///
/// Fails if the node is not a string or holds a malformed escape.
pub fn as_string(node: &Node) -> Result<String, DecodeError> {
    project(node, Shape::String)
}

/// Decode a JSON boolean
///
/// # Errors
///
/// Fails if the node is not `true` or `false`.
pub fn as_bool(node: &Node) -> Result<bool, DecodeError> {
    project(node, Shape::Boolean)
}

/// Decode a JSON number that fits in an `i32`
///
/// # Errors
///
/// Fails for non-numbers, fractional numbers and values outside `i32` range.
pub fn as_i32(node: &Node) -> Result<i32, DecodeError> {
    project(node, Shape::Integer32)
}

/// Decode a JSON array into its element nodes, in document order
///
/// # Errors
///
/// Fails if the node is not an array.
pub fn as_nodes(node: &Node) -> Result<Vec<Node>, DecodeError> {
    project(node, Shape::Array)
}

/// Decode a JSON object into its field nodes
///
/// A name repeated within one object keeps its last value.
///
/// # Errors
///
/// Fails if the node is not an object.
pub fn as_field_map(node: &Node) -> Result<FieldMap, DecodeError> {
    project(node, Shape::Object)
}

/// Decode a JSON array whose every element is an object
///
/// # Errors
///
/// Fails if the node is not an array, or if any element is not an object.
pub fn as_field_maps(node: &Node) -> Result<Vec<FieldMap>, DecodeError> {
    project(node, Shape::ArrayOfObjects)
}

/// Decode the node into any serde target
///
/// # Errors
///
/// Fails with the serde message when the node does not match `T`.
pub fn deserialize<T: DeserializeOwned>(node: &Node) -> Result<T, DecodeError> {
    project(node, Shape::Typed(std::any::type_name::<T>()))
}
