//! Script step definitions
//!
//! A step is one JSON object naming a traversal operation and its arguments,
//! e.g. `{"name": "object-key", "key": "configs"}`.

use std::fmt;

use serde::Deserialize;
use traverse_core::{DecodeError, Node};
use traverse_core::node::decode;

/// One scripted traversal operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum Step {
    /// Begin the traversal over the data document
    Start,
    /// Descend into field `key` of every node
    ObjectKey { key: String },
    /// Explode the singleton array into the working set
    ArraySlice,
    /// Select element `index` of the singleton array
    ArrayIndex { index: usize },
    /// Unwrap a one-element array
    ArraySingleton,
    /// Log string field `key` of every node
    Inspect { key: String },
    /// Keep objects whose string field `key` equals `value`
    Filter { key: String, value: String },
    /// Serialize the result and stop
    End,
    /// Any step name not listed above; logged and skipped
    #[serde(other)]
    Unknown,
}

impl Step {
    /// Step name as written in scripts
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Step::Start => "start",
            Step::ObjectKey { .. } => "object-key",
            Step::ArraySlice => "array-slice",
            Step::ArrayIndex { .. } => "array-index",
            Step::ArraySingleton => "array-singleton",
            Step::Inspect { .. } => "inspect",
            Step::Filter { .. } => "filter",
            Step::End => "end",
            Step::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ObjectKey { key } | Step::Inspect { key } => write!(f, "{}({key})", self.name()),
            Step::ArrayIndex { index } => write!(f, "{}({index})", self.name()),
            Step::Filter { key, value } => write!(f, "{}({key} == {value})", self.name()),
            _ => f.write_str(self.name()),
        }
    }
}

/// String value of field `key` in an object node; `None` when the field is absent
pub(crate) fn string_field(node: &Node, key: &str) -> Result<Option<String>, DecodeError> {
    let fields = decode::as_field_map(node)?;
    fields.get(key).map(decode::as_string).transpose()
}
