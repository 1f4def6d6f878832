//! Document nodes
//!
//! A [`Node`] is an immutable handle to the text of one JSON value inside an
//! already validated document. Nothing is decoded until a caller projects the
//! node through one of the functions in [`decode`].
//!
//! The root node keeps the document exactly as supplied, whitespace included,
//! so `start` followed by `end` is byte for byte. Nodes taken out of the
//! document hold only the value's own text.

pub mod decode;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

pub use decode::FieldMap;

/// Coarse classification of a node, read from its first byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

/// Unclassified JSON value, kept as raw document text
#[derive(Clone)]
pub struct Node(Box<str>);

impl Node {
    /// Parse `bytes` as exactly one JSON value
    ///
    /// Surrounding whitespace is accepted and kept; anything else after the
    /// value is an error.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `bytes` is not well-formed JSON.
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice::<serde::de::IgnoredAny>(bytes)?;
        let text = std::str::from_utf8(bytes)
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(Node(text.into()))
    }

    /// Synthesize a node from any serializable value
    ///
    /// Used by selectors that hand the chain a value not present in the source
    /// document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `value` cannot be serialized.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::value::to_raw_value(value).map(Node::from)
    }

    /// Raw JSON text of this node
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Raw JSON bytes of this node
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Length of the raw text in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a parsed node; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Classify the node without decoding it
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.0.trim_start().as_bytes().first() {
            Some(b'{') => NodeKind::Object,
            Some(b'[') => NodeKind::Array,
            Some(b'"') => NodeKind::String,
            Some(b't' | b'f') => NodeKind::Boolean,
            Some(b'n') => NodeKind::Null,
            _ => NodeKind::Number,
        }
    }

    /// Fully decode into a `serde_json::Value`
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`](crate::error::DecodeError) if the text cannot
    /// be represented as a `Value` (for example a number out of range).
    pub fn to_value(&self) -> Result<serde_json::Value, crate::error::DecodeError> {
        decode::deserialize(self)
    }
}

impl From<Box<RawValue>> for Node {
    fn from(raw: Box<RawValue>) -> Self {
        Node(raw.into())
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Box::<RawValue>::deserialize(deserializer).map(Node::from)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw: &RawValue = serde_json::from_str(&self.0).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.raw() == other.raw()
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.raw()).finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}

impl AsRef<[u8]> for Node {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
