//! # Traverse Core
//!
//! Chain-evaluation engine for fluent navigation of JSON documents.
//!
//! A document is parsed once into a single [`Node`]; a query is then a chain of
//! small operations applied to a [`Traversal`]:
//!
//! - `object_key` descends into a named field of every node
//! - `array_slice` explodes a singleton array into the working set
//! - `array_index` / `array_singleton` pick array elements
//! - `filter` keeps nodes matching a caller predicate
//! - `selector` hands the working set to a caller transform
//! - `end` serializes the result
//!
//! Each operation may be applied unconditionally: once any step fails, the
//! chain carries that first error through every later step and `end` returns it.
//!
//! ## Usage
//!
//! ```rust
//! use traverse_core::{Traversal, node::decode};
//!
//! let document = br#"[{"A":"a","B":43,"C":true},{"A":"a","B":41,"C":true}]"#;
//!
//! let out = Traversal::start(document)
//!     .array_slice()
//!     .filter(|node| {
//!         decode::as_field_map(node)
//!             .ok()
//!             .and_then(|fields| fields.get("B").and_then(|b| decode::as_i32(b).ok()))
//!             == Some(41)
//!     })
//!     .end_to_string()?;
//!
//! assert_eq!(out, r#"{"A":"a","B":41,"C":true}"#);
//! # Ok::<(), traverse_core::TraversalError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod node;
pub mod telemetry;
pub mod traversal;

pub mod prelude;

pub use crate::prelude::*;
