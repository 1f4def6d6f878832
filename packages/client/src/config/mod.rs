//! Configuration Architecture
//!
//! Runtime configuration for traversals plus the shared validation layer.

pub mod traversal;
pub mod validation;

pub use traversal::{EndPolicy, TraversalConfig};
pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};
