//! Conversions from std and serde errors into traversal errors

use super::types::{DecodeError, Shape, TraversalError};

/// Conversion from `std::io::Error` raised by an output sink
impl From<std::io::Error> for TraversalError {
    fn from(error: std::io::Error) -> Self {
        TraversalError::Io(error.to_string())
    }
}

impl TraversalError {
    /// Convert a document parse failure, keeping line/column when serde reports one
    pub(crate) fn from_parse(error: &serde_json::Error) -> Self {
        let line = error.line();
        if line > 0 {
            TraversalError::InvalidDocument(format!(
                "{} (line {}, column {})",
                error,
                line,
                error.column()
            ))
        } else {
            TraversalError::InvalidDocument(error.to_string())
        }
    }
}

impl DecodeError {
    /// Convert a serde failure raised while projecting `raw` as `shape`
    pub(crate) fn from_serde(shape: Shape, raw: &str, error: &serde_json::Error) -> Self {
        DecodeError::new(shape, raw, error.to_string())
    }
}
