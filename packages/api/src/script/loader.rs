//! Script loading
//!
//! A script is a JSON array of step objects. Steps are decoded one at a time so
//! an error can name the step that caused it.

use std::path::{Path, PathBuf};

use traverse_core::error::Shape;
use traverse_core::node::decode;
use traverse_core::{DecodeError, Node, NodeKind, TraversalError};

use super::step::{Step, string_field};

/// Script loading and execution errors
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("script is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("script must be an array of step objects: {0}")]
    NotAList(#[source] DecodeError),

    #[error("step #{step}: {source}")]
    InvalidStep {
        step: usize,
        source: DecodeError,
    },

    #[error("step #{step} {name}: {source}")]
    Traversal {
        step: usize,
        name: String,
        source: TraversalError,
    },
}

/// Parsed list of steps, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    /// Build a script from steps already in memory
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parse a script from JSON bytes
    ///
    /// # Errors
    ///
    /// Returns `InvalidJson` for malformed JSON, `NotAList` if the top level is
    /// not an array of objects and `InvalidStep` for a known step with missing or
    /// mistyped arguments.
    pub fn from_slice(data: &[u8]) -> Result<Self, ScriptError> {
        let root = Node::parse(data).map_err(|e| ScriptError::InvalidJson(e.to_string()))?;
        let entries = decode::as_nodes(&root).map_err(ScriptError::NotAList)?;

        let mut steps = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.kind() != NodeKind::Object {
                return Err(ScriptError::NotAList(DecodeError::new(
                    Shape::Object,
                    entry.raw(),
                    format!("step #{} is not an object", i + 1),
                )));
            }
            let step: Step = decode::deserialize(entry)
                .map_err(|source| ScriptError::InvalidStep { step: i + 1, source })?;

            if step == Step::Unknown {
                let name = string_field(entry, "name").ok().flatten().unwrap_or_default();
                log::warn!("#{}: Unknown name: '{name}'", i + 1);
            }
            steps.push(step);
        }

        Ok(Self { steps })
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns `Read` if the file cannot be read, otherwise as [`Script::from_slice`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&data)
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
