//! Core traversal state with public API
//!
//! This module holds the [`Traversal`] value every operation consumes and
//! produces, the constructors that begin a chain, and the single stepping
//! routine that enforces the absorbing-error and non-empty rules for all
//! operations.

use std::sync::Arc;

use crate::config::{TraversalConfig, Validator};
use crate::error::{TraversalError, TraversalResult};
use crate::node::Node;
use crate::telemetry::TraversalStats;

/// Evaluation frontier of a chain
///
/// `Errored` is absorbing: once entered, no operation leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainState {
    /// Ordered working set; order is significant and duplicates are allowed
    Active(Vec<Node>),
    /// First failure observed by the chain
    Errored(TraversalError),
}

/// Fluent traversal over a JSON document
///
/// Every operation takes the traversal by value and returns the next one, so a
/// query reads as one expression and intermediate results never need checking:
///
/// ```
/// use traverse_core::Traversal;
///
/// let mut out = Vec::new();
/// Traversal::start(r#"{"name":"tagging","category":"http"}"#)
///     .object_key("category")
///     .end(&mut out)?;
/// assert_eq!(out, br#""http""#);
/// # Ok::<(), traverse_core::TraversalError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Traversal {
    pub(crate) state: ChainState,
    pub(crate) config: TraversalConfig,
    pub(crate) stats: Option<Arc<TraversalStats>>,
}

impl Traversal {
    /// Begin a traversal over `data` with the default configuration
    ///
    /// `data` must hold exactly one complete JSON value. If it does not, the
    /// returned traversal is already errored with
    /// [`TraversalError::InvalidDocument`].
    #[must_use]
    pub fn start(data: impl AsRef<[u8]>) -> Self {
        Self::start_with(data, TraversalConfig::default())
    }

    /// Begin a traversal over `data` with an explicit configuration
    ///
    /// A configuration that fails [`Validator::validate`] errors the chain with
    /// [`TraversalError::Configuration`] before the document is read.
    #[must_use]
    pub fn start_with(data: impl AsRef<[u8]>, config: TraversalConfig) -> Self {
        let data = data.as_ref();

        let state = if let Err(error) = config.validate() {
            ChainState::Errored(error.into())
        } else {
            match config.max_document_bytes {
                Some(limit) if data.len() > limit => {
                    ChainState::Errored(TraversalError::invalid_document(format!(
                        "document of {} bytes exceeds limit of {limit} bytes",
                        data.len()
                    )))
                }
                _ => match Node::parse(data) {
                    Ok(node) => ChainState::Active(vec![node]),
                    Err(e) => ChainState::Errored(TraversalError::from_parse(&e)),
                },
            }
        };

        let traversal = Self {
            state,
            config,
            stats: None,
        };
        traversal.log_start(data.len());
        traversal
    }

    /// Attach shared statistics; counts this chain as started
    #[must_use]
    pub fn with_stats(mut self, stats: Arc<TraversalStats>) -> Self {
        stats.record_start();
        if self.is_errored() {
            stats.record_error();
        }
        self.stats = Some(stats);
        self
    }

    /// Enable or disable debug-level logging of each operation
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.config.debug = enabled;
        self
    }

    /// Current chain state
    #[must_use]
    pub fn state(&self) -> &ChainState {
        &self.state
    }

    /// Configuration this chain was started with
    #[must_use]
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Working set, or `None` once errored
    #[must_use]
    pub fn nodes(&self) -> Option<&[Node]> {
        match &self.state {
            ChainState::Active(nodes) => Some(nodes),
            ChainState::Errored(_) => None,
        }
    }

    /// Terminal error, if any
    #[must_use]
    pub fn error(&self) -> Option<&TraversalError> {
        match &self.state {
            ChainState::Active(_) => None,
            ChainState::Errored(error) => Some(error),
        }
    }

    #[must_use]
    pub fn is_errored(&self) -> bool {
        matches!(self.state, ChainState::Errored(_))
    }

    /// Working-set size; zero once errored
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes().map_or(0, <[Node]>::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finish the chain without serializing, yielding the working set
    ///
    /// # Errors
    ///
    /// Returns the chain's terminal error if it has one.
    pub fn into_result(self) -> TraversalResult<Vec<Node>> {
        match self.state {
            ChainState::Active(nodes) => Ok(nodes),
            ChainState::Errored(error) => Err(error),
        }
    }

    /// Apply one operation to the working set
    ///
    /// An errored chain is returned untouched and `operation` is never called.
    /// When `require_non_empty` is set, an empty result becomes
    /// [`TraversalError::EmptyWorkingSet`].
    pub(crate) fn step<F>(mut self, operation: &'static str, require_non_empty: bool, f: F) -> Self
    where
        F: FnOnce(Vec<Node>) -> TraversalResult<Vec<Node>>,
    {
        let nodes = match std::mem::replace(&mut self.state, ChainState::Active(Vec::new())) {
            ChainState::Active(nodes) => nodes,
            errored @ ChainState::Errored(_) => {
                self.state = errored;
                return self;
            }
        };

        let incoming = nodes.len();
        let next = match f(nodes) {
            Ok(nodes) if require_non_empty && nodes.is_empty() => {
                Err(TraversalError::EmptyWorkingSet)
            }
            other => other,
        };

        match next {
            Ok(nodes) => {
                self.log_step(operation, incoming, nodes.len());
                if let Some(stats) = &self.stats {
                    stats.record_operation(nodes.len());
                }
                self.state = ChainState::Active(nodes);
            }
            Err(error) => {
                tracing::debug!(operation, incoming, %error, "traversal errored");
                if let Some(stats) = &self.stats {
                    stats.record_error();
                }
                self.state = ChainState::Errored(error);
            }
        }
        self
    }

    fn log_start(&self, bytes: usize) {
        match &self.state {
            ChainState::Active(_) if self.config.debug => {
                tracing::debug!(bytes, "traversal started");
            }
            ChainState::Active(_) => tracing::trace!(bytes, "traversal started"),
            ChainState::Errored(error) => {
                tracing::debug!(bytes, %error, "traversal rejected document");
            }
        }
    }

    fn log_step(&self, operation: &'static str, incoming: usize, outgoing: usize) {
        if self.config.debug {
            tracing::debug!(operation, incoming, outgoing, "traversal step");
        } else {
            tracing::trace!(operation, incoming, outgoing, "traversal step");
        }
    }
}
