//! Traversal Configuration Module
//!
//! Per-chain settings: how `end` treats a multi-node working set, how large a
//! document `start` accepts, and whether operations log at debug level.

use super::validation::{ConfigDefaults, ConfigResult, ConfigValidator, Validator};

/// How `end` serializes a working set holding more than one node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndPolicy {
    /// Serialize the first node and drop the rest with a warning
    #[default]
    First,
    /// Fail with `WrongWorkingSetSize` unless exactly one node remains
    RequireSingleton,
}

/// Runtime traversal configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalConfig {
    pub end_policy: EndPolicy,
    /// Documents longer than this are rejected by `start`; `None` is unlimited
    pub max_document_bytes: Option<usize>,
    /// Log every operation at debug level instead of trace
    pub debug: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            end_policy: EndPolicy::First,
            max_document_bytes: None,
            debug: ConfigDefaults::DEFAULT_DEBUG,
        }
    }
}

impl TraversalConfig {
    /// Create a configuration that never silently drops data
    #[must_use]
    pub fn strict() -> Self {
        Self {
            end_policy: EndPolicy::RequireSingleton,
            max_document_bytes: Some(ConfigDefaults::DEFAULT_MAX_DOCUMENT_BYTES),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_end_policy(mut self, end_policy: EndPolicy) -> Self {
        self.end_policy = end_policy;
        self
    }

    #[must_use]
    pub fn with_max_document_bytes(mut self, limit: usize) -> Self {
        self.max_document_bytes = Some(limit);
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Validator for TraversalConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(limit) = self.max_document_bytes {
            ConfigValidator::validate_size(limit, "max_document_bytes")?;
        }
        Ok(())
    }
}
