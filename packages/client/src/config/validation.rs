//! Configuration Validation
//!
//! Validation trait, error type and shared checks.

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid size limit: {0}")]
    InvalidSize(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidSize` - if a size limit is zero or exceeds the hard ceiling
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Hard ceiling for in-memory documents (4GB)
    pub const MAX_DOCUMENT_CEILING: u64 = 4 * 1024 * 1024 * 1024;

    /// Validate a byte-size limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidSize` if:
    /// - The size is zero
    /// - The size exceeds [`Self::MAX_DOCUMENT_CEILING`]
    pub fn validate_size(size: usize, name: &str) -> ConfigResult<()> {
        if size == 0 {
            return Err(ConfigurationError::InvalidSize(format!(
                "{name} cannot be zero"
            )));
        }

        if u64::try_from(size).unwrap_or(u64::MAX) > Self::MAX_DOCUMENT_CEILING {
            return Err(ConfigurationError::InvalidSize(format!(
                "{name} cannot exceed 4GB"
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 64 * 1024 * 1024;
    pub const DEFAULT_DEBUG: bool = false;
}
