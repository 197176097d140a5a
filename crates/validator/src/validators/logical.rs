//! Unconditional validators: [`Valid`] always passes, [`Invalid`] always fails.
//!
//! `valid()` is a placeholder that keeps an attribute in the specification
//! (so it still receives notifications) without constraining it. `invalid()`
//! rejects an attribute outright, e.g. a field that is switched off.

use crate::foundation::{AttributeValidator, AttributeValue, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Default message of [`Invalid`].
pub const DEFAULT_INVALID_ERROR: &str = "invalid";

// ============================================================================
// VALID
// ============================================================================

/// Accepts every value, including an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Valid;

impl<H: ?Sized> AttributeValidator<H> for Valid {
    fn validate(
        &self,
        _value: Option<&AttributeValue>,
        _attribute: &str,
        _host: &H,
    ) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Creates a [`Valid`] validator.
#[must_use]
pub fn valid() -> Valid {
    Valid
}

// ============================================================================
// INVALID
// ============================================================================

/// Configuration for [`Invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvalidConfig {
    /// Message reported for every value. Defaults to `"invalid"`.
    pub error: Cow<'static, str>,
}

impl Default for InvalidConfig {
    fn default() -> Self {
        Self {
            error: Cow::Borrowed(DEFAULT_INVALID_ERROR),
        }
    }
}

/// Rejects every value with the configured error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalid {
    error: Cow<'static, str>,
}

impl Invalid {
    /// Creates the validator from its configuration.
    #[must_use]
    pub fn new(config: InvalidConfig) -> Self {
        Self {
            error: config.error,
        }
    }

    /// Replaces the reported message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, error: impl Into<Cow<'static, str>>) -> Self {
        self.error = error.into();
        self
    }
}

impl Default for Invalid {
    fn default() -> Self {
        Self::new(InvalidConfig::default())
    }
}

impl<H: ?Sized> AttributeValidator<H> for Invalid {
    fn validate(
        &self,
        _value: Option<&AttributeValue>,
        _attribute: &str,
        _host: &H,
    ) -> Result<(), ValidationError> {
        Err(ValidationError::new("invalid", self.error.clone()))
    }
}

/// Creates an [`Invalid`] validator reporting `"invalid"`.
#[must_use]
pub fn invalid() -> Invalid {
    Invalid::default()
}

/// Creates an [`Invalid`] validator from explicit configuration.
#[must_use]
pub fn invalid_with(config: InvalidConfig) -> Invalid {
    Invalid::new(config)
}
