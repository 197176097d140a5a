//! Presence validator.
//!
//! # Validators
//!
//! - [`Required`] - Validates that an attribute carries a meaningful value
//!
//! # Examples
//!
//! ```rust
//! use attrcheck_validator::foundation::{AttributeValidator, AttributeValue};
//! use attrcheck_validator::validators::required;
//!
//! let v = required();
//! assert!(AttributeValidator::<()>::validate(&v, Some(&AttributeValue::from(0)), "n", &()).is_ok());
//! assert!(AttributeValidator::<()>::validate(&v, Some(&AttributeValue::from("")), "n", &()).is_err());
//! ```

use crate::foundation::{AttributeValidator, AttributeValue, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Default message of [`Required`].
pub const DEFAULT_REQUIRED_ERROR: &str = "required";

/// Configuration for [`Required`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequiredConfig {
    /// Message reported for a missing value. Defaults to `"required"`.
    pub error: Cow<'static, str>,
}

impl Default for RequiredConfig {
    fn default() -> Self {
        Self {
            error: Cow::Borrowed(DEFAULT_REQUIRED_ERROR),
        }
    }
}

/// Validates that an attribute is present and non-empty.
///
/// Fails when the value is:
///
/// - absent from the candidate set, or `Null`
/// - a number that is `NaN`
/// - an empty array or object
/// - an empty string
///
/// `0`, `false` and whitespace-only strings pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    error: Cow<'static, str>,
}

impl Required {
    /// Creates the validator from its configuration.
    #[must_use]
    pub fn new(config: RequiredConfig) -> Self {
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

    fn is_missing(value: Option<&AttributeValue>) -> bool {
        match value {
            None | Some(AttributeValue::Null) => true,
            Some(AttributeValue::Number(n)) => n.is_nan(),
            Some(AttributeValue::String(s)) => s.is_empty(),
            Some(AttributeValue::Array(items)) => items.is_empty(),
            Some(AttributeValue::Object(entries)) => entries.is_empty(),
            Some(AttributeValue::Bool(_)) => false,
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new(RequiredConfig::default())
    }
}

impl<H: ?Sized> AttributeValidator<H> for Required {
    fn validate(
        &self,
        value: Option<&AttributeValue>,
        _attribute: &str,
        _host: &H,
    ) -> Result<(), ValidationError> {
        if Self::is_missing(value) {
            Err(ValidationError::new("required", self.error.clone()))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`Required`] validator reporting `"required"`.
#[must_use]
pub fn required() -> Required {
    Required::default()
}

/// Creates a [`Required`] validator from explicit configuration.
#[must_use]
pub fn required_with(config: RequiredConfig) -> Required {
    Required::new(config)
}
