//! JSON string validator.
//!
//! Validates that an attribute holds a string containing well-formed JSON.

use crate::foundation::{AttributeValidator, AttributeValue, ValidationError};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Default message of [`Json`].
pub const DEFAULT_JSON_ERROR: &str = "invalid json";

/// Configuration for [`Json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    /// Message reported for a non-string or malformed value.
    /// Defaults to `"invalid json"`.
    pub error: Cow<'static, str>,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            error: Cow::Borrowed(DEFAULT_JSON_ERROR),
        }
    }
}

/// Validates JSON text.
///
/// Any RFC 8259 value is accepted, including top-level primitives such as
/// `42` or `"abc"`. The text is walked with `serde_json` into
/// [`IgnoredAny`], so nothing is materialised or kept.
///
/// Non-string values (including an absent attribute) fail.
///
/// # Examples
///
/// ```
/// use attrcheck_validator::foundation::{AttributeValidator, AttributeValue};
/// use attrcheck_validator::validators::json;
///
/// let v = json();
/// let check = |s: &str| AttributeValidator::<()>::validate(&v, Some(&AttributeValue::from(s)), "doc", &());
///
/// assert!(check(r#"{"name": "John"}"#).is_ok());
/// assert!(check("[1, 2, 3]").is_ok());
/// assert!(check(r#""string""#).is_ok());
/// assert!(check("{").is_err());
/// assert!(check("undefined").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Json {
    error: Cow<'static, str>,
}

impl Json {
    /// Creates the validator from its configuration.
    #[must_use]
    pub fn new(config: JsonConfig) -> Self {
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

    fn failure(&self, reason: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new("invalid_json", self.error.clone()).with_param("reason", reason)
    }
}

impl Default for Json {
    fn default() -> Self {
        Self::new(JsonConfig::default())
    }
}

impl<H: ?Sized> AttributeValidator<H> for Json {
    fn validate(
        &self,
        value: Option<&AttributeValue>,
        _attribute: &str,
        _host: &H,
    ) -> Result<(), ValidationError> {
        let Some(text) = value.and_then(AttributeValue::as_str) else {
            let kind = value.map_or("absent", AttributeValue::kind);
            return Err(self.failure(format!("expected string, got {kind}")));
        };

        serde_json::from_str::<IgnoredAny>(text)
            .map(|_| ())
            .map_err(|e| self.failure(e.to_string()))
    }
}

/// Creates a [`Json`] validator reporting `"invalid json"`.
#[must_use]
pub fn json() -> Json {
    Json::default()
}

/// Creates a [`Json`] validator from explicit configuration.
#[must_use]
pub fn json_with(config: JsonConfig) -> Json {
    Json::new(config)
}
