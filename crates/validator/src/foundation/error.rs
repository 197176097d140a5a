//! Error types for validation failures and setup-time faults.
//!
//! Two classes of error live here and are never mixed:
//!
//! - [`ValidationError`] / [`AttributeErrors`] describe *data*: an attribute
//!   value that did not pass. They are returned, never raised.
//! - [`ConfigError`] describes a malformed specification. It can only occur
//!   while building a [`ValidationSpec`](crate::composer::ValidationSpec).
//!
//! All string fields use `Cow<'static, str>` so the built-in descriptors
//! (`"required"`, `"invalid json"`, ...) never allocate.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The error descriptor produced by a failing validator.
///
/// The composer treats it as opaque. Built-in validators set `code` to their
/// kind and `message` to the configured error string.
///
/// # Examples
///
/// ```rust
/// use attrcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("required", "name is required")
///     .with_field("name")
///     .with_param("min", "1");
///
/// assert_eq!(error.code, "required");
/// assert_eq!(error.param("min"), Some("1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "invalid", "invalid_json"
    pub code: Cow<'static, str>,

    /// Human-readable message; for built-ins this is the configured `error`.
    pub message: Cow<'static, str>,

    /// Attribute the error belongs to, if the validator chose to set it.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR MAPPING
// ============================================================================

/// Attribute name to the first error recorded for it during one pass.
///
/// Only failed attributes appear. Iteration follows the order in which the
/// attributes were checked, which is the specification order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeErrors {
    errors: IndexMap<String, ValidationError>,
}

impl AttributeErrors {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    /// Records `error` for `attribute`, replacing any earlier entry.
    pub fn insert(&mut self, attribute: impl Into<String>, error: ValidationError) {
        self.errors.insert(attribute.into(), error);
    }

    /// Returns the error recorded for `attribute`.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&ValidationError> {
        self.errors.get(attribute)
    }

    /// Returns true if `attribute` failed.
    #[must_use]
    pub fn contains(&self, attribute: &str) -> bool {
        self.errors.contains_key(attribute)
    }

    /// Returns the number of failed attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no attribute failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over `(attribute, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Names of the failed attributes.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Attribute name to error message, handy for display layers and tests.
    #[must_use]
    pub fn messages(&self) -> IndexMap<&str, &str> {
        self.errors
            .iter()
            .map(|(k, v)| (k.as_str(), v.message.as_ref()))
            .collect()
    }

    /// `None` when empty, the mapping otherwise.
    #[must_use]
    pub fn into_option(self) -> Option<Self> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl IntoIterator for AttributeErrors {
    type Item = (String, ValidationError);
    type IntoIter = indexmap::map::IntoIter<String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for AttributeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed for {} attribute(s):", self.errors.len())?;
        for (attribute, error) in &self.errors {
            writeln!(f, "  {attribute}: {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AttributeErrors {}

// ============================================================================
// CONFIGURATION FAULTS
// ============================================================================

/// A malformed validation specification.
///
/// Raised while building a specification, before any validation pass runs.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The specification names no attributes.
    #[error("validation specification must not be empty")]
    EmptySpec,

    /// An attribute was declared with no validators.
    #[error("attribute '{attribute}' has no validators")]
    EmptyValidators {
        /// The offending attribute.
        attribute: String,
    },

    /// The same attribute was declared twice.
    #[error("attribute '{attribute}' is declared more than once")]
    DuplicateAttribute {
        /// The offending attribute.
        attribute: String,
    },

    /// Declarative rules could not be parsed.
    #[error("invalid validation rules: {0}")]
    InvalidRules(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================
