//! Composes per-attribute validator sequences into one aggregation pass.
//!
//! A [`ValidationSpec`] maps attribute names to ordered validator
//! sequences. [`compose`] turns it into a [`Composer`], whose
//! [`validate`](Composer::validate) runs one pass over a candidate
//! attribute set:
//!
//! - attributes are visited in specification order, absent candidates are
//!   validated as `None` rather than skipped;
//! - within an attribute, validators run in order and the first failure
//!   stops the sequence;
//! - each attribute produces exactly one [`ValidationEvent`] on the host;
//! - the result is `None` when everything passed, otherwise the mapping of
//!   failed attributes to their first error.
//!
//! Malformed specifications are rejected by [`SpecBuilder::build`], so a
//! constructed `Composer` never fails. A validator that panics is not
//! caught.
//!
//! # Examples
//!
//! ```rust
//! use attrcheck_validator::prelude::*;
//! use std::collections::HashMap;
//!
//! let composer = compose(
//!     ValidationSpec::<()>::builder()
//!         .attribute("name", validators![required()])
//!         .attribute("age", validators![required(), json().with_error("bad age")])
//!         .build()?,
//! );
//!
//! let mut candidates = HashMap::new();
//! candidates.insert("name".to_string(), AttributeValue::from(""));
//! candidates.insert("age".to_string(), AttributeValue::from("42"));
//!
//! let errors = composer.validate(&(), &candidates).expect("name is empty");
//! assert_eq!(errors.get("name").map(|e| e.message.as_ref()), Some("required"));
//! assert!(!errors.contains("age"));
//! # Ok::<(), attrcheck_validator::foundation::ConfigError>(())
//! ```

use crate::foundation::{
    AttributeErrors, AttributeSource, AttributeValidator, AttributeValue, BoxedValidator,
    ConfigError, ValidationError,
};
use crate::host::{Notify, ValidationEvent};
use indexmap::IndexMap;
use std::fmt;

// ============================================================================
// VALIDATION SPECIFICATION
// ============================================================================

/// Immutable mapping of attribute name to its ordered validator sequence.
///
/// Guaranteed non-empty, and every attribute has at least one validator.
pub struct ValidationSpec<H: ?Sized> {
    attributes: IndexMap<String, Vec<BoxedValidator<H>>>,
}

impl<H: ?Sized> ValidationSpec<H> {
    /// Starts building a specification.
    #[must_use]
    pub fn builder() -> SpecBuilder<H> {
        SpecBuilder::new()
    }

    /// Checks and wraps an already assembled mapping.
    pub fn from_map(
        attributes: IndexMap<String, Vec<BoxedValidator<H>>>,
    ) -> Result<Self, ConfigError> {
        if attributes.is_empty() {
            return Err(ConfigError::EmptySpec);
        }
        if let Some((attribute, _)) = attributes.iter().find(|(_, seq)| seq.is_empty()) {
            return Err(ConfigError::EmptyValidators {
                attribute: attribute.clone(),
            });
        }
        Ok(Self { attributes })
    }

    /// Number of specified attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false for a built specification.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute names in specification order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Number of validators declared for `attribute`.
    #[must_use]
    pub fn validator_count(&self, attribute: &str) -> Option<usize> {
        self.attributes.get(attribute).map(Vec::len)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[BoxedValidator<H>])> {
        self.attributes
            .iter()
            .map(|(name, seq)| (name.as_str(), seq.as_slice()))
    }
}

impl<H: ?Sized> fmt::Debug for ValidationSpec<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.attributes
                    .iter()
                    .map(|(name, seq)| (name, format!("<{} validator(s)>", seq.len()))),
            )
            .finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`ValidationSpec`].
///
/// Errors are deferred to [`build`](Self::build) so declarations can be
/// chained.
pub struct SpecBuilder<H: ?Sized> {
    attributes: IndexMap<String, Vec<BoxedValidator<H>>>,
    duplicate: Option<String>,
}

impl<H: ?Sized> SpecBuilder<H> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: IndexMap::new(),
            duplicate: None,
        }
    }

    /// Declares `name` with its ordered validator sequence.
    ///
    /// Declaring the same attribute twice is a configuration error.
    #[must_use = "builder methods must be chained or built"]
    pub fn attribute<I>(mut self, name: impl Into<String>, validators: I) -> Self
    where
        I: IntoIterator<Item = BoxedValidator<H>>,
    {
        let name = name.into();
        if self.attributes.contains_key(&name) {
            self.duplicate.get_or_insert(name);
        } else {
            self.attributes
                .insert(name, validators.into_iter().collect());
        }
        self
    }

    /// Appends one validator to `name`, declaring the attribute if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: AttributeValidator<H> + Send + Sync + 'static,
    {
        self.attributes
            .entry(name.into())
            .or_default()
            .push(Box::new(validator));
        self
    }

    /// Finishes the specification.
    pub fn build(self) -> Result<ValidationSpec<H>, ConfigError> {
        if let Some(attribute) = self.duplicate {
            return Err(ConfigError::DuplicateAttribute { attribute });
        }
        ValidationSpec::from_map(self.attributes)
    }
}

impl<H: ?Sized> Default for SpecBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// COMPOSER
// ============================================================================

/// The aggregation function built from a [`ValidationSpec`].
///
/// Holds no per-call state: the same `Composer` can validate any number of
/// hosts, from any number of threads.
pub struct Composer<H: ?Sized> {
    spec: ValidationSpec<H>,
}

/// Builds the aggregation function for `spec`.
#[must_use]
pub fn compose<H: ?Sized>(spec: ValidationSpec<H>) -> Composer<H> {
    Composer { spec }
}

impl<H: ?Sized> Composer<H> {
    /// The specification this composer runs.
    #[must_use]
    pub fn spec(&self) -> &ValidationSpec<H> {
        &self.spec
    }
}

impl<H: Notify + ?Sized> Composer<H> {
    /// Runs one validation pass of `candidates` against `host`.
    ///
    /// Returns `None` when every specified attribute passed, otherwise the
    /// first error of each failed attribute. Emits `valid:<attr>` or
    /// `invalid:<attr>` on `host` for every specified attribute.
    pub fn validate<S>(&self, host: &H, candidates: &S) -> Option<AttributeErrors>
    where
        S: AttributeSource + ?Sized,
    {
        let _span = tracing::trace_span!("validate", attributes = self.spec.len()).entered();
        let mut errors = AttributeErrors::new();

        for (attribute, validators) in self.spec.iter() {
            let value = candidates.attribute(attribute);

            match run_sequence(validators, value, attribute, host) {
                Ok(()) => {
                    tracing::trace!(attribute, "attribute passed validation");
                    host.emit(&ValidationEvent::Valid { attribute });
                }
                Err(error) => {
                    tracing::debug!(attribute, code = %error.code, "attribute failed validation");
                    host.emit(&ValidationEvent::Invalid {
                        attribute,
                        error: &error,
                    });
                    errors.insert(attribute, error);
                }
            }
        }

        errors.into_option()
    }

    /// Same pass as [`validate`](Self::validate), shaped as a `Result`.
    pub fn check<S>(&self, host: &H, candidates: &S) -> Result<(), AttributeErrors>
    where
        S: AttributeSource + ?Sized,
    {
        self.validate(host, candidates).map_or(Ok(()), Err)
    }
}

impl<H: ?Sized> fmt::Debug for Composer<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer").field("spec", &self.spec).finish()
    }
}

/// Runs `validators` in order, stopping at the first failure.
fn run_sequence<H: ?Sized>(
    validators: &[BoxedValidator<H>],
    value: Option<&AttributeValue>,
    attribute: &str,
    host: &H,
) -> Result<(), ValidationError> {
    validators
        .iter()
        .try_for_each(|validator| validator.validate(value, attribute, host))
}

// ============================================================================
// TESTS
// ============================================================================
