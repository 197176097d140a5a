//! Declarative validation rules loaded from configuration.
//!
//! A [`RuleSet`] is the serializable form of a specification restricted to
//! the built-in validators. Each rule is tagged by `kind` and carries the
//! options of that kind; unknown keys are ignored and missing ones take the
//! documented defaults.
//!
//! ```json
//! {
//!   "name": [{ "kind": "required" }],
//!   "age":  [{ "kind": "required" }, { "kind": "json", "error": "bad age" }]
//! }
//! ```

use crate::composer::{Composer, ValidationSpec, compose};
use crate::foundation::{
    AttributeValidator, AttributeValue, BoxedValidator, ConfigError, ValidationError,
};
use crate::validators::{
    Invalid, InvalidConfig, Json, JsonConfig, Required, RequiredConfig, Valid,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// RULE
// ============================================================================

/// One built-in validator and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// See [`valid`](crate::validators::valid).
    Valid,
    /// See [`invalid`](crate::validators::invalid).
    Invalid(InvalidConfig),
    /// See [`required`](crate::validators::required).
    Required(RequiredConfig),
    /// See [`json`](crate::validators::json).
    Json(JsonConfig),
}

impl Rule {
    /// The `kind` tag of this rule.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid(_) => "invalid",
            Self::Required(_) => "required",
            Self::Json(_) => "json",
        }
    }

    /// Instantiates the validator this rule describes.
    #[must_use]
    pub fn into_validator<H: ?Sized>(self) -> BoxedValidator<H> {
        match self {
            Self::Valid => Box::new(Valid),
            Self::Invalid(config) => Box::new(Invalid::new(config)),
            Self::Required(config) => Box::new(Required::new(config)),
            Self::Json(config) => Box::new(Json::new(config)),
        }
    }
}

impl<H: ?Sized> AttributeValidator<H> for Rule {
    fn validate(
        &self,
        value: Option<&AttributeValue>,
        attribute: &str,
        host: &H,
    ) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Valid.validate(value, attribute, host),
            Self::Invalid(config) => Invalid::new(config.clone()).validate(value, attribute, host),
            Self::Required(config) => {
                Required::new(config.clone()).validate(value, attribute, host)
            }
            Self::Json(config) => Json::new(config.clone()).validate(value, attribute, host),
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Attribute name to ordered rules, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    attributes: IndexMap<String, Vec<Rule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a rule set from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a rule set from an already decoded JSON value.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Appends `rule` to `attribute`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, attribute: impl Into<String>, rule: Rule) -> Self {
        self.attributes
            .entry(attribute.into())
            .or_default()
            .push(rule);
        self
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if no attribute is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The rules declared for `attribute`.
    #[must_use]
    pub fn rules(&self, attribute: &str) -> Option<&[Rule]> {
        self.attributes.get(attribute).map(Vec::as_slice)
    }

    /// Serializes the rule set back to JSON text.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Converts into a checked specification.
    pub fn into_spec<H: ?Sized>(self) -> Result<ValidationSpec<H>, ConfigError> {
        let attributes = self
            .attributes
            .into_iter()
            .map(|(name, rules)| {
                let seq = rules.into_iter().map(Rule::into_validator).collect();
                (name, seq)
            })
            .collect();
        ValidationSpec::from_map(attributes)
    }

    /// Converts and composes in one step.
    pub fn compose<H: ?Sized>(self) -> Result<Composer<H>, ConfigError> {
        let spec = self.into_spec()?;
        tracing::debug!(attributes = spec.len(), "composed validator from rule set");
        Ok(compose(spec))
    }
}
