//! Core traits for the validation system
//!
//! This module defines the trait every per-attribute validator implements.

use crate::foundation::{AttributeValue, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A single-attribute validator.
///
/// Generic over the host type `H` so validators can inspect other state on
/// the record for cross-field checks. The host and the validator itself are
/// only borrowed immutably, so a validator cannot mutate either.
///
/// # Arguments
///
/// * `value` - The candidate value, `None` if the attribute is absent
/// * `attribute` - Name of the attribute being validated
/// * `host` - The record the candidate set belongs to
///
/// # Examples
///
/// ```rust
/// use attrcheck_validator::foundation::{AttributeValidator, AttributeValue, ValidationError};
///
/// struct NonNegative;
///
/// impl<H: ?Sized> AttributeValidator<H> for NonNegative {
///     fn validate(
///         &self,
///         value: Option<&AttributeValue>,
///         _attribute: &str,
///         _host: &H,
///     ) -> Result<(), ValidationError> {
///         match value.and_then(AttributeValue::as_f64) {
///             Some(n) if n < 0.0 => Err(ValidationError::new("negative", "must be >= 0")),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// let v = NonNegative;
/// assert!(v.validate(Some(&AttributeValue::from(-1)), "age", &()).is_err());
/// assert!(v.validate(Some(&AttributeValue::from(3)), "age", &()).is_ok());
/// ```
pub trait AttributeValidator<H: ?Sized> {
    /// Validates one candidate value.
    ///
    /// Returns `Ok(())` if the value is acceptable, or the error descriptor
    /// explaining why it is not.
    fn validate(
        &self,
        value: Option<&AttributeValue>,
        attribute: &str,
        host: &H,
    ) -> Result<(), ValidationError>;
}

/// Any matching closure is a validator.
impl<H, F> AttributeValidator<H> for F
where
    H: ?Sized,
    F: Fn(Option<&AttributeValue>, &str, &H) -> Result<(), ValidationError>,
{
    fn validate(
        &self,
        value: Option<&AttributeValue>,
        attribute: &str,
        host: &H,
    ) -> Result<(), ValidationError> {
        self(value, attribute, host)
    }
}

/// A type-erased validator as stored in a specification.
pub type BoxedValidator<H> = Box<dyn AttributeValidator<H> + Send + Sync>;

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Convenience methods for every [`AttributeValidator`].
pub trait AttributeValidatorExt<H: ?Sized>: AttributeValidator<H> + Sized {
    /// Erases the concrete type so validators of different kinds can share
    /// one sequence.
    fn boxed(self) -> BoxedValidator<H>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<H: ?Sized, T: AttributeValidator<H>> AttributeValidatorExt<H> for T {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl<H: ?Sized> AttributeValidator<H> for AlwaysValid {
        fn validate(
            &self,
            _value: Option<&AttributeValue>,
            _attribute: &str,
            _host: &H,
        ) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate(None, "name", &()).is_ok());
    }

    #[test]
    fn test_closure_receives_attribute_and_host() {
        let v = |_: Option<&AttributeValue>, attribute: &str, host: &u32| {
            if *host == 7 && attribute == "name" {
                Err(ValidationError::custom("seen"))
            } else {
                Ok(())
            }
        };
        assert!(v.validate(None, "name", &7).is_err());
        assert!(v.validate(None, "other", &7).is_ok());
    }

    #[test]
    fn test_boxed_delegates() {
        let boxed: BoxedValidator<()> = AlwaysValid.boxed();
        assert!(boxed.validate(None, "x", &()).is_ok());
    }
}
