//! Macros for declaring validator sequences with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validators!`] - Box a list of validators into one ordered sequence
//! - [`spec!`] - Build a whole `ValidationSpec` from `attr => [..]` pairs

// ============================================================================
// VALIDATORS MACRO
// ============================================================================

/// Boxes each validator and collects them, in order, into a `Vec`.
///
/// The result feeds [`SpecBuilder::attribute`](crate::composer::SpecBuilder::attribute).
/// Validators of different concrete types (built-ins, closures, custom
/// structs) can be mixed.
///
/// # Examples
///
/// ```rust
/// use attrcheck_validator::prelude::*;
///
/// let spec = ValidationSpec::<()>::builder()
///     .attribute("payload", validators![required(), json()])
///     .build()?;
/// assert_eq!(spec.validator_count("payload"), Some(2));
/// # Ok::<(), ConfigError>(())
/// ```
#[macro_export]
macro_rules! validators {
    ($($validator:expr),* $(,)?) => {
        ::std::vec![
            $($crate::foundation::AttributeValidatorExt::boxed($validator)),*
        ]
    };
}

// ============================================================================
// SPEC MACRO
// ============================================================================

/// Builds a `ValidationSpec` from `"attribute" => [validators...]` pairs.
///
/// Expands to a builder chain and evaluates to
/// `Result<ValidationSpec<_>, ConfigError>`, so an empty invocation reports
/// [`ConfigError::EmptySpec`](crate::foundation::ConfigError::EmptySpec).
///
/// # Examples
///
/// ```rust
/// use attrcheck_validator::prelude::*;
///
/// let spec: ValidationSpec<()> = spec! {
///     "name" => [required()],
///     "age" => [required(), json().with_error("bad age")],
/// }?;
/// assert_eq!(spec.len(), 2);
/// # Ok::<(), ConfigError>(())
/// ```
#[macro_export]
macro_rules! spec {
    ($($attribute:expr => [$($validator:expr),* $(,)?]),* $(,)?) => {
        $crate::composer::SpecBuilder::new()
            $(.attribute($attribute, $crate::validators![$($validator),*]))*
            .build()
    };
}
