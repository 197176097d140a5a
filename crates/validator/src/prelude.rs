//! Prelude module for convenient imports.
//!
//! Provides a single `use attrcheck_validator::prelude::*;` import that
//! brings in the traits, types, built-in validators and macros needed to
//! declare and run a specification.
//!
//! # Examples
//!
//! ```rust
//! use attrcheck_validator::prelude::*;
//!
//! let composer = compose(
//!     ValidationSpec::<()>::builder()
//!         .rule("title", required())
//!         .build()?,
//! );
//! assert_eq!(composer.spec().len(), 1);
//! # Ok::<(), ConfigError>(())
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    AttributeErrors, AttributeSource, AttributeValidator, AttributeValidatorExt, AttributeValue,
    BoxedValidator, ConfigError, ValidationError, attributes_from_json,
};

// ============================================================================
// VALIDATORS: Built-in factories and their configuration
// ============================================================================

pub use crate::validators::{
    Invalid, InvalidConfig, Json, JsonConfig, Required, RequiredConfig, Valid, invalid,
    invalid_with, json, json_with, required, required_with, valid,
};

// ============================================================================
// COMPOSITION: Specification, composer, host contract
// ============================================================================

pub use crate::composer::{Composer, SpecBuilder, ValidationSpec, compose};
pub use crate::host::{Notify, ValidationEvent};
pub use crate::rules::{Rule, RuleSet};
pub use crate::{spec, validators};
