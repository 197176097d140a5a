//! Core validation types and traits
//!
//! This module contains the building blocks every other module is written
//! against:
//!
//! - **Traits**: [`AttributeValidator`], [`AttributeValidatorExt`], [`AttributeSource`]
//! - **Values**: [`AttributeValue`]
//! - **Errors**: [`ValidationError`], [`AttributeErrors`], [`ConfigError`]
//!
//! # Examples
//!
//! ```rust
//! use attrcheck_validator::foundation::{AttributeValidator, AttributeValue};
//! use attrcheck_validator::validators::required;
//!
//! let v = required();
//! assert!(AttributeValidator::<()>::validate(&v, Some(&AttributeValue::from("x")), "name", &()).is_ok());
//! assert!(AttributeValidator::<()>::validate(&v, None, "name", &()).is_err());
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::{AttributeErrors, ConfigError, ValidationError};
pub use traits::{AttributeValidator, AttributeValidatorExt, BoxedValidator};
pub use value::{AttributeSource, AttributeValue, attributes_from_json};
