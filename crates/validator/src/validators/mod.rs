//! Built-in validators
//!
//! Each factory takes an explicit configuration struct (or none) and returns
//! an independent validator value usable with any host type.
//!
//! | Factory | Code | Default message |
//! |---|---|---|
//! | [`valid`] | - | - |
//! | [`invalid`] | `invalid` | `"invalid"` |
//! | [`required`] | `required` | `"required"` |
//! | [`json`] | `invalid_json` | `"invalid json"` |
//!
//! # Examples
//!
//! ```rust
//! use attrcheck_validator::validators::{json, required, JsonConfig};
//!
//! let presence = required();
//! let age_format = json().with_error("bad age");
//! let same = attrcheck_validator::validators::json_with(JsonConfig { error: "bad age".into() });
//! assert_eq!(age_format, same);
//! ```

pub mod json_string;
pub mod logical;
pub mod nullable;

pub use json_string::{DEFAULT_JSON_ERROR, Json, JsonConfig, json, json_with};
pub use logical::{
    DEFAULT_INVALID_ERROR, Invalid, InvalidConfig, Valid, invalid, invalid_with, valid,
};
pub use nullable::{DEFAULT_REQUIRED_ERROR, Required, RequiredConfig, required, required_with};
