//! # attrcheck-validator
//!
//! Per-attribute validation for observable records.
//!
//! A [`ValidationSpec`](composer::ValidationSpec) maps attribute names to
//! ordered validator sequences. [`compose`](composer::compose) turns it into
//! a [`Composer`](composer::Composer) that validates candidate attribute sets
//! against a host record: the first failing validator wins per attribute,
//! every attribute reports `valid:<attr>` or `invalid:<attr>` to the host,
//! and the pass returns either nothing or the map of failed attributes.
//!
//! ## Quick Start
//!
//! ```rust
//! use attrcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let composer = compose(spec! {
//!     "name" => [required()],
//!     "age" => [required(), json().with_error("bad age")],
//! }?);
//!
//! let candidates = attributes_from_json(json!({"name": "", "age": "42"})).unwrap();
//! let errors = composer.validate(&(), &candidates).unwrap();
//! assert_eq!(errors.messages().into_iter().collect::<Vec<_>>(), [("name", "required")]);
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Built-in Validators
//!
//! - [`valid`](validators::valid) / [`invalid`](validators::invalid): unconditional
//! - [`required`](validators::required): presence and non-emptiness
//! - [`json`](validators::json): string holding well-formed JSON
//!
//! Any `Fn(Option<&AttributeValue>, &str, &H) -> Result<(), ValidationError>`
//! closure is a validator too, so custom checks can read the host.

pub mod composer;
pub mod foundation;
pub mod host;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validators;
