//! A signup form record that validates candidate attributes before applying
//! them and tracks which fields are currently invalid.
//!
//! Run with `RUST_LOG=attrcheck_validator=trace` to see the per-attribute
//! trace output.

use attrcheck_validator::prelude::*;
use indexmap::IndexMap;
use serde_json::json;
use std::cell::RefCell;
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

/// A tiny observable record: stores attributes and remembers invalid fields.
#[derive(Default)]
struct SignupForm {
    attributes: IndexMap<String, AttributeValue>,
    invalid_fields: RefCell<BTreeSet<String>>,
}

impl Notify for SignupForm {
    fn emit(&self, event: &ValidationEvent<'_>) {
        let mut invalid = self.invalid_fields.borrow_mut();
        match event {
            ValidationEvent::Valid { attribute } => {
                invalid.remove(*attribute);
            }
            ValidationEvent::Invalid { attribute, error } => {
                println!("  {event}: {}", error.message);
                invalid.insert((*attribute).to_string());
            }
        }
    }
}

impl SignupForm {
    /// Applies `candidates` only if the whole set validates.
    fn set(
        &mut self,
        composer: &Composer<Self>,
        candidates: IndexMap<String, AttributeValue>,
    ) -> Result<(), AttributeErrors> {
        composer.check(self, &candidates)?;
        self.attributes.extend(candidates);
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let composer: Composer<SignupForm> = RuleSet::from_json_value(json!({
        "name": [{ "kind": "required" }],
        "age": [{ "kind": "required" }, { "kind": "json", "error": "bad age" }],
    }))?
    .compose()?;

    let mut form = SignupForm::default();

    println!("first attempt:");
    let first = attributes_from_json(json!({ "name": "", "age": "42" })).unwrap_or_default();
    if let Err(errors) = form.set(&composer, first) {
        print!("{errors}");
    }
    println!("invalid fields: {:?}", form.invalid_fields.borrow());

    println!("second attempt:");
    let second = attributes_from_json(json!({ "name": "Ada", "age": "36" })).unwrap_or_default();
    form.set(&composer, second)?;
    println!("stored: {:?}", form.attributes);
    println!("invalid fields: {:?}", form.invalid_fields.borrow());

    Ok(())
}
