//! Shared host fixtures for integration tests.

#![allow(dead_code)]

use attrcheck_validator::foundation::{AttributeValue, ValidationError};
use attrcheck_validator::host::{Notify, ValidationEvent};
use indexmap::IndexMap;
use std::sync::Mutex;

/// A recorded notification: event name plus the error it carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub name: String,
    pub error: Option<ValidationError>,
}

/// Host that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub id: u32,
    events: Mutex<Vec<Recorded>>,
}

impl RecordingHost {
    pub fn with_id(id: u32) -> Self {
        Self {
            id,
            events: Mutex::default(),
        }
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Notify for RecordingHost {
    fn emit(&self, event: &ValidationEvent<'_>) {
        self.events.lock().unwrap().push(Recorded {
            name: event.name(),
            error: event.error().cloned(),
        });
    }
}

/// Builds a candidate set from `(name, value)` pairs.
pub fn attrs<const N: usize>(
    pairs: [(&str, AttributeValue); N],
) -> IndexMap<String, AttributeValue> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
