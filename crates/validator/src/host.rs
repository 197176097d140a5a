//! The contract a host record fulfils to receive per-attribute notifications.
//!
//! The composer emits exactly one [`ValidationEvent`] per specified
//! attribute per pass. The event is delivered to the host itself, so the
//! receiver of [`Notify::emit`] is the host object the event is about.

use crate::foundation::ValidationError;
use std::fmt;

/// Prefix of the event name emitted for an attribute that passed.
pub const VALID_PREFIX: &str = "valid:";

/// Prefix of the event name emitted for an attribute that failed.
pub const INVALID_PREFIX: &str = "invalid:";

/// Outcome of one attribute in one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationEvent<'a> {
    /// Every validator for `attribute` passed.
    Valid {
        /// The attribute name.
        attribute: &'a str,
    },
    /// A validator for `attribute` failed with `error`.
    Invalid {
        /// The attribute name.
        attribute: &'a str,
        /// The descriptor of the first failing validator.
        error: &'a ValidationError,
    },
}

impl<'a> ValidationEvent<'a> {
    /// The attribute this event is about.
    #[must_use]
    pub fn attribute(&self) -> &'a str {
        match *self {
            Self::Valid { attribute } | Self::Invalid { attribute, .. } => attribute,
        }
    }

    /// The error, for `Invalid` events.
    #[must_use]
    pub fn error(&self) -> Option<&'a ValidationError> {
        match *self {
            Self::Valid { .. } => None,
            Self::Invalid { error, .. } => Some(error),
        }
    }

    /// True for `Valid` events.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// The event name: `"valid:<attr>"` or `"invalid:<attr>"`.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidationEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid { attribute } => write!(f, "{VALID_PREFIX}{attribute}"),
            Self::Invalid { attribute, .. } => write!(f, "{INVALID_PREFIX}{attribute}"),
        }
    }
}

/// A host record that can be notified about validation outcomes.
///
/// Takes `&self`: validation must not mutate the host. Hosts that want to
/// record or forward events do so through interior mutability or a channel.
///
/// # Examples
///
/// ```rust
/// use attrcheck_validator::host::{Notify, ValidationEvent};
/// use std::cell::RefCell;
///
/// #[derive(Default)]
/// struct Form {
///     seen: RefCell<Vec<String>>,
/// }
///
/// impl Notify for Form {
///     fn emit(&self, event: &ValidationEvent<'_>) {
///         self.seen.borrow_mut().push(event.name());
///     }
/// }
///
/// let form = Form::default();
/// form.emit(&ValidationEvent::Valid { attribute: "title" });
/// assert_eq!(form.seen.borrow().as_slice(), ["valid:title"]);
/// ```
pub trait Notify {
    /// Receives the outcome for one attribute.
    fn emit(&self, event: &ValidationEvent<'_>);
}

/// A host that ignores every event.
impl Notify for () {
    fn emit(&self, _event: &ValidationEvent<'_>) {}
}

impl<T: Notify + ?Sized> Notify for &T {
    fn emit(&self, event: &ValidationEvent<'_>) {
        (**self).emit(event);
    }
}

impl<T: Notify + ?Sized> Notify for std::sync::Arc<T> {
    fn emit(&self, event: &ValidationEvent<'_>) {
        (**self).emit(event);
    }
}
