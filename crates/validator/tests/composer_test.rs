//! Integration tests for the validation composer.

mod common;

use attrcheck_validator::prelude::*;
use common::{RecordingHost, attrs};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A validator that counts its calls and fails with `code` when `fail` is set.
fn counting(
    calls: &Arc<AtomicUsize>,
    code: &'static str,
    fail: bool,
) -> impl AttributeValidator<RecordingHost> + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move |_: Option<&AttributeValue>, _: &str, _: &RecordingHost| {
        calls.fetch_add(1, Ordering::SeqCst);
        if fail {
            Err(ValidationError::new(code, code))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn name_and_age_form() {
    let composer = compose(
        spec! {
            "name" => [required()],
            "age" => [required(), json().with_error("bad age")],
        }
        .unwrap(),
    );
    let host = RecordingHost::default();

    let errors = composer
        .validate(
            &host,
            &attrs([("name", AttributeValue::from("")), ("age", AttributeValue::from("42"))]),
        )
        .unwrap();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("name").unwrap().message, "required");
    assert_eq!(host.names(), ["invalid:name", "valid:age"]);
    assert_eq!(host.events()[0].error.as_ref(), errors.get("name"));
    assert_eq!(host.events()[1].error, None);
}

#[test]
fn age_reports_configured_json_error() {
    let composer = compose(
        spec! {
            "age" => [required(), json().with_error("bad age")],
        }
        .unwrap(),
    );
    let host = RecordingHost::default();

    let errors = composer
        .validate(&host, &attrs([("age", AttributeValue::from("4 2"))]))
        .unwrap();

    assert_eq!(errors.get("age").unwrap().message, "bad age");
    assert_eq!(host.names(), ["invalid:age"]);
}

#[test]
fn fully_valid_pass_returns_none() {
    let composer = compose(
        spec! {
            "name" => [required()],
            "settings" => [required(), json()],
        }
        .unwrap(),
    );
    let host = RecordingHost::default();
    let result = composer.validate(
        &host,
        &attrs([
            ("name", AttributeValue::from("ada")),
            ("settings", AttributeValue::from(r#"{"theme": "dark"}"#)),
        ]),
    );

    assert!(result.is_none());
    assert_eq!(host.names(), ["valid:name", "valid:settings"]);
}

// ============================================================================
// SHORT CIRCUIT
// ============================================================================

#[test]
fn first_failure_stops_the_sequence() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let third = Arc::new(AtomicUsize::new(0));

    let composer = compose(
        ValidationSpec::builder()
            .rule("a", counting(&first, "first", false))
            .rule("a", counting(&second, "second", true))
            .rule("a", counting(&third, "third", true))
            .build()
            .unwrap(),
    );
    let host = RecordingHost::default();
    let errors = composer.validate(&host, &attrs([])).unwrap();

    assert_eq!(errors.get("a").unwrap().code, "second");
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
    assert_eq!(third.load(Ordering::SeqCst), 0);
}

#[test]
fn failure_in_one_attribute_does_not_stop_others() {
    let later = Arc::new(AtomicUsize::new(0));
    let composer = compose(
        ValidationSpec::builder()
            .rule("a", invalid())
            .rule("b", counting(&later, "b", false))
            .build()
            .unwrap(),
    );
    let host = RecordingHost::default();
    let errors = composer.validate(&host, &attrs([])).unwrap();

    assert_eq!(errors.attributes().collect::<Vec<_>>(), ["a"]);
    assert_eq!(later.load(Ordering::SeqCst), 1);
    assert_eq!(host.names(), ["invalid:a", "valid:b"]);
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[test]
fn exactly_one_event_per_specified_attribute() {
    let composer = compose(
        spec! {
            "a" => [valid()],
            "b" => [invalid()],
            "c" => [required()],
        }
        .unwrap(),
    );
    let host = RecordingHost::default();
    composer.validate(
        &host,
        &attrs([("c", AttributeValue::from(1)), ("extra", AttributeValue::Null)]),
    );

    assert_eq!(host.names(), ["valid:a", "invalid:b", "valid:c"]);
}

#[test]
fn events_repeat_on_every_pass() {
    let composer = compose(spec! { "a" => [valid()] }.unwrap());
    let host = RecordingHost::default();
    composer.validate(&host, &attrs([]));
    composer.validate(&host, &attrs([]));
    assert_eq!(host.names(), ["valid:a", "valid:a"]);
}

// ============================================================================
// HOST CONTEXT
// ============================================================================

#[test]
fn validators_receive_attribute_name_and_host() {
    let composer = compose(
        ValidationSpec::builder()
            .rule(
                "owner",
                |value: Option<&AttributeValue>, attribute: &str, host: &RecordingHost| {
                    let expected = AttributeValue::from(i64::from(host.id));
                    if value == Some(&expected) {
                        Ok(())
                    } else {
                        Err(ValidationError::new("owner_mismatch", "not yours")
                            .with_field(attribute.to_string()))
                    }
                },
            )
            .build()
            .unwrap(),
    );

    let mine = RecordingHost::with_id(7);
    let theirs = RecordingHost::with_id(8);
    let candidates = attrs([("owner", AttributeValue::from(7))]);

    assert!(composer.validate(&mine, &candidates).is_none());
    let errors = composer.validate(&theirs, &candidates).unwrap();
    assert_eq!(errors.get("owner").unwrap().field.as_deref(), Some("owner"));
}

#[test]
fn shared_composer_across_threads() {
    let composer = Arc::new(compose(spec! { "name" => [required()] }.unwrap()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let composer = Arc::clone(&composer);
            std::thread::spawn(move || {
                let host = RecordingHost::with_id(i);
                let value = if i % 2 == 0 { "x" } else { "" };
                let failed = composer
                    .validate(&host, &attrs([("name", AttributeValue::from(value))]))
                    .is_some();
                (failed, host.names())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (failed, names) = handle.join().unwrap();
        assert_eq!(failed, i % 2 == 1);
        assert_eq!(names.len(), 1);
    }
}

#[test]
fn host_shared_through_arc_across_threads() {
    let composer: Arc<Composer<Arc<RecordingHost>>> =
        Arc::new(compose(spec! { "name" => [required()] }.unwrap()));
    let host = Arc::new(RecordingHost::default());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let composer = Arc::clone(&composer);
            let host = Arc::clone(&host);
            std::thread::spawn(move || {
                let value = if i % 2 == 0 { "x" } else { "" };
                composer
                    .validate(&host, &attrs([("name", AttributeValue::from(value))]))
                    .is_some()
            })
        })
        .collect();

    let failures = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|failed| *failed)
        .count();
    assert_eq!(failures, 2);

    let mut names = host.names();
    names.sort();
    assert_eq!(
        names,
        ["invalid:name", "invalid:name", "valid:name", "valid:name"]
    );
}

// ============================================================================
// FAULTS
// ============================================================================

#[test]
fn empty_specification_fails_before_any_pass() {
    let err = ValidationSpec::<RecordingHost>::builder().build().unwrap_err();
    assert!(matches!(err, ConfigError::EmptySpec));
}

#[test]
#[should_panic(expected = "validator bug")]
fn panicking_validator_propagates() {
    let composer = compose(
        ValidationSpec::builder()
            .rule(
                "a",
                |_: Option<&AttributeValue>, _: &str, _: &RecordingHost| -> Result<(), ValidationError> {
                    panic!("validator bug")
                },
            )
            .build()
            .unwrap(),
    );
    composer.validate(&RecordingHost::default(), &attrs([]));
}

#[test]
fn check_returns_result() {
    let composer = compose(spec! { "a" => [required()] }.unwrap());
    let host = RecordingHost::default();

    assert!(composer.check(&host, &attrs([("a", AttributeValue::from(false))])).is_ok());
    let errors = composer.check(&host, &attrs([])).unwrap_err();
    assert!(errors.contains("a"));
}
