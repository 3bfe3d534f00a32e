//! Multi-entry submissions.

use logdispatch::{
    RegistryBuilder, Submission, Value,
    testing::{CallLog, RecordingModule},
};

mod common;
use common::recorded;

#[test]
fn test_modules_outer_entries_inner() {
    let log = CallLog::new();
    let first = RecordingModule::new("a", false).with_label("first", &log);
    let second = RecordingModule::new("a", false).with_label("second", &log);
    let registry = RegistryBuilder::new()
        .register(first.clone())
        .register(second.clone())
        .build();
    let (dispatcher, _sink) = recorded(registry);

    let submission = Submission::new("a", Value::from(1))
        .with("b", Value::from(2))
        .with("a", Value::from(3));
    dispatcher.dispatch_submission(&submission);

    assert_eq!(log.entries(), vec!["first", "first", "second", "second"]);
    assert_eq!(first.values(), vec![Value::from(1), Value::from(3)]);
    assert_eq!(second.values(), vec![Value::from(1), Value::from(3)]);
}

#[test]
fn test_any_entry_handled_suppresses_fallback() {
    let registry = RegistryBuilder::new()
        .register(RecordingModule::new("metrics", true))
        .build();
    let (dispatcher, sink) = recorded(registry);

    let submission: Submission<Value> = [
        ("trace", Value::from("ignored")),
        ("metrics", Value::from(0.25)),
    ]
    .into_iter()
    .collect();
    let report = dispatcher.dispatch_submission(&submission);

    assert!(report.handled);
    assert_eq!(report.matched, 1);
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_unhandled_submission_reaches_fallback_whole() {
    let (dispatcher, sink) = recorded(RegistryBuilder::new().build());

    let submission = Submission::new("user", Value::from("ada")).with("id", Value::from(7));
    let report = dispatcher.dispatch_submission(&submission);

    assert!(!report.handled);
    assert_eq!(report.matched, 0);
    assert_eq!(sink.count(), 1);
    assert_eq!(
        format!("{:?}", sink.submissions()[0]),
        "{\"user\": \"ada\", \"id\": 7}"
    );
}
