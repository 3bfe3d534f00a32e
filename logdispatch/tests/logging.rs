//! Fallback and module output through `tracing`.

#![cfg(feature = "tracing")]

use logdispatch::{
    Dispatcher, FailurePolicy, Value,
    modules::TracingModule,
    sinks::{NullSink, TracingSink, WriterSink},
    testing::{CaptureWriter, RecordingModule},
};

fn capture_subscriber(capture: CaptureWriter) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_writer(move || capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish()
}

#[test]
fn test_tracing_sink_as_fallback() {
    let capture = CaptureWriter::new();
    let dispatcher: Dispatcher = Dispatcher::builder().fallback(TracingSink).build();

    let handled = tracing::subscriber::with_default(capture_subscriber(capture.clone()), || {
        dispatcher.dispatch("x", Value::from(42))
    });

    assert!(!handled);
    let output = capture.contents();
    assert!(output.contains("unhandled log submission"), "{output}");
    assert!(output.contains("{\"x\": 42}"), "{output}");
}

#[test]
fn test_dispatch_diagnostics() {
    let capture = CaptureWriter::new();
    let dispatcher: Dispatcher = Dispatcher::builder()
        .fallback(WriterSink::new(std::io::sink()))
        .register(TracingModule::observer("audit"))
        .build();

    tracing::subscriber::with_default(capture_subscriber(capture.clone()), || {
        dispatcher.dispatch("audit", Value::from("login"));
    });

    let output = capture.contents();
    assert!(output.contains("log module invoked"), "{output}");
    assert!(output.contains("value=\"login\""), "{output}");
    assert!(output.contains("using fallback"), "{output}");
}

#[test]
fn test_isolated_failure_is_logged() {
    let capture = CaptureWriter::new();
    let dispatcher: Dispatcher = Dispatcher::builder()
        .fallback(NullSink)
        .failure_policy(FailurePolicy::Isolate)
        .register(RecordingModule::new("job", true).panicking("disk full"))
        .build();

    let report = tracing::subscriber::with_default(capture_subscriber(capture.clone()), || {
        dispatcher.dispatch_report("job", Value::from(1))
    });

    assert_eq!(report.isolated_failures, 1);
    let output = capture.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("isolated log module failure"), "{output}");
    assert!(
        output.contains("log module #0 (key `job`) panicked: disk full"),
        "{output}"
    );
}

#[test]
fn test_writer_sink_through_dispatcher() {
    let capture = CaptureWriter::new();
    let dispatcher: Dispatcher = Dispatcher::builder()
        .fallback(WriterSink::new(capture.clone()))
        .build();

    dispatcher.dispatch("err", Value::from("oops"));
    dispatcher.dispatch("x", Value::from(42));

    assert_eq!(capture.contents(), "{\"err\": \"oops\"}\n{\"x\": 42}\n");
}
