//! Sink that forwards unhandled submissions to `tracing`.

use logdispatch_core::{FallbackSink, Message, Submission};
use std::fmt::Debug;

/// Emits each unhandled submission as a `tracing` event.
///
/// Events use target `logdispatch::fallback` at `INFO` level, with the
/// submission recorded in the `submission` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl<V: Message + Debug> FallbackSink<V> for TracingSink {
    fn emit(&self, submission: &Submission<V>) {
        tracing::info!(
            target: "logdispatch::fallback",
            submission = ?submission,
            "unhandled log submission"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureWriter;
    use logdispatch_core::Value;

    #[test]
    fn test_tracing_sink_records_submission() {
        let capture = CaptureWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_writer({
                let capture = capture.clone();
                move || capture.clone()
            })
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.emit(&Submission::new("x", Value::from(42)));
        });

        let output = capture.contents();
        assert!(output.contains("logdispatch::fallback"), "{output}");
        assert!(output.contains("unhandled log submission"), "{output}");
        assert!(output.contains("{\"x\": 42}"), "{output}");
    }
}
