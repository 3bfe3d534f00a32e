//! Fallback sink trait.

use crate::{message::Message, submission::Submission};

/// Receives submissions that no log module handled.
///
/// The dispatcher invokes the sink at most once per dispatch, with the full
/// submission. Formatting is entirely up to the sink.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot receive unhandled submissions of `{V}`",
    label = "missing `FallbackSink` implementation",
    note = "Implement `FallbackSink<{V}>` or pass a closure `Fn(&Submission<{V}>)`."
)]
pub trait FallbackSink<V: Message>: Send + Sync + 'static {
    /// Emit an unhandled submission.
    fn emit(&self, submission: &Submission<V>);
}

impl<V, F> FallbackSink<V> for F
where
    V: Message,
    F: Fn(&Submission<V>) + Send + Sync + 'static,
{
    fn emit(&self, submission: &Submission<V>) {
        (self)(submission)
    }
}
