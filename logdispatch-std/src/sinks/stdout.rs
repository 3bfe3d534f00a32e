//! Sinks that print unhandled submissions.

use logdispatch_core::{FallbackSink, Message, Submission};
use std::{
    fmt::Debug,
    io::{self, Write},
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Write `submission` as one line, then flush.
///
/// The line is the submission's `Debug` form, e.g. `{"x": 42}`. Every
/// printing sink goes through this.
pub fn write_submission<V, W>(writer: &mut W, submission: &Submission<V>) -> io::Result<()>
where
    V: Debug,
    W: Write + ?Sized,
{
    writeln!(writer, "{submission:?}")?;
    writer.flush()
}

/// Prints each unhandled submission to stdout, one line per submission.
///
/// This is the dispatcher's default fallback. Lines are formatted by
/// [`write_submission`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl<V: Message + Debug> FallbackSink<V> for StdoutSink {
    fn emit(&self, submission: &Submission<V>) {
        if let Err(_e) = write_submission(&mut io::stdout().lock(), submission) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "failed to print unhandled submission");
        }
    }
}

/// Writes each unhandled submission into an [`io::Write`], one line each.
///
/// Write errors are logged and dropped; they never reach the dispatching
/// caller.
#[derive(Debug, Default)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Lock the writer, e.g. to inspect a buffer.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V, W> FallbackSink<V> for WriterSink<W>
where
    V: Message + Debug,
    W: Write + Send + 'static,
{
    fn emit(&self, submission: &Submission<V>) {
        if let Err(_e) = write_submission(&mut *self.lock(), submission) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "failed to write unhandled submission");
        }
    }
}

/// Discards unhandled submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<V: Message> FallbackSink<V> for NullSink {
    fn emit(&self, _submission: &Submission<V>) {}
}
