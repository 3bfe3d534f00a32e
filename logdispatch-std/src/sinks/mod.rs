//! Standard fallback sinks.

pub mod stdout;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use stdout::{NullSink, StdoutSink, WriterSink, write_submission};
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;
