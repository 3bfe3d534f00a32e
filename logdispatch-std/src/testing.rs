//! Testing utilities for logdispatch.
//!
//! This module provides utilities to make testing modules and dispatchers easier.
//!
//! # Features
//!
//! - [`RecordingModule`]: A module that records every value it processes
//! - [`CountingModule`]: A module that only counts invocations
//! - [`CallLog`]: A shared log of invocation order across several modules
//! - [`RecordingSink`]: A fallback sink that records unhandled submissions
//! - [`CaptureWriter`]: A cloneable in-memory writer for sink and log output

use logdispatch_core::{FallbackSink, LogModule, Message, Submission};
use std::{
    io,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Call Log
// ============================================================================

/// A shared, ordered log of module invocations.
///
/// Give the same log to several [`RecordingModule`]s via
/// [`RecordingModule::with_label`] to observe the order a dispatch ran them in.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&self, label: impl Into<String>) {
        lock(&self.entries).push(label.into());
    }

    /// A copy of the entries so far.
    pub fn entries(&self) -> Vec<String> {
        lock(&self.entries).clone()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        lock(&self.entries).clear();
    }
}

// ============================================================================
// Recording Module
// ============================================================================

/// A module that records all values it receives.
///
/// Clones share their recorded state, so keep a clone before registering.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingModule::<Value>::new("net", true);
/// registry.register(recorder.clone());
///
/// dispatcher.dispatch("net", Value::from("up"));
///
/// assert_eq!(recorder.values(), vec![Value::from("up")]);
/// ```
pub struct RecordingModule<V> {
    key: String,
    result: bool,
    values: Arc<Mutex<Vec<V>>>,
    label: Option<(String, CallLog)>,
    panic_message: Option<String>,
}

impl<V> RecordingModule<V> {
    /// Create a recorder claiming `key` that reports `result`.
    pub fn new(key: impl Into<String>, result: bool) -> Self {
        Self {
            key: key.into(),
            result,
            values: Arc::new(Mutex::new(Vec::new())),
            label: None,
            panic_message: None,
        }
    }

    /// Also push `label` into `log` on every invocation.
    pub fn with_label(mut self, label: impl Into<String>, log: &CallLog) -> Self {
        self.label = Some((label.into(), log.clone()));
        self
    }

    /// Panic with `message` after recording each value.
    pub fn panicking(mut self, message: impl Into<String>) -> Self {
        self.panic_message = Some(message.into());
        self
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        lock(&self.values).len()
    }

    /// Clear all recorded values.
    pub fn clear(&self) {
        lock(&self.values).clear();
    }
}

impl<V: Clone> RecordingModule<V> {
    /// Get a clone of the recorded values.
    pub fn values(&self) -> Vec<V> {
        lock(&self.values).clone()
    }
}

impl<V> Clone for RecordingModule<V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            result: self.result,
            values: self.values.clone(),
            label: self.label.clone(),
            panic_message: self.panic_message.clone(),
        }
    }
}

impl<V: Message + Clone> LogModule<V> for RecordingModule<V> {
    fn key(&self) -> &str {
        &self.key
    }

    fn process(&self, value: &V) -> bool {
        lock(&self.values).push(value.clone());
        if let Some((label, log)) = &self.label {
            log.push(label.clone());
        }
        if let Some(message) = &self.panic_message {
            std::panic::panic_any(message.clone());
        }
        self.result
    }
}

// ============================================================================
// Counting Module
// ============================================================================

/// A module that counts invocations and accepts any payload type.
#[derive(Debug, Clone)]
pub struct CountingModule {
    key: String,
    result: bool,
    count: Arc<AtomicUsize>,
}

impl CountingModule {
    /// Create a counter claiming `key` that reports `result`.
    pub fn new(key: impl Into<String>, result: bool) -> Self {
        Self {
            key: key.into(),
            result,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<V: Message> LogModule<V> for CountingModule {
    fn key(&self) -> &str {
        &self.key
    }

    fn process(&self, _value: &V) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.result
    }
}

// ============================================================================
// Recording Sink
// ============================================================================

/// A fallback sink that records every submission it receives.
pub struct RecordingSink<V> {
    submissions: Arc<Mutex<Vec<Submission<V>>>>,
}

impl<V> RecordingSink<V> {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of recorded submissions.
    pub fn count(&self) -> usize {
        lock(&self.submissions).len()
    }
}

impl<V: Clone> RecordingSink<V> {
    /// Get a clone of the recorded submissions.
    pub fn submissions(&self) -> Vec<Submission<V>> {
        lock(&self.submissions).clone()
    }
}

impl<V> Default for RecordingSink<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for RecordingSink<V> {
    fn clone(&self) -> Self {
        Self {
            submissions: self.submissions.clone(),
        }
    }
}

impl<V: Message + Clone> FallbackSink<V> for RecordingSink<V> {
    fn emit(&self, submission: &Submission<V>) {
        lock(&self.submissions).push(submission.clone());
    }
}

// ============================================================================
// Capture Writer
// ============================================================================

/// A cloneable in-memory writer. Clones append to the same buffer.
///
/// Useful with [`WriterSink`](crate::sinks::WriterSink) or as the writer of
/// a `tracing` subscriber in tests.
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.buffer)).into_owned()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.buffer).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
