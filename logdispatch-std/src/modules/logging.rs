//! Logging module for value observation.

use logdispatch_core::{LogModule, Message};
use std::fmt::Debug;

/// A module that logs every value it claims as a `tracing` event.
///
/// Events use target `logdispatch::module` at `INFO` level. The module
/// reports `handled` as configured, so it can either observe alongside other
/// modules or claim the key outright.
#[derive(Debug, Clone)]
pub struct TracingModule {
    key: String,
    handled: bool,
}

impl TracingModule {
    /// Log values under `key` and report them as handled.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            handled: true,
        }
    }

    /// Log values under `key` without claiming them.
    pub fn observer(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            handled: false,
        }
    }
}

impl<V: Message + Debug> LogModule<V> for TracingModule {
    fn key(&self) -> &str {
        &self.key
    }

    fn process(&self, value: &V) -> bool {
        tracing::info!(target: "logdispatch::module", key = %self.key, ?value, "log");
        self.handled
    }
}
