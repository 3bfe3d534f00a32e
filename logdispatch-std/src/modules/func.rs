//! Closure-backed log modules.

use logdispatch_core::{LogModule, Message};
use std::{fmt, marker::PhantomData};

/// A log module built from a key and a closure.
pub struct FnModule<V, F> {
    key: String,
    process: F,
    _value: PhantomData<fn(&V) -> bool>,
}

impl<V, F> FnModule<V, F>
where
    F: Fn(&V) -> bool,
{
    /// Create a module claiming `key` that runs `process` on matching values.
    pub fn new(key: impl Into<String>, process: F) -> Self {
        Self {
            key: key.into(),
            process,
            _value: PhantomData,
        }
    }
}

/// Shorthand for [`FnModule::new`].
///
/// ```rust,ignore
/// registry.register(module_fn("net", |value: &Value| {
///     println!("net: {value}");
///     true
/// }));
/// ```
pub fn module_fn<V, F>(key: impl Into<String>, process: F) -> FnModule<V, F>
where
    F: Fn(&V) -> bool,
{
    FnModule::new(key, process)
}

impl<V, F> LogModule<V> for FnModule<V, F>
where
    V: Message,
    F: Fn(&V) -> bool + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn process(&self, value: &V) -> bool {
        (self.process)(value)
    }
}

impl<V, F> fmt::Debug for FnModule<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModule").field("key", &self.key).finish()
    }
}
