//! # Log Modules
//!
//! A log module claims one key and processes the values submitted under it.
//! It is the only extension point of the dispatcher: every behavior beyond the
//! fallback sink lives in a module.
//!
//! # Contract
//!
//! - [`LogModule::key`] is compared against the submission key with exact,
//!   case-sensitive string equality.
//! - [`LogModule::process`] returns `true` when the value was handled. A
//!   dispatch is handled when any matching module returns `true`.
//! - Modules are not isolated from each other by default: a panic inside
//!   `process` unwinds through the dispatcher to the caller.

use crate::message::Message;
use std::sync::Arc;

/// A registered capability that claims a key and processes matching values.
///
/// The trait is object-safe so heterogeneous modules can share one registry.
/// The payload type `V` is fixed per registry.
///
/// # Example
///
/// ```rust,ignore
/// struct NetworkLog;
///
/// impl LogModule<Value> for NetworkLog {
///     fn key(&self) -> &str {
///         "net"
///     }
///
///     fn process(&self, value: &Value) -> bool {
///         println!("net: {value}");
///         true
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `LogModule<{V}>`",
    label = "missing `LogModule` implementation",
    note = "Log modules must implement `key` and `process` for the payload type `{V}`."
)]
pub trait LogModule<V: Message>: Send + Sync + 'static {
    /// The key this module claims.
    fn key(&self) -> &str;

    /// Process a value submitted under [`key`](LogModule::key).
    ///
    /// Returns `true` when the value was handled.
    fn process(&self, value: &V) -> bool;

    /// Whether this module claims `key`.
    fn matches(&self, key: &str) -> bool {
        self.key() == key
    }
}

impl<V: Message, T: LogModule<V> + ?Sized> LogModule<V> for Box<T> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn process(&self, value: &V) -> bool {
        (**self).process(value)
    }

    fn matches(&self, key: &str) -> bool {
        (**self).matches(key)
    }
}

impl<V: Message, T: LogModule<V> + ?Sized> LogModule<V> for Arc<T> {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn process(&self, value: &V) -> bool {
        (**self).process(value)
    }

    fn matches(&self, key: &str) -> bool {
        (**self).matches(key)
    }
}
