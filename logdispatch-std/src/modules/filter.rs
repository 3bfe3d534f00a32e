//! Filter module for conditional processing.

use logdispatch_core::{LogModule, Message};

/// A module that only forwards values accepted by a predicate.
///
/// A rejected value is reported as not handled and the inner module never
/// sees it. The key is the inner module's key.
pub struct FilterModule<M, P> {
    inner: M,
    predicate: P,
}

impl<M, P> FilterModule<M, P> {
    /// Wrap `inner` with `predicate`.
    pub fn new(inner: M, predicate: P) -> Self {
        Self { inner, predicate }
    }

    /// The wrapped module.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<V, M, P> LogModule<V> for FilterModule<M, P>
where
    V: Message,
    M: LogModule<V>,
    P: Fn(&V) -> bool + Send + Sync + 'static,
{
    fn key(&self) -> &str {
        self.inner.key()
    }

    fn process(&self, value: &V) -> bool {
        (self.predicate)(value) && self.inner.process(value)
    }
}

/// Combinators available on every log module.
pub trait LogModuleExt<V: Message>: LogModule<V> + Sized {
    /// Only process values accepted by `predicate`.
    fn filter<P>(self, predicate: P) -> FilterModule<Self, P>
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        FilterModule::new(self, predicate)
    }
}

impl<V: Message, M: LogModule<V>> LogModuleExt<V> for M {}
