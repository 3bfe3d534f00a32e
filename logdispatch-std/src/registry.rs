//! Registry of log modules.
//!
//! The registry is an ordered, append-only list. Modules are kept in
//! registration order and nothing is ever removed or reordered, so a
//! dispatcher scanning the list always sees modules in the order they were
//! registered. Keys are not unique: every module registered under a key is
//! offered every value submitted under it.

use logdispatch_core::{LogModule, Message, Value};
use std::{fmt, sync::Arc};

/// A shared, type-erased log module.
pub type SharedModule<V> = Arc<dyn LogModule<V>>;

/// An ordered, append-only collection of log modules.
pub struct Registry<V: Message = Value> {
    modules: Vec<SharedModule<V>>,
}

impl<V: Message> Registry<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Start a consuming builder.
    pub fn builder() -> RegistryBuilder<V> {
        RegistryBuilder::new()
    }

    /// Append a module. Always succeeds; duplicates are kept.
    pub fn register<M: LogModule<V>>(&mut self, module: M) -> &mut Self {
        self.register_shared(Arc::new(module))
    }

    /// Append an already shared module.
    ///
    /// Registering the same `Arc` twice makes the module run twice per
    /// matching dispatch.
    pub fn register_shared(&mut self, module: SharedModule<V>) -> &mut Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            key = module.key(),
            position = self.modules.len(),
            "registered log module"
        );
        self.modules.push(module);
        self
    }

    /// The registered modules, in registration order.
    pub fn handlers(&self) -> &[SharedModule<V>] {
        &self.modules
    }

    /// Iterate over modules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LogModule<V>> {
        self.modules.iter().map(|m| m.as_ref() as &dyn LogModule<V>)
    }

    /// Iterate over the modules claiming `key`, with their registration index.
    pub fn matching<'a>(
        &'a self,
        key: &'a str,
    ) -> impl Iterator<Item = (usize, &'a dyn LogModule<V>)> + 'a {
        self.modules
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.matches(key))
            .map(|(i, m)| (i, m.as_ref() as &dyn LogModule<V>))
    }

    /// The key of every module, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.key())
    }

    /// Get the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<V: Message> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Message> fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<V: Message> FromIterator<SharedModule<V>> for Registry<V> {
    fn from_iter<I: IntoIterator<Item = SharedModule<V>>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<V: Message> Extend<SharedModule<V>> for Registry<V> {
    fn extend<I: IntoIterator<Item = SharedModule<V>>>(&mut self, iter: I) {
        for module in iter {
            self.register_shared(module);
        }
    }
}

/// Builder for constructing a [`Registry`].
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register(network_log)
///     .register(disk_log)
///     .build();
/// ```
pub struct RegistryBuilder<V: Message = Value> {
    registry: Registry<V>,
}

impl<V: Message> Default for RegistryBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Message> RegistryBuilder<V> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register a module.
    pub fn register<M: LogModule<V>>(mut self, module: M) -> Self {
        self.registry.register(module);
        self
    }

    /// Register an already shared module.
    pub fn register_shared(mut self, module: SharedModule<V>) -> Self {
        self.registry.register_shared(module);
        self
    }

    /// Get the number of registered modules.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Check if the builder has no modules.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Build the registry. Registration order is kept as is.
    pub fn build(self) -> Registry<V> {
        self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::module_fn;

    #[test]
    fn test_registration_order_preserved() {
        let registry = RegistryBuilder::<i32>::new()
            .register(module_fn("a", |_: &i32| true))
            .register(module_fn("b", |_: &i32| true))
            .register(module_fn("a", |_: &i32| false))
            .build();

        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["a", "b", "a"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_matching_reports_positions() {
        let mut registry = Registry::<i32>::new();
        registry
            .register(module_fn("a", |_: &i32| true))
            .register(module_fn("b", |_: &i32| true))
            .register(module_fn("a", |_: &i32| true));

        let positions: Vec<usize> = registry.matching("a").map(|(i, _)| i).collect();
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(registry.matching("A").count(), 0);
    }

    #[test]
    fn test_shared_module_registered_twice() {
        let module: SharedModule<i32> = Arc::new(module_fn("dup", |_: &i32| true));
        let registry: Registry<i32> = [module.clone(), module].into_iter().collect();

        assert_eq!(registry.len(), 2);
        assert!(Arc::ptr_eq(&registry.handlers()[0], &registry.handlers()[1]));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::<String>::default();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
        assert_eq!(format!("{registry:?}"), "Registry { keys: [] }");
    }
}
