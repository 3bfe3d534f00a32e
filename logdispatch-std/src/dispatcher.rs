//! Key-routed dispatch.
//!
//! A dispatch scans the whole registry in registration order. Every module
//! whose key equals a submitted key processes the value, and the results are
//! OR-ed together. There is no first-match short circuit: two modules sharing
//! a key both run. If nothing handled the submission, the fallback sink
//! receives it exactly once.

use crate::{registry::Registry, sinks::StdoutSink};
use logdispatch_core::{
    DispatchError, DispatchReport, FallbackSink, LogModule, Message, Submission, Value,
};
use std::{
    fmt,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

/// What happens when a log module panics during [`Dispatcher::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The panic unwinds to the caller and the scan is abandoned.
    #[default]
    Propagate,
    /// The panic is caught and logged, the module counts as not having
    /// handled the value, and the scan continues.
    Isolate,
}

/// Routes submissions to the log modules of a [`Registry`].
///
/// Invocation is synchronous and unbounded: there is no timeout around a
/// module's `process` call.
pub struct Dispatcher<V: Message = Value> {
    registry: Registry<V>,
    fallback: Arc<dyn FallbackSink<V>>,
    policy: FailurePolicy,
}

impl<V: Message + fmt::Debug> Dispatcher<V> {
    /// A dispatcher over `registry` that prints unhandled submissions to
    /// stdout and lets module panics propagate.
    pub fn new(registry: Registry<V>) -> Self {
        Self::builder().registry(registry).build()
    }

    /// Start a builder with the default configuration.
    pub fn builder() -> DispatcherBuilder<V> {
        DispatcherBuilder::new()
    }
}

impl<V: Message> Dispatcher<V> {
    /// Dispatch a single key/value pair. Returns whether any module handled it.
    pub fn dispatch(&self, key: impl Into<String>, value: V) -> bool {
        self.dispatch_report(key, value).handled
    }

    /// Dispatch a single key/value pair and return the full report.
    pub fn dispatch_report(&self, key: impl Into<String>, value: V) -> DispatchReport {
        self.dispatch_submission(&Submission::new(key, value))
    }

    /// Dispatch a submission, which may carry several entries.
    ///
    /// Modules form the outer loop and entries the inner one, so a module
    /// sees every entry it claims before the next module runs.
    pub fn dispatch_submission(&self, submission: &Submission<V>) -> DispatchReport {
        let mut report = DispatchReport::default();

        for (position, module) in self.registry.handlers().iter().enumerate() {
            for (key, value) in submission.entries() {
                if !module.matches(key) {
                    continue;
                }
                report.matched += 1;

                let processed = match self.policy {
                    FailurePolicy::Propagate => module.process(value),
                    FailurePolicy::Isolate => match invoke(module.as_ref(), position, value) {
                        Ok(processed) => processed,
                        Err(_err) => {
                            #[cfg(feature = "tracing")]
                            tracing::warn!(error = %_err, "isolated log module failure");
                            report.isolated_failures += 1;
                            false
                        }
                    },
                };

                #[cfg(feature = "tracing")]
                tracing::trace!(key, position, processed, "log module invoked");
                report.handled |= processed;
            }
        }

        self.finish(submission, &mut report);
        report
    }

    /// Dispatch a single key/value pair, turning a module panic into an error.
    ///
    /// The scan stops at the first panicking module and the fallback sink is
    /// not invoked. The configured [`FailurePolicy`] does not apply here.
    pub fn try_dispatch(&self, key: impl Into<String>, value: V) -> Result<bool, DispatchError> {
        self.try_dispatch_submission(&Submission::new(key, value))
            .map(|report| report.handled)
    }

    /// Fallible form of [`dispatch_submission`](Self::dispatch_submission).
    pub fn try_dispatch_submission(
        &self,
        submission: &Submission<V>,
    ) -> Result<DispatchReport, DispatchError> {
        let mut report = DispatchReport::default();

        for (position, module) in self.registry.handlers().iter().enumerate() {
            for (key, value) in submission.entries() {
                if module.matches(key) {
                    report.matched += 1;
                    report.handled |= invoke(module.as_ref(), position, value)?;
                }
            }
        }

        self.finish(submission, &mut report);
        Ok(report)
    }

    fn finish(&self, submission: &Submission<V>, report: &mut DispatchReport) {
        if report.handled {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = submission.len(),
            matched = report.matched,
            "no log module handled submission, using fallback"
        );
        self.fallback.emit(submission);
        report.fell_back = true;
    }

    /// Append a module to the underlying registry.
    pub fn register<M: LogModule<V>>(&mut self, module: M) -> &mut Self {
        self.registry.register(module);
        self
    }

    /// The registry this dispatcher scans.
    pub fn registry(&self) -> &Registry<V> {
        &self.registry
    }

    /// Mutable access to the registry, for further registration.
    pub fn registry_mut(&mut self) -> &mut Registry<V> {
        &mut self.registry
    }

    /// Consume the dispatcher and return its registry.
    pub fn into_registry(self) -> Registry<V> {
        self.registry
    }

    /// The configured failure policy.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl<V: Message> fmt::Debug for Dispatcher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

fn invoke<V: Message>(
    module: &dyn LogModule<V>,
    position: usize,
    value: &V,
) -> Result<bool, DispatchError> {
    panic::catch_unwind(AssertUnwindSafe(|| module.process(value)))
        .map_err(|payload| DispatchError::from_panic(module.key(), position, payload.as_ref()))
}

/// Builder for a [`Dispatcher`].
///
/// Defaults: empty registry, [`StdoutSink`] fallback,
/// [`FailurePolicy::Propagate`].
pub struct DispatcherBuilder<V: Message = Value> {
    registry: Registry<V>,
    fallback: Arc<dyn FallbackSink<V>>,
    policy: FailurePolicy,
}

impl<V: Message + fmt::Debug> DispatcherBuilder<V> {
    /// Create a builder with the stdout fallback.
    pub fn new() -> Self {
        Self::with_fallback(StdoutSink)
    }
}

impl<V: Message + fmt::Debug> Default for DispatcherBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Message> DispatcherBuilder<V> {
    /// Create a builder with a specific fallback sink.
    ///
    /// This is the entry point for payload types without a `Debug` impl.
    pub fn with_fallback<S: FallbackSink<V>>(sink: S) -> Self {
        Self {
            registry: Registry::new(),
            fallback: Arc::new(sink),
            policy: FailurePolicy::default(),
        }
    }

    /// Replace the registry.
    pub fn registry(mut self, registry: Registry<V>) -> Self {
        self.registry = registry;
        self
    }

    /// Register a module.
    pub fn register<M: LogModule<V>>(mut self, module: M) -> Self {
        self.registry.register(module);
        self
    }

    /// Replace the fallback sink.
    pub fn fallback<S: FallbackSink<V>>(mut self, sink: S) -> Self {
        self.fallback = Arc::new(sink);
        self
    }

    /// Replace the fallback sink with an already shared one.
    pub fn fallback_shared(mut self, sink: Arc<dyn FallbackSink<V>>) -> Self {
        self.fallback = sink;
        self
    }

    /// Set the failure policy.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher<V> {
        Dispatcher {
            registry: self.registry,
            fallback: self.fallback,
            policy: self.policy,
        }
    }
}
