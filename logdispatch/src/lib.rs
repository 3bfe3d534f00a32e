//! # logdispatch - Key-Routed Log Dispatch
//!
//! `logdispatch` routes labeled log values to the modules that claim their
//! key. Callers submit a key/value pair; every registered module with that
//! key processes the value, and if none of them reports it as handled the
//! submission goes to a fallback sink (stdout by default).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use logdispatch::{Dispatcher, LogModule, Value, modules::module_fn};
//!
//! let dispatcher: Dispatcher = Dispatcher::builder()
//!     .register(module_fn("net", |value: &Value| {
//!         eprintln!("network: {value}");
//!         true
//!     }))
//!     .build();
//!
//! assert!(dispatcher.dispatch("net", Value::from("link up")));
//! assert!(!dispatcher.dispatch("disk", Value::from(93))); // prints {"disk": 93}
//! ```
//!
//! ## Semantics
//!
//! - Modules run in registration order; keys compare exactly and
//!   case-sensitively.
//! - Every matching module runs, and the results are OR-ed together.
//! - The fallback sink runs exactly once when nothing handled the submission.
//! - A panicking module unwinds to the caller unless the dispatcher was built
//!   with [`FailurePolicy::Isolate`]; [`Dispatcher::try_dispatch`] turns the
//!   panic into a [`DispatchError`] instead.
//!
//! ## Features
//!
//! - `tracing` (default): dispatcher diagnostics, [`sinks::TracingSink`] and
//!   [`modules::TracingModule`]
//! - `macros`: the [`log_module`] attribute

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use logdispatch_core::{
    // Error types
    DispatchError,
    // Outcomes
    DispatchReport,
    // Sink
    FallbackSink,
    // Module
    LogModule,
    // Payloads
    Message,
    Submission,
    Value,
    panic_message,
};

// Registration and dispatch
pub use logdispatch_std::{
    Dispatcher, DispatcherBuilder, FailurePolicy, Registry, RegistryBuilder, SharedModule,
};

/// Standard log module implementations.
pub mod modules {
    #![allow(clippy::wildcard_imports)]
    pub use logdispatch_std::modules::*;
}

/// Standard fallback sinks.
pub mod sinks {
    #![allow(clippy::wildcard_imports)]
    pub use logdispatch_std::sinks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use logdispatch_std::testing::*;
}

/// Prelude module - common imports for logdispatch.
///
/// # Usage
///
/// ```rust,ignore
/// use logdispatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        DispatchError, DispatchReport, Dispatcher, FailurePolicy, FallbackSink, LogModule,
        Registry, RegistryBuilder, Submission, Value,
        modules::{LogModuleExt, module_fn},
    };
}

#[cfg(feature = "macros")]
pub use logdispatch_macros::log_module;
