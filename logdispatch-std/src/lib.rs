//! # logdispatch-std
//!
//! Standard implementations for the logdispatch key-routed log dispatcher.
//!
//! This crate provides:
//! - **Registration**: [`Registry`], [`RegistryBuilder`]
//! - **Dispatch**: [`Dispatcher`], [`DispatcherBuilder`], [`FailurePolicy`]
//! - **Standard sinks**: Stdout, Writer, Null, Tracing
//! - **Standard modules**: Fn, Filter, Tracing
//! - **Testing utilities**: recording modules and sinks

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use logdispatch_core;

// Modules
pub mod dispatcher;
pub mod modules;
pub mod registry;
pub mod sinks;
pub mod testing;

pub use dispatcher::{Dispatcher, DispatcherBuilder, FailurePolicy};
pub use registry::{Registry, RegistryBuilder, SharedModule};
