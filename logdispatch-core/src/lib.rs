//! # logdispatch-core
//!
//! Core traits and types for the logdispatch key-routed log dispatcher.
//!
//! This crate has minimal dependencies and is meant to be imported by crates
//! that only provide log modules or sinks and don't need the registry and
//! dispatcher from `logdispatch-std`.
//!
//! # Model
//!
//! A caller submits a key/value pair. Every registered [`LogModule`] whose key
//! equals the submission key processes the value and reports whether it
//! handled it. When none did, the submission goes to a [`FallbackSink`].
//!
//! - [`LogModule`] - claims a key, processes values
//! - [`FallbackSink`] - receives unhandled [`Submission`]s
//! - [`Value`] - the default payload representation
//! - [`DispatchReport`] - outcome of one dispatch
//! - [`DispatchError`] - a module panicked during fallible dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod message;
mod module;
mod report;
mod sink;
mod submission;
mod value;

// Re-exports
pub use error::{DispatchError, panic_message};
pub use message::Message;
pub use module::LogModule;
pub use report::DispatchReport;
pub use sink::FallbackSink;
pub use submission::Submission;
pub use value::Value;
