//! Standard log module implementations.

pub mod filter;
pub mod func;
#[cfg(feature = "tracing")]
pub mod logging;

pub use filter::{FilterModule, LogModuleExt};
pub use func::{FnModule, module_fn};
#[cfg(feature = "tracing")]
pub use logging::TracingModule;
