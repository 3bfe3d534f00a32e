//! Message trait for payload types.

/// A marker trait for values that can travel through a dispatcher.
///
/// Payloads must be `Send + Sync + 'static` so that a built dispatcher can be
/// shared between threads. Every such type is a `Message`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Request { path: String, status: u16 }
///
/// let dispatcher: Dispatcher<Request> = Dispatcher::builder().build();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Payloads routed by a dispatcher must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl<T: Send + Sync + 'static> Message for T {}
