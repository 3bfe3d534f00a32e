//! Error types for logdispatch.
//!
//! An unhandled submission is not an error: it takes the fallback branch.
//! The only failure a dispatch can report is a log module that panicked.

use thiserror::Error;

/// Errors surfaced by fallible dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A log module panicked while processing a value.
    #[error("log module #{position} (key `{key}`) panicked: {message}")]
    ModulePanicked {
        /// The key the panicking module is registered under.
        key: String,
        /// Registration index of the module.
        position: usize,
        /// The panic payload, when it was a string.
        message: String,
    },
}

impl DispatchError {
    /// Build a [`DispatchError::ModulePanicked`] from a caught panic payload.
    pub fn from_panic(
        key: impl Into<String>,
        position: usize,
        payload: &(dyn std::any::Any + Send),
    ) -> Self {
        DispatchError::ModulePanicked {
            key: key.into(),
            position,
            message: panic_message(payload),
        }
    }
}

/// Extract a readable message from a panic payload.
pub fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_variants() {
        let static_str: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(static_str.as_ref()), "boom");

        let owned: Box<dyn std::any::Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(panic_message(owned.as_ref()), "owned boom");

        let other: Box<dyn std::any::Any + Send> = Box::new(7_u32);
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }

    #[test]
    fn test_display_names_key_and_position() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("bad value");
        let err = DispatchError::from_panic("net", 2, payload.as_ref());
        assert_eq!(
            err.to_string(),
            "log module #2 (key `net`) panicked: bad value"
        );
    }
}
