//! # Event Errors
//!
//! Instrumentation misuse. These are programming defects in the caller, so
//! they are reported immediately instead of being degraded to warnings.

use thiserror::Error;

/// Errors raised by begin/end bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Event was begun without being registered first.
    #[error("event '{0}' was never registered")]
    Unregistered(String),

    /// Event was begun while a previous begin is still open.
    #[error("event '{0}' is already running")]
    AlreadyRunning(String),

    /// Event was ended without a matching begin.
    #[error("event '{0}' is not running")]
    NotRunning(String),
}

/// Result type alias for event bookkeeping.
pub type EventResult<T> = Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_event() {
        let err = EventError::AlreadyRunning("box.create".to_string());
        assert!(err.to_string().contains("box.create"));
        assert!(err.to_string().contains("already running"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EventError>();
    }
}
