//! Error types used by the weak event registry.
//!
//! This module defines one error enum:
//!
//! - [`EventError`] — failures surfaced by registration, removal, and broadcast.
//!
//! The type provides helper methods (`as_label`, `as_message`) for logging and
//! metrics. Dead-target discovery during a broadcast is **not** an error — it
//! is steady-state behavior handled by silent pruning.

use thiserror::Error;

/// # Errors produced by the weak event registry.
///
/// Registration and removal fail fast on malformed input; broadcast fails only
/// for the documented handler-shape mismatch, or when invoked through a
/// [`ManagerHandle`](crate::ManagerHandle) whose manager is gone.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EventError {
    /// Event name was empty or contained only whitespace.
    #[error("event name {name:?} is empty or whitespace-only")]
    InvalidEventName {
        /// The rejected name, verbatim.
        name: String,
    },

    /// Handler descriptor's bound target was already dead at call time.
    ///
    /// A bound handler whose `Weak` target can no longer be upgraded could
    /// never fire; registering or removing it is a programmer error.
    #[error("handler target is no longer alive")]
    InvalidHandler,

    /// Operation invoked through a handle whose manager has been dropped.
    #[error("event manager is no longer bound")]
    UnboundManager,

    /// A subscriber-shaped handler was hit by the action-shaped raise overload.
    ///
    /// Signals that the caller wired a `(sender, payload)` handler to the
    /// payload-only broadcast for `event`.
    #[error("handler for {event:?} expects a sender; use the sender-carrying raise")]
    InvalidHandleEvent {
        /// Name of the event channel the mismatch was found on.
        event: String,
    },
}

impl EventError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use weakcast::EventError;
    ///
    /// let err = EventError::InvalidEventName { name: "  ".into() };
    /// assert_eq!(err.as_label(), "invalid_event_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::InvalidEventName { .. } => "invalid_event_name",
            EventError::InvalidHandler => "invalid_handler",
            EventError::UnboundManager => "unbound_manager",
            EventError::InvalidHandleEvent { .. } => "invalid_handle_event",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::InvalidEventName { name } => {
                format!("invalid event name: {name:?}")
            }
            EventError::InvalidHandler => "handler target is no longer alive".to_string(),
            EventError::UnboundManager => "event manager is no longer bound".to_string(),
            EventError::InvalidHandleEvent { event } => {
                format!("handler shape mismatch on event {event:?}")
            }
        }
    }

    /// Indicates whether the error comes from argument validation
    /// (as opposed to a broadcast-time failure).
    ///
    /// # Example
    /// ```
    /// use weakcast::EventError;
    ///
    /// assert!(EventError::InvalidHandler.is_validation());
    /// assert!(!EventError::UnboundManager.is_validation());
    /// ```
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EventError::InvalidEventName { .. } | EventError::InvalidHandler
        )
    }
}
