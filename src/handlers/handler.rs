//! # Handler descriptors: what callers register and keep.
//!
//! [`EventHandler`] pairs a callable with the (optional) weak identity of the
//! instance it is bound to. The descriptor — not the closure — is the unit of
//! identity: register it, keep a clone, and pass the clone to
//! [`remove_event_handler`](crate::WeakEventManager::remove_event_handler) to
//! unsubscribe. Two descriptors built from the same function are distinct.
//!
//! ## Construction
//! | Constructor | Target | Shape |
//! |---|---|---|
//! | [`EventHandler::subscriber`] | free-standing | `(sender, payload)` |
//! | [`EventHandler::action`] | free-standing | `(payload)` |
//! | [`EventHandler::bound_subscriber`] | `&Arc<S>` | `(sender, payload)` |
//! | [`EventHandler::bound_action`] | `&Arc<S>` | `(payload)` |
//! | [`EventHandler::weak_subscriber`] | `Weak<S>` | `(sender, payload)` |
//! | [`EventHandler::weak_action`] | `Weak<S>` | `(payload)` |
//!
//! Bound handlers hold their target weakly: the registry never keeps the
//! instance alive, and a handler whose instance has been reclaimed is skipped
//! and pruned at broadcast time.
//!
//! ## Example
//! ```
//! use std::any::Any;
//! use std::sync::Arc;
//! use weakcast::{EventHandler, WeakEventManager};
//!
//! struct Thermostat;
//!
//! impl Thermostat {
//!     fn on_reading(&self, _sender: Option<&dyn Any>, reading: Option<&f64>) {
//!         if let Some(celsius) = reading {
//!             println!("reading: {celsius}");
//!         }
//!     }
//! }
//!
//! let thermostat = Arc::new(Thermostat);
//! let handler = EventHandler::bound_subscriber(&thermostat, Thermostat::on_reading);
//!
//! let manager: WeakEventManager<f64> = WeakEventManager::new();
//! manager.add_event_handler(&handler, "ReadingChanged").unwrap();
//! manager.raise_event(None, Some(&21.5), "ReadingChanged");
//! ```

use std::any::Any;
use std::sync::{Arc, Weak};

use crate::error::EventError;
use crate::handlers::callback::Callback;
use crate::handlers::target::TargetRef;

/// A registerable handler: a callable plus the weak identity it is bound to.
///
/// Cheap to clone (refcount bumps); clones share identity with the original.
pub struct EventHandler<T> {
    target: TargetRef,
    callback: Callback<T>,
}

impl<T> EventHandler<T> {
    /// Free-standing subscriber-shaped handler.
    ///
    /// Has no bound target, is never pruned for liveness, and fires on every
    /// matching sender-carrying raise.
    pub fn subscriber<F>(f: F) -> Self
    where
        F: Fn(Option<&dyn Any>, Option<&T>) + Send + Sync + 'static,
    {
        Self {
            target: TargetRef::Free,
            callback: Callback::subscriber(f),
        }
    }

    /// Free-standing action-shaped handler (payload only, no sender).
    pub fn action<F>(f: F) -> Self
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        Self {
            target: TargetRef::Free,
            callback: Callback::action(f),
        }
    }

    /// Subscriber-shaped handler bound to `target`.
    ///
    /// Only a weak reference is captured; dropping every other `Arc` to the
    /// target makes the subscription dead and eligible for pruning.
    pub fn bound_subscriber<S, F>(target: &Arc<S>, f: F) -> Self
    where
        S: Send + Sync + 'static,
        F: Fn(&S, Option<&dyn Any>, Option<&T>) + Send + Sync + 'static,
    {
        Self::weak_subscriber(Arc::downgrade(target), f)
    }

    /// Action-shaped handler bound to `target`.
    pub fn bound_action<S, F>(target: &Arc<S>, f: F) -> Self
    where
        S: Send + Sync + 'static,
        F: Fn(&S, Option<&T>) + Send + Sync + 'static,
    {
        Self::weak_action(Arc::downgrade(target), f)
    }

    /// Subscriber-shaped handler bound to an already-weak target.
    ///
    /// Useful when the subscriber wires itself up from inside its own
    /// constructor. A descriptor whose weak target is already dead is rejected
    /// with [`EventError::InvalidHandler`] at registration/removal time.
    pub fn weak_subscriber<S, F>(target: Weak<S>, f: F) -> Self
    where
        S: Send + Sync + 'static,
        F: Fn(&S, Option<&dyn Any>, Option<&T>) + Send + Sync + 'static,
    {
        let call_target = target.clone();
        Self {
            target: TargetRef::bound(target),
            callback: Callback::subscriber(move |sender, payload| {
                if let Some(strong) = call_target.upgrade() {
                    f(&strong, sender, payload);
                }
            }),
        }
    }

    /// Action-shaped handler bound to an already-weak target.
    pub fn weak_action<S, F>(target: Weak<S>, f: F) -> Self
    where
        S: Send + Sync + 'static,
        F: Fn(&S, Option<&T>) + Send + Sync + 'static,
    {
        let call_target = target.clone();
        Self {
            target: TargetRef::bound(target),
            callback: Callback::action(move |payload| {
                if let Some(strong) = call_target.upgrade() {
                    f(&strong, payload);
                }
            }),
        }
    }

    /// True when this handler is bound to a target instance.
    pub fn has_target(&self) -> bool {
        matches!(self.target, TargetRef::Bound(_))
    }

    /// True when this handler could still fire: free-standing, or bound to a
    /// target that is currently alive.
    pub fn is_live(&self) -> bool {
        !self.target.is_dead()
    }

    /// Validation shared by registration and removal.
    pub(crate) fn ensure_live(&self) -> Result<(), EventError> {
        if self.target.is_dead() {
            return Err(EventError::InvalidHandler);
        }
        Ok(())
    }

    pub(crate) fn target(&self) -> &TargetRef {
        &self.target
    }

    pub(crate) fn callback(&self) -> &Callback<T> {
        &self.callback
    }
}

impl<T> Clone for EventHandler<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            callback: self.callback.clone(),
        }
    }
}
