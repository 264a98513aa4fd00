//! # Weak handle to a shared registry.
//!
//! [`ManagerHandle`] lets publishers and subscribers talk to a registry they
//! do not own — and must not keep alive. Every operation upgrades the inner
//! weak reference first and fails with [`EventError::UnboundManager`] once the
//! owning side has dropped the registry.
//!
//! Handlers that need to reach their own registry from inside a callback
//! (e.g. to unsubscribe themselves) should capture a handle rather than an
//! `Arc` of the registry, or the subscription list ends up owning its owner.
//!
//! ## Example
//! ```
//! use std::sync::Arc;
//! use weakcast::{EventHandler, WeakEventManager};
//!
//! let manager = Arc::new(WeakEventManager::<u32>::new());
//! let handle = manager.handle();
//!
//! let handler = EventHandler::subscriber(|_sender, _payload: Option<&u32>| {});
//! handle.add_event_handler(&handler, "Scored").unwrap();
//! handle.raise_event(None, Some(&7), "Scored").unwrap();
//!
//! drop(manager);
//! assert!(handle.raise_event(None, Some(&7), "Scored").is_err());
//! ```

use std::any::Any;
use std::sync::{Arc, Weak};

use crate::error::EventError;
use crate::events::NoPayload;
use crate::handlers::EventHandler;
use crate::registry::manager::WeakEventManager;

/// Weak, cloneable reference to a [`WeakEventManager`].
pub struct ManagerHandle<T> {
    manager: Weak<WeakEventManager<T>>,
}

impl<T> ManagerHandle<T> {
    pub(crate) fn new(manager: Weak<WeakEventManager<T>>) -> Self {
        Self { manager }
    }

    /// A handle bound to nothing; every operation fails with
    /// [`EventError::UnboundManager`].
    ///
    /// Useful as a placeholder for components wired up late.
    pub fn detached() -> Self {
        Self {
            manager: Weak::new(),
        }
    }

    /// True while the underlying registry is still alive.
    pub fn is_bound(&self) -> bool {
        self.manager.strong_count() > 0
    }

    /// See [`WeakEventManager::add_event_handler`].
    ///
    /// # Errors
    /// [`EventError::UnboundManager`] when the registry is gone, otherwise the
    /// underlying operation's errors.
    pub fn add_event_handler(
        &self,
        handler: &EventHandler<T>,
        event_name: &str,
    ) -> Result<(), EventError> {
        self.upgrade()?.add_event_handler(handler, event_name)
    }

    /// See [`WeakEventManager::remove_event_handler`].
    ///
    /// # Errors
    /// [`EventError::UnboundManager`] when the registry is gone, otherwise the
    /// underlying operation's errors.
    pub fn remove_event_handler(
        &self,
        handler: &EventHandler<T>,
        event_name: &str,
    ) -> Result<(), EventError> {
        self.upgrade()?.remove_event_handler(handler, event_name)
    }

    /// See [`WeakEventManager::raise_event`].
    ///
    /// # Errors
    /// [`EventError::UnboundManager`] when the registry is gone.
    pub fn raise_event(
        &self,
        sender: Option<&dyn Any>,
        payload: Option<&T>,
        event_name: &str,
    ) -> Result<(), EventError> {
        self.upgrade()?.raise_event(sender, payload, event_name);
        Ok(())
    }

    /// See [`WeakEventManager::raise_payload`].
    ///
    /// # Errors
    /// [`EventError::UnboundManager`] when the registry is gone, otherwise the
    /// underlying operation's errors.
    pub fn raise_payload(&self, payload: Option<&T>, event_name: &str) -> Result<(), EventError> {
        self.upgrade()?.raise_payload(payload, event_name)
    }

    fn upgrade(&self) -> Result<Arc<WeakEventManager<T>>, EventError> {
        self.manager.upgrade().ok_or(EventError::UnboundManager)
    }
}

impl ManagerHandle<NoPayload> {
    /// See [`WeakEventManager::raise`].
    ///
    /// # Errors
    /// [`EventError::UnboundManager`] when the registry is gone.
    pub fn raise(&self, sender: Option<&dyn Any>, event_name: &str) -> Result<(), EventError> {
        self.upgrade()?.raise(sender, event_name);
        Ok(())
    }

    /// See [`WeakEventManager::raise_signal`].
    ///
    /// # Errors
    /// [`EventError::UnboundManager`] when the registry is gone, otherwise the
    /// underlying operation's errors.
    pub fn raise_signal(&self, event_name: &str) -> Result<(), EventError> {
        self.upgrade()?.raise_signal(event_name)
    }
}

impl<T> Clone for ManagerHandle<T> {
    fn clone(&self) -> Self {
        Self {
            manager: self.manager.clone(),
        }
    }
}
