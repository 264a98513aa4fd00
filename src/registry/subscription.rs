//! One channel entry: a registered (target, callback) pair.
//!
//! Subscriptions are cheap clones of the descriptor the caller registered —
//! the registry and the caller share the same `Arc`/`Weak` allocations, which
//! is what makes removal-by-identity and weak liveness tracking line up.

use crate::handlers::{Callback, EventHandler, Resolved, TargetRef};

/// A registered entry under one event name.
pub(crate) struct Subscription<T> {
    target: TargetRef,
    callback: Callback<T>,
}

impl<T> Subscription<T> {
    /// Captures the descriptor's target and callback (refcount bumps only).
    pub(crate) fn new(handler: &EventHandler<T>) -> Self {
        Self {
            target: handler.target().clone(),
            callback: handler.callback().clone(),
        }
    }

    /// True when the bound target has been reclaimed.
    pub(crate) fn is_dead(&self) -> bool {
        self.target.is_dead()
    }

    /// Resolves the target for one invocation attempt.
    pub(crate) fn resolve(&self) -> Resolved {
        self.target.resolve()
    }

    /// Identity match against a caller-held descriptor.
    pub(crate) fn matches(&self, handler: &EventHandler<T>) -> bool {
        self.callback.ptr_eq(handler.callback()) && self.target.matches(handler.target())
    }

    pub(crate) fn callback(&self) -> &Callback<T> {
        &self.callback
    }
}

impl<T> Clone for Subscription<T> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            callback: self.callback.clone(),
        }
    }
}
