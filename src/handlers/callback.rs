//! Tagged storage for the supported call shapes.
//!
//! Handlers are stored as `Arc<dyn Fn …>` behind a closed tag set rather than
//! any reflective dispatch: the active raise overload matches on the tag and
//! either invokes, skips, or reports the documented mismatch. Cloning a
//! [`Callback`] bumps a refcount; identity is pointer identity of the `Arc`.

use std::any::Any;
use std::sync::Arc;

/// Subscriber-shaped callable: receives `(sender, payload)`.
pub(crate) type SubscriberFn<T> = dyn Fn(Option<&dyn Any>, Option<&T>) + Send + Sync;

/// Action-shaped callable: receives the payload only.
pub(crate) type ActionFn<T> = dyn Fn(Option<&T>) + Send + Sync;

/// A stored callable, tagged by call shape.
pub(crate) enum Callback<T> {
    /// Driven by the sender-carrying raise.
    Subscriber(Arc<SubscriberFn<T>>),
    /// Driven by the payload-only raise.
    Action(Arc<ActionFn<T>>),
}

impl<T> Callback<T> {
    pub(crate) fn subscriber<F>(f: F) -> Self
    where
        F: Fn(Option<&dyn Any>, Option<&T>) + Send + Sync + 'static,
    {
        Callback::Subscriber(Arc::new(f))
    }

    pub(crate) fn action<F>(f: F) -> Self
    where
        F: Fn(Option<&T>) + Send + Sync + 'static,
    {
        Callback::Action(Arc::new(f))
    }

    /// Identity comparison: same `Arc`, same shape.
    pub(crate) fn ptr_eq(&self, other: &Callback<T>) -> bool {
        match (self, other) {
            (Callback::Subscriber(a), Callback::Subscriber(b)) => Arc::ptr_eq(a, b),
            (Callback::Action(a), Callback::Action(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Shape tag for logs.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Callback::Subscriber(_) => "subscriber",
            Callback::Action(_) => "action",
        }
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        match self {
            Callback::Subscriber(f) => Callback::Subscriber(Arc::clone(f)),
            Callback::Action(f) => Callback::Action(Arc::clone(f)),
        }
    }
}
