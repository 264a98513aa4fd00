//! # Core inspection trait
//!
//! `Inspect` is the extension point for observing registry activity (logging,
//! metrics, leak detection). Every method has a no-op default, so an
//! implementation overrides only what it cares about.
//!
//! ## Contract
//! - Hooks are called synchronously on the thread performing the operation,
//!   **after** bookkeeping completes and outside the registry lock — a hook
//!   may safely call back into the registry.
//! - Implementations should stay cheap; a slow hook delays the caller.

/// Contract for registry activity observers.
pub trait Inspect: Send + Sync + 'static {
    /// A handler was registered; `registered` is the channel's new entry count.
    fn handler_added(&self, event_name: &str, registered: usize) {
        let _ = (event_name, registered);
    }

    /// A handler was removed (explicitly or via `clear`); `remaining` is the
    /// channel's new entry count.
    fn handler_removed(&self, event_name: &str, remaining: usize) {
        let _ = (event_name, remaining);
    }

    /// Dead entries were pruned from a channel.
    fn entries_pruned(&self, event_name: &str, pruned: usize) {
        let _ = (event_name, pruned);
    }

    /// A broadcast pass completed. `invoked` handlers fired; `skipped` were
    /// shape-incompatible with the overload used.
    fn event_raised(&self, event_name: &str, invoked: usize, skipped: usize) {
        let _ = (event_name, invoked, skipped);
    }

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
