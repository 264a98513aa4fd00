//! # Inspection hooks for registry activity.
//!
//! This module provides the [`Inspect`] trait and a built-in implementation
//! for observing what a [`WeakEventManager`](crate::WeakEventManager) does:
//! registrations, removals, pruning of dead entries, and broadcasts.
//!
//! ## Architecture
//! ```text
//! Registry operation ──► bookkeeping (under lock) ──► hooks (outside lock)
//!                                                        │
//!                                                   ┌────┴─────┬────────┐
//!                                                   ▼          ▼        ▼
//!                                               LogWriter   Metrics   ...
//! ```
//!
//! ## Implementing custom hooks
//! ```
//! use weakcast::Inspect;
//!
//! struct PruneAlert;
//!
//! impl Inspect for PruneAlert {
//!     fn entries_pruned(&self, event_name: &str, pruned: usize) {
//!         eprintln!("{pruned} stale subscriptions dropped from {event_name}");
//!     }
//! }
//! ```

mod inspect;

#[cfg(feature = "logging")]
mod log;

pub use inspect::Inspect;

#[cfg(feature = "logging")]
pub use log::LogWriter;
