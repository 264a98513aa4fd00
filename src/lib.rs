//! # weakcast
//!
//! **Weakcast** is a weak-reference event manager for Rust.
//!
//! It lets an object broadcast notifications on named channels without
//! forcing subscribers (or their owning objects) to stay alive just because
//! they are registered. Subscriptions hold their target through `Weak`; a
//! target that is otherwise unreferenced is reclaimed normally, and its
//! subscription is silently skipped and pruned on the next broadcast.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//!  │ Subscriber  │    │ Subscriber  │    │  free fn /  │
//!  │ (Arc<S1>)   │    │ (Arc<S2>)   │    │  closure    │
//!  └──────┬──────┘    └──────┬──────┘    └──────┬──────┘
//!         │ Weak<S1>         │ Weak<S2>         │ (no target)
//!         ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  WeakEventManager<T>                                      │
//! │  channels: name ──► [entry, entry, …]  (insertion order)  │
//! └──────────────────────────┬────────────────────────────────┘
//!                            │ raise_event(sender, payload, name)
//!                            ▼
//!              resolve weak target per entry
//!                ├─ alive ──► invoke handler on original instance
//!                ├─ free  ──► invoke handler
//!                └─ dead  ──► skip, prune after the pass
//! ```
//!
//! ### Subscription lifecycle
//! ```text
//! Registered ──► Alive (fires on every matching broadcast)
//!      │
//!      │ target's last Arc dropped (outside the registry's control)
//!      ▼
//!    Dead (skipped) ──► Removed (pruned by the next broadcast or
//!                       explicit removal touching the channel)
//! ```
//!
//! ## Features
//! | Area            | Description                                                        | Key types / traits                  |
//! |-----------------|--------------------------------------------------------------------|-------------------------------------|
//! | **Registry**    | Named channels, weakly-held ordered subscriptions.                 | [`WeakEventManager`]                |
//! | **Handlers**    | Descriptors over the supported call shapes, bound or free.         | [`EventHandler`]                    |
//! | **Handles**     | Weak registry references that fail loudly once the owner is gone.  | [`ManagerHandle`]                   |
//! | **Inspection**  | Hooks observing registration, pruning, and broadcasts.             | [`Inspect`]                         |
//! | **Errors**      | Typed fail-fast validation and shape-mismatch reporting.           | [`EventError`]                      |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use weakcast::{EventHandler, WeakEventManager};
//!
//! struct Display {
//!     label: &'static str,
//! }
//!
//! impl Display {
//!     fn on_temperature(&self, _sender: Option<&dyn Any>, celsius: Option<&f64>) {
//!         if let Some(celsius) = celsius {
//!             println!("{}: {celsius}°C", self.label);
//!         }
//!     }
//! }
//!
//! let manager: WeakEventManager<f64> = WeakEventManager::new();
//!
//! let panel = Arc::new(Display { label: "panel" });
//! let handler = EventHandler::bound_subscriber(&panel, Display::on_temperature);
//! manager.add_event_handler(&handler, "TemperatureChanged").unwrap();
//!
//! // fires while the panel is alive…
//! manager.raise_event(None, Some(&21.5), "TemperatureChanged");
//!
//! // …and is skipped and pruned once it is not.
//! drop(panel);
//! manager.raise_event(None, Some(&22.0), "TemperatureChanged");
//! assert_eq!(manager.handler_count("TemperatureChanged"), 0);
//! ```

mod error;
mod events;
mod handlers;
mod inspectors;
mod registry;

// ---- Public re-exports ----

pub use error::EventError;
pub use events::NoPayload;
pub use handlers::EventHandler;
pub use inspectors::Inspect;
pub use registry::{ManagerBuilder, ManagerHandle, WeakEventManager};

// Optional: expose a simple built-in logging hook (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use inspectors::LogWriter;
