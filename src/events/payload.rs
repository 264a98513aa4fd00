//! # Payload marker for data-less channels.
//!
//! The untyped flavor of the registry is `WeakEventManager<NoPayload>` — the
//! same core logic as the typed flavor, with [`NoPayload`] standing in for a
//! payload value. Handlers on such channels receive the marker and ignore it.
//!
//! ## Example
//! ```
//! use weakcast::{EventHandler, NoPayload, WeakEventManager};
//!
//! let manager: WeakEventManager = WeakEventManager::new();
//! let handler = EventHandler::subscriber(|_sender, _payload: Option<&NoPayload>| {});
//! manager.add_event_handler(&handler, "Refreshed").unwrap();
//! manager.raise(None, "Refreshed");
//! ```

/// Marker payload for channels that broadcast no data.
///
/// Zero-sized; exists so the untyped registry flavor can share the typed
/// core without a second implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPayload;
