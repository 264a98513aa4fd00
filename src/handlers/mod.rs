//! Handler descriptors and their storage shapes.
//!
//! A caller builds an [`EventHandler`], registers it under a channel name, and
//! keeps it (or a clone) to unsubscribe later. Internally a descriptor is the
//! pair of:
//! - [`TargetRef`](target::TargetRef) — weak identity of the bound instance
//!   (or the free-standing marker);
//! - [`Callback`](callback::Callback) — tagged variant over the closed set of
//!   supported call shapes.
//!
//! ## Shapes
//! - **subscriber** — `Fn(sender, payload)`; driven by the sender-carrying raise.
//! - **action** — `Fn(payload)`; driven by the payload-only raise.
//!
//! The registry dispatches on the tag; a shape never meets the wrong raise
//! overload without being detected first.

mod callback;
mod handler;
mod target;

pub(crate) use callback::Callback;
pub(crate) use target::{Resolved, TargetRef};
pub use handler::EventHandler;
