//! # The weak event registry: named channels with weakly-held subscribers.
//!
//! [`WeakEventManager`] maintains, per event name, an ordered list of
//! subscriptions. Each broadcast resolves every entry's weak target, invokes
//! the live ones in insertion order, and prunes the reclaimed ones.
//!
//! ## Architecture
//! ```text
//! add_event_handler(h, "Name") ──► channels["Name"].push(entry)
//!
//! raise_event(sender, payload, "Name")
//!     │  snapshot channels["Name"]          (lock released before callbacks)
//!     ├─► entry: free target      ──► invoke(sender, payload)
//!     ├─► entry: target upgrades  ──► invoke bound to resolved instance
//!     ├─► entry: target reclaimed ──► skip, count as dead
//!     └─► dead > 0 ──► retain live entries  (prune)
//! ```
//!
//! ## Rules
//! - **Insertion order is invocation order** per channel; duplicates fire once
//!   per registration.
//! - **The lock is never held while a handler runs**: handlers may add,
//!   remove, or raise on the same registry (including removing themselves)
//!   without deadlocking or disturbing the in-progress pass. Structural
//!   changes become visible on the next broadcast.
//! - **Dead entries are never invoked** and are pruned lazily, only by a
//!   broadcast or an explicit removal touching their channel.
//! - **Unknown names are a no-op** for raise; only add/remove validate names.
//!
//! ## Example
//! ```
//! use weakcast::{EventHandler, WeakEventManager};
//!
//! let manager: WeakEventManager<String> = WeakEventManager::new();
//! let handler = EventHandler::subscriber(|_sender, message: Option<&String>| {
//!     if let Some(message) = message {
//!         println!("received: {message}");
//!     }
//! });
//!
//! manager.add_event_handler(&handler, "MessageSent").unwrap();
//! manager.raise_event(None, Some(&"hello".to_string()), "MessageSent");
//! manager.remove_event_handler(&handler, "MessageSent").unwrap();
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, trace};
use parking_lot::Mutex;

use crate::error::EventError;
use crate::events::{validate_event_name, NoPayload};
use crate::handlers::{Callback, EventHandler, Resolved};
use crate::inspectors::Inspect;
use crate::registry::builder::ManagerBuilder;
use crate::registry::handle::ManagerHandle;
use crate::registry::subscription::Subscription;

/// Registry of weakly-held event subscriptions, grouped by event name.
///
/// The type parameter is the payload handlers receive; it defaults to
/// [`NoPayload`] for channels that broadcast no data. All methods take
/// `&self`; the registry is `Send + Sync` and serializes its bookkeeping
/// internally.
pub struct WeakEventManager<T = NoPayload> {
    channels: Mutex<HashMap<String, Vec<Subscription<T>>>>,
    inspectors: Vec<Arc<dyn Inspect>>,
}

impl<T> WeakEventManager<T> {
    /// Creates an empty registry with no inspection hooks.
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
            inspectors: Vec::new(),
        }
    }

    /// Starts a [`ManagerBuilder`] for a registry with hooks or pre-sized
    /// channel storage.
    pub fn builder() -> ManagerBuilder<T> {
        ManagerBuilder::new()
    }

    pub(crate) fn with_parts(inspectors: Vec<Arc<dyn Inspect>>, channel_capacity: usize) -> Self {
        Self {
            channels: Mutex::new(HashMap::with_capacity(channel_capacity)),
            inspectors,
        }
    }

    /// Creates a weak [`ManagerHandle`] to a shared registry.
    ///
    /// The handle does not keep the registry alive; operations through it fail
    /// with [`EventError::UnboundManager`] once the registry is dropped.
    pub fn handle(self: &Arc<Self>) -> ManagerHandle<T> {
        ManagerHandle::new(Arc::downgrade(self))
    }

    /// Registers `handler` under `event_name`.
    ///
    /// Appends to the channel's list; registration order determines invocation
    /// order. No duplicate detection is performed — registering the same
    /// descriptor twice yields two invocations per broadcast.
    ///
    /// # Errors
    /// - [`EventError::InvalidEventName`] — empty or whitespace-only name.
    /// - [`EventError::InvalidHandler`] — the descriptor's bound target is
    ///   already dead.
    pub fn add_event_handler(
        &self,
        handler: &EventHandler<T>,
        event_name: &str,
    ) -> Result<(), EventError> {
        validate_event_name(event_name)?;
        handler.ensure_live()?;

        let registered = {
            let mut channels = self.channels.lock();
            let entries = channels.entry(event_name.to_string()).or_default();
            entries.push(Subscription::new(handler));
            entries.len()
        };

        trace!("registered {} handler for {event_name:?} (total {registered})", handler.callback().shape());
        for inspector in &self.inspectors {
            inspector.handler_added(event_name, registered);
        }
        Ok(())
    }

    /// Unregisters `handler` from `event_name`.
    ///
    /// Removes the **first** entry matching the descriptor's identity
    /// (callback and bound target), so one removal undoes one registration.
    /// A handler that was never registered is a silent no-op. Dead entries
    /// encountered in the channel are pruned as a side effect.
    ///
    /// # Errors
    /// Same contracts as [`add_event_handler`](Self::add_event_handler);
    /// validation runs on remove's own path.
    pub fn remove_event_handler(
        &self,
        handler: &EventHandler<T>,
        event_name: &str,
    ) -> Result<(), EventError> {
        validate_event_name(event_name)?;
        handler.ensure_live()?;

        let (removed, remaining, pruned) = {
            let mut channels = self.channels.lock();
            match channels.get_mut(event_name) {
                None => (false, 0, 0),
                Some(entries) => {
                    let before = entries.len();
                    entries.retain(|entry| !entry.is_dead());
                    let pruned = before - entries.len();

                    let removed = match entries.iter().position(|entry| entry.matches(handler)) {
                        Some(index) => {
                            entries.remove(index);
                            true
                        }
                        None => false,
                    };
                    (removed, entries.len(), pruned)
                }
            }
        };

        if removed {
            trace!("removed handler from {event_name:?} (remaining {remaining})");
            for inspector in &self.inspectors {
                inspector.handler_removed(event_name, remaining);
            }
        }
        self.report_pruned(event_name, pruned);
        Ok(())
    }

    /// Broadcasts to the subscriber-shaped handlers of `event_name`.
    ///
    /// Iterates a snapshot of the channel in insertion order: free-standing
    /// entries fire unconditionally; bound entries fire with their target
    /// resolved and held alive for the duration of the call; reclaimed entries
    /// are skipped and pruned after the pass. Action-shaped entries are
    /// signature-incompatible with this overload and are skipped.
    ///
    /// Raising a name with no registered entries is a no-op.
    pub fn raise_event(&self, sender: Option<&dyn Any>, payload: Option<&T>, event_name: &str) {
        let Some(snapshot) = self.snapshot(event_name) else {
            return;
        };

        let mut invoked = 0usize;
        let mut skipped = 0usize;
        let mut dead = 0usize;

        for entry in &snapshot {
            let _live = match entry.resolve() {
                Resolved::Free => None,
                Resolved::Alive(strong) => Some(strong),
                Resolved::Dead => {
                    dead += 1;
                    continue;
                }
            };
            match entry.callback() {
                Callback::Subscriber(f) => {
                    f(sender, payload);
                    invoked += 1;
                }
                Callback::Action(_) => {
                    debug!("skipping action-shaped handler on sender-carrying raise of {event_name:?}");
                    skipped += 1;
                }
            }
        }

        if dead > 0 {
            self.prune(event_name);
        }
        for inspector in &self.inspectors {
            inspector.event_raised(event_name, invoked, skipped);
        }
    }

    /// Broadcasts to the action-shaped handlers of `event_name`.
    ///
    /// Same snapshot/resolve/prune algorithm as
    /// [`raise_event`](Self::raise_event), driving payload-only handlers.
    ///
    /// # Errors
    /// [`EventError::InvalidHandleEvent`] when a subscriber-shaped entry is
    /// encountered: the caller wired a `(sender, payload)` handler to the
    /// payload-only broadcast. Entries earlier in the channel have already
    /// fired; the mismatched entry is never invoked.
    pub fn raise_payload(&self, payload: Option<&T>, event_name: &str) -> Result<(), EventError> {
        let Some(snapshot) = self.snapshot(event_name) else {
            return Ok(());
        };

        let mut invoked = 0usize;
        let mut dead = 0usize;
        let mut outcome = Ok(());

        for entry in &snapshot {
            let _live = match entry.resolve() {
                Resolved::Free => None,
                Resolved::Alive(strong) => Some(strong),
                Resolved::Dead => {
                    dead += 1;
                    continue;
                }
            };
            match entry.callback() {
                Callback::Action(f) => {
                    f(payload);
                    invoked += 1;
                }
                Callback::Subscriber(_) => {
                    outcome = Err(EventError::InvalidHandleEvent {
                        event: event_name.to_string(),
                    });
                    break;
                }
            }
        }

        if dead > 0 {
            self.prune(event_name);
        }
        for inspector in &self.inspectors {
            inspector.event_raised(event_name, invoked, 0);
        }
        outcome
    }

    /// Number of entries currently registered under `event_name`.
    ///
    /// Includes dead entries that no broadcast or removal has pruned yet.
    pub fn handler_count(&self, event_name: &str) -> usize {
        self.channels
            .lock()
            .get(event_name)
            .map_or(0, |entries| entries.len())
    }

    /// True when no channel has any registered entry.
    pub fn is_empty(&self) -> bool {
        self.channels.lock().values().all(|entries| entries.is_empty())
    }

    /// Sorted list of channel names that currently have registered entries.
    pub fn event_names(&self) -> Vec<String> {
        let channels = self.channels.lock();
        let mut names: Vec<String> = channels
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Drops every entry registered under `event_name`.
    pub fn clear(&self, event_name: &str) {
        let cleared = {
            let mut channels = self.channels.lock();
            match channels.get_mut(event_name) {
                Some(entries) => {
                    let cleared = entries.len();
                    entries.clear();
                    cleared
                }
                None => 0,
            }
        };
        if cleared > 0 {
            trace!("cleared {cleared} handlers from {event_name:?}");
            for inspector in &self.inspectors {
                inspector.handler_removed(event_name, 0);
            }
        }
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    /// Copies the channel's entries so callbacks run without the lock.
    fn snapshot(&self, event_name: &str) -> Option<Vec<Subscription<T>>> {
        let channels = self.channels.lock();
        channels.get(event_name).map(|entries| entries.to_vec())
    }

    /// Drops dead entries from the live channel by liveness, not by index —
    /// handlers may have restructured the channel mid-pass.
    fn prune(&self, event_name: &str) {
        let pruned = {
            let mut channels = self.channels.lock();
            match channels.get_mut(event_name) {
                Some(entries) => {
                    let before = entries.len();
                    entries.retain(|entry| !entry.is_dead());
                    before - entries.len()
                }
                None => 0,
            }
        };
        self.report_pruned(event_name, pruned);
    }

    fn report_pruned(&self, event_name: &str, pruned: usize) {
        if pruned == 0 {
            return;
        }
        trace!("pruned {pruned} dead entries from {event_name:?}");
        for inspector in &self.inspectors {
            inspector.entries_pruned(event_name, pruned);
        }
    }
}

impl WeakEventManager<NoPayload> {
    /// Raises a data-less event toward subscriber-shaped handlers.
    ///
    /// Handlers receive `Some(&NoPayload)` as their payload.
    pub fn raise(&self, sender: Option<&dyn Any>, event_name: &str) {
        self.raise_event(sender, Some(&NoPayload), event_name);
    }

    /// Raises a data-less event toward action-shaped handlers.
    ///
    /// # Errors
    /// [`EventError::InvalidHandleEvent`] when the channel holds a
    /// subscriber-shaped entry; see [`raise_payload`](Self::raise_payload).
    pub fn raise_signal(&self, event_name: &str) -> Result<(), EventError> {
        self.raise_payload(Some(&NoPayload), event_name)
    }
}

impl<T> Default for WeakEventManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Publisher;

    struct Listener {
        hits: AtomicUsize,
    }

    impl Listener {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                hits: AtomicUsize::new(0),
            })
        }

        fn on_event(&self, _sender: Option<&dyn Any>, _payload: Option<&String>) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }

        fn hits(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }
    }

    fn counting_handler(counter: &Arc<AtomicUsize>) -> EventHandler<String> {
        let counter = Arc::clone(counter);
        EventHandler::subscriber(move |_sender, _payload| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_add_then_raise_invokes_once() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_event(None, Some(&"Test".to_string()), "TestEvent");

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_receives_sender_and_payload() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let handler = {
            let seen = Arc::clone(&seen);
            EventHandler::subscriber(move |sender: Option<&dyn Any>, payload: Option<&String>| {
                let sender = sender.expect("sender must be delivered");
                assert!(sender.downcast_ref::<Publisher>().is_some());
                assert_eq!(payload.expect("payload must be delivered"), "Test");
                seen.fetch_add(1, Ordering::SeqCst);
            })
        };

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        let publisher = Publisher;
        manager.raise_event(Some(&publisher), Some(&"Test".to_string()), "TestEvent");

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_null_sender_and_null_payload_are_delivered() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let handler = {
            let seen = Arc::clone(&seen);
            EventHandler::subscriber(move |sender: Option<&dyn Any>, payload: Option<&String>| {
                assert!(sender.is_none(), "absent sender must arrive as None");
                assert!(payload.is_none(), "absent payload must arrive as None");
                seen.fetch_add(1, Ordering::SeqCst);
            })
        };

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_raise_without_subscribers_is_noop() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        manager.raise_event(None, None, "Nobody");
        assert!(manager.raise_payload(None, "Nobody").is_ok());
    }

    #[test]
    fn test_raise_other_name_does_not_invoke() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestName").unwrap();
        manager.raise_event(None, None, "OtherName");

        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_add_rejects_bad_names() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let handler: EventHandler<String> = EventHandler::subscriber(|_, _| {});

        for name in ["", " ", "   "] {
            let err = manager.add_event_handler(&handler, name).unwrap_err();
            assert!(
                matches!(err, EventError::InvalidEventName { .. }),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_remove_rejects_bad_names() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let handler: EventHandler<String> = EventHandler::subscriber(|_, _| {});

        for name in ["", " ", "   "] {
            let err = manager.remove_event_handler(&handler, name).unwrap_err();
            assert!(
                matches!(err, EventError::InvalidEventName { .. }),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_add_and_remove_reject_dead_handler() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let listener = Listener::new();
        let handler = EventHandler::bound_subscriber(&listener, Listener::on_event);
        drop(listener);

        assert!(matches!(
            manager.add_event_handler(&handler, "TestEvent"),
            Err(EventError::InvalidHandler)
        ));
        assert!(matches!(
            manager.remove_event_handler(&handler, "TestEvent"),
            Err(EventError::InvalidHandler)
        ));
    }

    #[test]
    fn test_add_remove_then_raise_does_not_invoke() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.remove_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(manager.handler_count("TestEvent"), 0);
    }

    #[test]
    fn test_remove_unregistered_is_silent_noop() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let handler: EventHandler<String> = EventHandler::subscriber(|_, _| {});
        assert!(manager.remove_event_handler(&handler, "TestEvent").is_ok());
    }

    #[test]
    fn test_duplicate_registration_fires_twice() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_remove_deletes_only_first_duplicate() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.remove_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(manager.handler_count("TestEvent"), 1);
    }

    #[test]
    fn test_insertion_order_is_invocation_order() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

        let mut handlers = Vec::new();
        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            let handler: EventHandler<String> =
                EventHandler::subscriber(move |_s, _p| order.lock().push(tag));
            manager.add_event_handler(&handler, "TestEvent").unwrap();
            handlers.push(handler);
        }

        manager.raise_event(None, None, "TestEvent");
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dead_target_is_skipped_and_pruned() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let listener = Listener::new();
        let probe = Arc::downgrade(&listener);
        let handler = EventHandler::bound_subscriber(&listener, Listener::on_event);

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");
        assert_eq!(listener.hits(), 1);

        drop(listener);
        assert!(probe.upgrade().is_none(), "registry must not keep the target alive");

        manager.raise_event(None, None, "TestEvent");
        assert_eq!(
            manager.handler_count("TestEvent"),
            0,
            "dead entry must be pruned by the broadcast"
        );

        // re-adding a live handler afterward must not collide with the
        // pruned entry
        let counter = Arc::new(AtomicUsize::new(0));
        let fresh = counting_handler(&counter);
        manager.add_event_handler(&fresh, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert_eq!(manager.handler_count("TestEvent"), 1);
    }

    #[test]
    fn test_explicit_remove_prunes_dead_siblings() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let listener = Listener::new();
        let doomed = EventHandler::bound_subscriber(&listener, Listener::on_event);
        let counter = Arc::new(AtomicUsize::new(0));
        let kept = counting_handler(&counter);
        let removed = counting_handler(&Arc::new(AtomicUsize::new(0)));

        manager.add_event_handler(&doomed, "TestEvent").unwrap();
        manager.add_event_handler(&kept, "TestEvent").unwrap();
        manager.add_event_handler(&removed, "TestEvent").unwrap();
        drop(listener);

        manager.remove_event_handler(&removed, "TestEvent").unwrap();
        assert_eq!(
            manager.handler_count("TestEvent"),
            1,
            "removal must also sweep the dead entry"
        );
    }

    #[test]
    fn test_self_unsubscription_during_raise() {
        let manager: Arc<WeakEventManager<String>> = Arc::new(WeakEventManager::new());
        let slot: Arc<Mutex<Option<EventHandler<String>>>> = Arc::new(Mutex::new(None));
        let first_hits = Arc::new(AtomicUsize::new(0));

        let one_shot = {
            let manager = Arc::clone(&manager);
            let slot = Arc::clone(&slot);
            let hits = Arc::clone(&first_hits);
            EventHandler::subscriber(move |_s, _p| {
                hits.fetch_add(1, Ordering::SeqCst);
                if let Some(me) = slot.lock().take() {
                    manager.remove_event_handler(&me, "TestEvent").unwrap();
                }
            })
        };
        slot.lock().replace(one_shot.clone());

        let sibling_hits = Arc::new(AtomicUsize::new(0));
        let sibling = counting_handler(&sibling_hits);

        manager.add_event_handler(&one_shot, "TestEvent").unwrap();
        manager.add_event_handler(&sibling, "TestEvent").unwrap();

        manager.raise_event(None, None, "TestEvent");
        assert_eq!(first_hits.load(Ordering::SeqCst), 1);
        assert_eq!(
            sibling_hits.load(Ordering::SeqCst),
            1,
            "sibling must still fire in the same pass"
        );

        manager.raise_event(None, None, "TestEvent");
        assert_eq!(
            first_hits.load(Ordering::SeqCst),
            1,
            "self-unsubscribed handler must not fire again"
        );
        assert_eq!(sibling_hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_raise_payload_mismatch_fails_with_invalid_handle_event() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestStringEvent").unwrap();
        let err = manager
            .raise_payload(Some(&"Test".to_string()), "TestStringEvent")
            .unwrap_err();

        assert!(
            matches!(err, EventError::InvalidHandleEvent { ref event } if event == "TestStringEvent")
        );
        assert_eq!(
            counter.load(Ordering::SeqCst),
            0,
            "mismatched handler must never be invoked"
        );
    }

    #[test]
    fn test_raise_payload_fires_earlier_actions_before_mismatch() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let action = {
            let fired = Arc::clone(&fired);
            EventHandler::action(move |_payload: Option<&String>| {
                fired.fetch_add(1, Ordering::SeqCst);
            })
        };
        let mismatched = counting_handler(&Arc::new(AtomicUsize::new(0)));

        manager.add_event_handler(&action, "TestEvent").unwrap();
        manager.add_event_handler(&mismatched, "TestEvent").unwrap();

        assert!(manager.raise_payload(None, "TestEvent").is_err());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sender_raise_skips_action_shaped_entries() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let action_hits = Arc::new(AtomicUsize::new(0));
        let action = {
            let hits = Arc::clone(&action_hits);
            EventHandler::action(move |_payload: Option<&String>| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        let subscriber_hits = Arc::new(AtomicUsize::new(0));
        let subscriber = counting_handler(&subscriber_hits);

        manager.add_event_handler(&action, "TestEvent").unwrap();
        manager.add_event_handler(&subscriber, "TestEvent").unwrap();
        manager.raise_event(None, None, "TestEvent");

        assert_eq!(action_hits.load(Ordering::SeqCst), 0);
        assert_eq!(subscriber_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_action_round_trip() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let seen = Arc::new(Mutex::new(None));
        let action = {
            let seen = Arc::clone(&seen);
            EventHandler::action(move |payload: Option<&String>| {
                *seen.lock() = payload.cloned();
            })
        };

        manager.add_event_handler(&action, "TestEvent").unwrap();
        manager
            .raise_payload(Some(&"hello".to_string()), "TestEvent")
            .unwrap();

        assert_eq!(seen.lock().as_deref(), Some("hello"));
    }

    #[test]
    fn test_bound_action_fires_and_dies_with_target() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let listener = Listener::new();
        let handler = EventHandler::bound_action(&listener, |l: &Listener, _p: Option<&String>| {
            l.hits.fetch_add(1, Ordering::SeqCst);
        });

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.raise_payload(None, "TestEvent").unwrap();
        assert_eq!(listener.hits(), 1);

        drop(listener);
        manager.raise_payload(None, "TestEvent").unwrap();
        assert_eq!(
            manager.handler_count("TestEvent"),
            0,
            "dead bound action must be pruned"
        );
    }

    #[test]
    fn test_untyped_raise_and_signal() {
        let manager: WeakEventManager = WeakEventManager::new();
        let sub_hits = Arc::new(AtomicUsize::new(0));
        let subscriber = {
            let hits = Arc::clone(&sub_hits);
            EventHandler::subscriber(move |_s, payload: Option<&NoPayload>| {
                assert_eq!(payload, Some(&NoPayload));
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        manager.add_event_handler(&subscriber, "Refreshed").unwrap();
        manager.raise(None, "Refreshed");
        assert_eq!(sub_hits.load(Ordering::SeqCst), 1);

        let act_hits = Arc::new(AtomicUsize::new(0));
        let action = {
            let hits = Arc::clone(&act_hits);
            EventHandler::action(move |_payload: Option<&NoPayload>| {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        manager.add_event_handler(&action, "Ticked").unwrap();
        manager.raise_signal("Ticked").unwrap();
        assert_eq!(act_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_untyped_signal_mismatch() {
        let manager: WeakEventManager = WeakEventManager::new();
        let handler = EventHandler::subscriber(|_s, _p: Option<&NoPayload>| {});
        manager.add_event_handler(&handler, "Refreshed").unwrap();

        assert!(matches!(
            manager.raise_signal("Refreshed"),
            Err(EventError::InvalidHandleEvent { .. })
        ));
    }

    #[test]
    fn test_introspection() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        assert!(manager.is_empty());

        let a = counting_handler(&Arc::new(AtomicUsize::new(0)));
        let b = counting_handler(&Arc::new(AtomicUsize::new(0)));
        manager.add_event_handler(&a, "Beta").unwrap();
        manager.add_event_handler(&b, "Alpha").unwrap();

        assert!(!manager.is_empty());
        assert_eq!(manager.handler_count("Beta"), 1);
        assert_eq!(manager.event_names(), vec!["Alpha", "Beta"]);

        manager.clear("Beta");
        assert_eq!(manager.handler_count("Beta"), 0);
        assert_eq!(manager.event_names(), vec!["Alpha"]);
    }

    #[test]
    fn test_emptied_channel_raise_is_noop() {
        let manager: WeakEventManager<String> = WeakEventManager::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let handler = counting_handler(&counter);

        manager.add_event_handler(&handler, "TestEvent").unwrap();
        manager.remove_event_handler(&handler, "TestEvent").unwrap();

        // key still exists with an empty list; dispatch treats it as absent
        manager.raise_event(None, None, "TestEvent");
        assert!(manager.raise_payload(None, "TestEvent").is_ok());
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
