//! Builder for registries with inspection hooks or pre-sized storage.

use std::sync::Arc;

use crate::inspectors::Inspect;
use crate::registry::manager::WeakEventManager;

/// Builder for constructing a [`WeakEventManager`] with optional features.
pub struct ManagerBuilder<T> {
    inspectors: Vec<Arc<dyn Inspect>>,
    channel_capacity: usize,
    _payload: std::marker::PhantomData<fn() -> T>,
}

impl<T> ManagerBuilder<T> {
    /// Creates a new builder with no hooks and default storage.
    pub fn new() -> Self {
        Self {
            inspectors: Vec::new(),
            channel_capacity: 0,
            _payload: std::marker::PhantomData,
        }
    }

    /// Adds an inspection hook; repeatable.
    ///
    /// Hooks observe registration, removal, pruning, and broadcasts. They are
    /// invoked synchronously, outside the registry lock, in the order added.
    pub fn with_inspector(mut self, inspector: Arc<dyn Inspect>) -> Self {
        self.inspectors.push(inspector);
        self
    }

    /// Pre-sizes the channel map for registries with a known channel set.
    pub fn with_channel_capacity(mut self, channels: usize) -> Self {
        self.channel_capacity = channels;
        self
    }

    /// Builds the registry.
    pub fn build(self) -> WeakEventManager<T> {
        WeakEventManager::with_parts(self.inspectors, self.channel_capacity)
    }
}

impl<T> Default for ManagerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
