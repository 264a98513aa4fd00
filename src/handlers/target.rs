//! Weak identity of a handler's bound target.
//!
//! [`TargetRef`] is what makes the registry *weak*: a bound entry holds a
//! type-erased `Weak` to its instance and never keeps it alive. Resolution
//! happens at broadcast time; a target that fails to upgrade marks the entry
//! dead and it is pruned by the same pass.
//!
//! ## Rules
//! - Free-standing handlers carry no target and are never pruned for liveness.
//! - Identity (for removal) is pointer identity of the underlying allocation.
//! - A strong resolution is held across the handler call, so the target
//!   cannot be reclaimed mid-invocation.

use std::any::Any;
use std::sync::{Arc, Weak};

/// Weakly-held identity of a handler's bound instance.
#[derive(Clone)]
pub(crate) enum TargetRef {
    /// Free-standing handler: no bound instance.
    Free,
    /// Handler bound to a weakly-held instance.
    Bound(Weak<dyn Any + Send + Sync>),
}

/// Outcome of resolving a [`TargetRef`] at broadcast time.
pub(crate) enum Resolved {
    /// No target to resolve; the handler always fires.
    Free,
    /// Target is alive; the strong reference keeps it so for the call.
    Alive(Arc<dyn Any + Send + Sync>),
    /// Target was reclaimed; the entry must be skipped and pruned.
    Dead,
}

impl TargetRef {
    /// Erases and stores a typed weak target.
    pub(crate) fn bound<S>(target: Weak<S>) -> Self
    where
        S: Send + Sync + 'static,
    {
        let erased: Weak<dyn Any + Send + Sync> = target;
        TargetRef::Bound(erased)
    }

    /// True when the bound target can no longer be upgraded.
    ///
    /// Free-standing targets are never dead.
    pub(crate) fn is_dead(&self) -> bool {
        match self {
            TargetRef::Free => false,
            TargetRef::Bound(weak) => weak.strong_count() == 0,
        }
    }

    /// Attempts to resolve the target to a strong reference.
    pub(crate) fn resolve(&self) -> Resolved {
        match self {
            TargetRef::Free => Resolved::Free,
            TargetRef::Bound(weak) => match weak.upgrade() {
                Some(strong) => Resolved::Alive(strong),
                None => Resolved::Dead,
            },
        }
    }

    /// Pointer-identity comparison; two free targets always match.
    pub(crate) fn matches(&self, other: &TargetRef) -> bool {
        match (self, other) {
            (TargetRef::Free, TargetRef::Free) => true,
            (TargetRef::Bound(a), TargetRef::Bound(b)) => Weak::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;

    #[test]
    fn test_free_is_never_dead() {
        assert!(!TargetRef::Free.is_dead());
        assert!(matches!(TargetRef::Free.resolve(), Resolved::Free));
    }

    #[test]
    fn test_bound_tracks_liveness() {
        let strong = Arc::new(Probe);
        let target = TargetRef::bound(Arc::downgrade(&strong));
        assert!(!target.is_dead());
        assert!(matches!(target.resolve(), Resolved::Alive(_)));

        drop(strong);
        assert!(target.is_dead());
        assert!(matches!(target.resolve(), Resolved::Dead));
    }

    #[test]
    fn test_never_bound_weak_is_dead() {
        let target = TargetRef::bound(Weak::<Probe>::new());
        assert!(target.is_dead());
    }

    #[test]
    fn test_identity_matching() {
        let a = Arc::new(Probe);
        let b = Arc::new(Probe);
        let ta = TargetRef::bound(Arc::downgrade(&a));
        let tb = TargetRef::bound(Arc::downgrade(&b));

        assert!(ta.matches(&ta.clone()), "clone must keep identity");
        assert!(!ta.matches(&tb), "distinct targets must not match");
        assert!(!ta.matches(&TargetRef::Free));
        assert!(TargetRef::Free.matches(&TargetRef::Free));
    }

    #[test]
    fn test_identity_survives_target_drop() {
        let a = Arc::new(Probe);
        let ta = TargetRef::bound(Arc::downgrade(&a));
        let tb = ta.clone();
        drop(a);
        assert!(ta.matches(&tb), "identity must outlive the allocation's death");
    }
}
