//! Scoped move/up listeners on card surfaces.
//!
//! A card surface only receives pointer-move and pointer-up while a drag is
//! in progress. Attaching those listeners hands out a [`ListenerLease`]; the
//! lease is the only way to detach them again, and it cannot be cloned, so
//! each attach is matched by exactly one detach.

use rustc_hash::FxHashSet;

use crate::core::CardId;

/// Proof that a card surface has drag listeners attached.
///
/// Not `Clone` or `Copy`: it must be handed back through
/// [`PointerSurface::detach_drag_listeners`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a lease leaves the drag listeners attached"]
pub struct ListenerLease {
    card: CardId,
}

impl ListenerLease {
    /// The card whose surface is listening.
    #[must_use]
    pub fn card(&self) -> CardId {
        self.card
    }
}

/// A place that can attach and detach drag listeners for card surfaces.
pub trait PointerSurface {
    /// Start delivering pointer-move and pointer-up for `card`.
    fn attach_drag_listeners(&mut self, card: CardId) -> ListenerLease;

    /// Stop delivering pointer-move and pointer-up for the lease's card.
    fn detach_drag_listeners(&mut self, lease: ListenerLease);
}

/// Tracks which card surfaces currently listen for move/up.
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    listening: FxHashSet<CardId>,
}

impl ListenerRegistry {
    /// Create a registry with no listeners attached.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a card surface currently receives move/up events.
    #[must_use]
    pub fn is_listening(&self, card: CardId) -> bool {
        self.listening.contains(&card)
    }

    /// Number of surfaces with listeners attached.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.listening.len()
    }
}

impl PointerSurface for ListenerRegistry {
    fn attach_drag_listeners(&mut self, card: CardId) -> ListenerLease {
        self.listening.insert(card);
        tracing::trace!(card = %card, "drag listeners attached");
        ListenerLease { card }
    }

    fn detach_drag_listeners(&mut self, lease: ListenerLease) {
        self.listening.remove(&lease.card);
        tracing::trace!(card = %lease.card, "drag listeners detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_detach() {
        let mut registry = ListenerRegistry::new();
        assert!(!registry.is_listening(CardId(1)));

        let lease = registry.attach_drag_listeners(CardId(1));
        assert_eq!(lease.card(), CardId(1));
        assert!(registry.is_listening(CardId(1)));
        assert!(!registry.is_listening(CardId(2)));
        assert_eq!(registry.active_count(), 1);

        registry.detach_drag_listeners(lease);
        assert!(!registry.is_listening(CardId(1)));
        assert_eq!(registry.active_count(), 0);
    }

    #[test]
    fn test_independent_surfaces() {
        let mut registry = ListenerRegistry::new();
        let a = registry.attach_drag_listeners(CardId(1));
        let b = registry.attach_drag_listeners(CardId(2));

        registry.detach_drag_listeners(a);
        assert!(registry.is_listening(CardId(2)));

        registry.detach_drag_listeners(b);
        assert_eq!(registry.active_count(), 0);
    }
}
