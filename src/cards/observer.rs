//! Change notification for the card collection.
//!
//! The rendering layer does not poll the collection; it subscribes. After
//! each committed mutation the collection calls every observer with a
//! description of the change and the new card sequence.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::Card;
use crate::core::{CardId, Coords};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// What changed in the collection.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CollectionChange {
    /// A card was appended at the end.
    Appended(CardId),
    /// A card's coordinates were replaced.
    CoordsUpdated { id: CardId, coords: Coords },
}

impl CollectionChange {
    /// The card the change concerns.
    #[must_use]
    pub fn card(&self) -> CardId {
        match self {
            CollectionChange::Appended(id) => *id,
            CollectionChange::CoordsUpdated { id, .. } => *id,
        }
    }
}

/// Receiver of collection changes.
///
/// Any `FnMut(&CollectionChange, &Vector<Card>)` closure is an observer.
pub trait CollectionObserver {
    /// Called after a mutation is committed. `cards` is the new sequence.
    fn on_change(&mut self, change: &CollectionChange, cards: &Vector<Card>);
}

impl<F> CollectionObserver for F
where
    F: FnMut(&CollectionChange, &Vector<Card>),
{
    fn on_change(&mut self, change: &CollectionChange, cards: &Vector<Card>) {
        self(change, cards)
    }
}
