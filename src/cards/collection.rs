//! The ordered card collection.
//!
//! `CardCollection` is the board's only shared mutable state. It supports:
//! - Appending cards (insertion order is display order)
//! - Replacing one card's coordinates by id
//! - O(1) snapshots that never observe later mutations
//! - Observers notified after each committed mutation
//!
//! ## Replace-on-write
//!
//! Cards live in an `im::Vector`. A mutation builds the next vector from the
//! current one and swaps it in, so a snapshot taken earlier keeps its
//! contents. Untouched cards are structurally shared and stay value-equal.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::observer::{CollectionChange, CollectionObserver, SubscriptionId};
use super::Card;
use crate::core::{CardId, Coords};
use crate::error::{BoardError, Result};

type ObserverList = SmallVec<[(SubscriptionId, Box<dyn CollectionObserver>); 2]>;

/// Ordered, observable sequence of cards with unique ids.
///
/// ## Usage
///
/// ```
/// use card_board::cards::{Card, CardCollection};
/// use card_board::core::{CardId, Coords};
///
/// let mut cards = CardCollection::new();
/// cards.append(Card::new(CardId(0), "new card", Coords::new(100.0, 100.0)));
///
/// let before = cards.snapshot();
/// cards.update_coords(CardId(0), Coords::new(120.0, 115.0));
///
/// assert_eq!(cards.coords_of(CardId(0)), Some(Coords::new(120.0, 115.0)));
/// assert_eq!(before[0].coords, Coords::new(100.0, 100.0));
/// ```
#[derive(Default)]
pub struct CardCollection {
    /// Cards in insertion order.
    cards: Vector<Card>,

    /// Position of each card in `cards`. Cards are never removed, so
    /// positions are stable once assigned.
    index: FxHashMap<CardId, usize>,

    observers: ObserverList,
    next_subscription: u32,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card at the end.
    ///
    /// Panics if a card with the same id is already present. Ids come from
    /// an `IdSupplier`, so a duplicate is a caller bug; use
    /// [`try_append`](Self::try_append) to get an error instead.
    pub fn append(&mut self, card: Card) {
        if let Err(err) = self.try_append(card) {
            panic!("{}", err);
        }
    }

    /// Append a card at the end, rejecting duplicate ids.
    pub fn try_append(&mut self, card: Card) -> Result<()> {
        if self.index.contains_key(&card.id) {
            return Err(BoardError::DuplicateCard(card.id));
        }

        let id = card.id;
        let mut next = self.cards.clone();
        next.push_back(card);
        self.index.insert(id, next.len() - 1);
        self.cards = next;

        tracing::debug!(card = %id, total = self.cards.len(), "card appended");
        self.notify(CollectionChange::Appended(id));
        Ok(())
    }

    /// Replace the coordinates of the card with `id`.
    ///
    /// Text, order, and every other card are untouched. If no card has this
    /// id the collection is unchanged and no observer is called.
    pub fn update_coords(&mut self, id: CardId, coords: Coords) {
        let Some(&position) = self.index.get(&id) else {
            tracing::trace!(card = %id, "coordinate update for unknown card ignored");
            return;
        };

        let mut next = self.cards.clone();
        let moved = next[position].moved_to(coords);
        next.set(position, moved);
        self.cards = next;

        tracing::trace!(card = %id, %coords, "card coordinates updated");
        self.notify(CollectionChange::CoordsUpdated { id, coords });
    }

    /// Current cards as an immutable snapshot (O(1)).
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.index.get(&id).and_then(|&position| self.cards.get(position))
    }

    /// Current coordinates of a card.
    #[must_use]
    pub fn coords_of(&self, id: CardId) -> Option<Coords> {
        self.get(id).map(|card| card.coords)
    }

    /// Check if the collection contains a card.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate cards in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Iterate card ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|card| card.id)
    }

    // === Observers ===

    /// Register an observer. It is called after every later mutation.
    pub fn subscribe(&mut self, observer: impl CollectionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));

        tracing::debug!(subscription = %id, "collection observer subscribed");
        id
    }

    /// Remove an observer. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    /// Number of registered observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: CollectionChange) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_change(&change, &self.cards);
        }
    }
}

impl std::fmt::Debug for CardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardCollection")
            .field("cards", &self.cards)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn card(id: u32) -> Card {
        Card::new(CardId(id), "new card", Coords::new(100.0, 100.0))
    }

    #[test]
    fn test_append_preserves_order() {
        let mut cards = CardCollection::new();
        cards.append(card(5));
        cards.append(card(2));
        cards.append(card(9));

        let ids: Vec<_> = cards.ids().collect();
        assert_eq!(ids, vec![CardId(5), CardId(2), CardId(9)]);
        assert_eq!(cards.len(), 3);
        assert!(!cards.is_empty());
    }

    #[test]
    fn test_update_coords_touches_one_card() {
        let mut cards = CardCollection::new();
        cards.append(card(0));
        cards.append(card(1));
        cards.append(card(2));
        let before = cards.snapshot();

        cards.update_coords(CardId(1), Coords::new(-3.0, 40.0));

        assert_eq!(cards.get(CardId(0)), before.get(0));
        assert_eq!(cards.get(CardId(2)), before.get(2));

        let moved = cards.get(CardId(1)).unwrap();
        assert_eq!(moved.coords, Coords::new(-3.0, 40.0));
        assert_eq!(moved.text, "new card");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut cards = CardCollection::new();
        cards.append(card(0));
        let before = cards.snapshot();

        cards.update_coords(CardId(99), Coords::new(1.0, 1.0));

        assert_eq!(cards.snapshot(), before);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut cards = CardCollection::new();
        cards.append(card(0));
        let snapshot = cards.snapshot();

        cards.update_coords(CardId(0), Coords::new(0.0, 0.0));
        cards.append(card(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].coords, Coords::new(100.0, 100.0));
    }

    #[test]
    fn test_try_append_rejects_duplicate() {
        let mut cards = CardCollection::new();
        cards.append(card(0));

        let result = cards.try_append(card(0));
        assert_eq!(result, Err(BoardError::DuplicateCard(CardId(0))));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    #[should_panic(expected = "already on the board")]
    fn test_duplicate_append_panics() {
        let mut cards = CardCollection::new();
        cards.append(card(0));
        cards.append(card(0));
    }

    #[test]
    fn test_observers_notified_after_commit() {
        let mut cards = CardCollection::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        cards.subscribe(move |change: &CollectionChange, current: &Vector<Card>| {
            sink.borrow_mut().push((*change, current.len()));
        });

        cards.append(card(0));
        cards.update_coords(CardId(0), Coords::new(1.0, 2.0));
        cards.update_coords(CardId(42), Coords::new(1.0, 2.0));

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                (CollectionChange::Appended(CardId(0)), 1),
                (
                    CollectionChange::CoordsUpdated {
                        id: CardId(0),
                        coords: Coords::new(1.0, 2.0)
                    },
                    1
                ),
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut cards = CardCollection::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let sub = cards.subscribe(move |_: &CollectionChange, _: &Vector<Card>| {
            *counter.borrow_mut() += 1;
        });
        cards.append(card(0));

        assert!(cards.unsubscribe(sub));
        assert!(!cards.unsubscribe(sub));
        assert_eq!(cards.observer_count(), 0);

        cards.append(card(1));
        assert_eq!(*calls.borrow(), 1);
    }
}
