//! Card identification and id supply.
//!
//! Every card on the board has a unique `CardId`. Ids are only ever handed
//! out by an [`IdSupplier`], so callers never invent them.
//!
//! ## Usage
//!
//! ```
//! use card_board::core::{CardId, IdSupplier, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! let first = ids.next_id();
//! let second = ids.next_id();
//!
//! assert_eq!(first, CardId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Source of unique card ids.
///
/// The only contract is uniqueness: every id returned is distinct from all
/// ids previously returned by the same supplier. Monotonic order is allowed
/// but not required.
pub trait IdSupplier {
    /// Produce an id never returned before.
    fn next_id(&mut self) -> CardId;
}

/// Monotonic counter supplier.
///
/// Hands out `first, first + 1, ...`. Panics if the `u32` id space is
/// exhausted rather than wrapping around to a reused id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialIds {
    next: u32,
    exhausted: bool,
}

impl SequentialIds {
    /// Start at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a specific id.
    #[must_use]
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: first,
            exhausted: false,
        }
    }

    /// The id the next call will return, if any remain.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        (!self.exhausted).then_some(CardId(self.next))
    }
}

impl IdSupplier for SequentialIds {
    fn next_id(&mut self) -> CardId {
        assert!(!self.exhausted, "Card id space exhausted");

        let id = CardId(self.next);
        match self.next.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        id
    }
}
