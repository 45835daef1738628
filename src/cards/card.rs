//! A single card on the board.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Coords};

/// A positioned, labeled card.
///
/// Identity is by `id`. The text is fixed at creation; `coords` is the only
/// field that changes, and only through
/// [`CardCollection::update_coords`](super::CardCollection::update_coords).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub coords: Coords,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, text: impl Into<String>, coords: Coords) -> Self {
        Self {
            id,
            text: text.into(),
            coords,
        }
    }

    /// Copy of this card moved to `coords`, text and id unchanged.
    #[must_use]
    pub fn moved_to(&self, coords: Coords) -> Self {
        Self {
            id: self.id,
            text: self.text.clone(),
            coords,
        }
    }
}
