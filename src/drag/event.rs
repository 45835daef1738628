//! Pointer input events.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Coords};

/// Kind of pointer activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event on a card's surface.
///
/// `position` is the absolute pointer position in board coordinates, the
/// same space card coordinates live in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// The card whose surface received the event.
    pub target: CardId,
    pub kind: PointerKind,
    pub position: Coords,
}

impl PointerEvent {
    /// Create a new event.
    #[must_use]
    pub const fn new(target: CardId, kind: PointerKind, position: Coords) -> Self {
        Self { target, kind, position }
    }

    /// Pointer pressed at `(x, y)`.
    #[must_use]
    pub const fn down(target: CardId, x: f64, y: f64) -> Self {
        Self::new(target, PointerKind::Down, Coords::new(x, y))
    }

    /// Pointer moved to `(x, y)`.
    #[must_use]
    pub const fn moved(target: CardId, x: f64, y: f64) -> Self {
        Self::new(target, PointerKind::Move, Coords::new(x, y))
    }

    /// Pointer released at `(x, y)`.
    #[must_use]
    pub const fn up(target: CardId, x: f64, y: f64) -> Self {
        Self::new(target, PointerKind::Up, Coords::new(x, y))
    }
}
