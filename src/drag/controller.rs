//! Per-card drag state machine.
//!
//! ## States
//!
//! - `Idle`: no drag in progress, move/up listeners detached
//! - `Dragging`: pointer held on the card; the session remembers the last
//!   pointer position and holds the listener lease
//!
//! ## Transitions
//!
//! | From     | Event | To       | Effect                                      |
//! |----------|-------|----------|---------------------------------------------|
//! | Idle     | down  | Dragging | record pointer, attach listeners            |
//! | Dragging | move  | Dragging | card += pointer delta, record pointer       |
//! | Dragging | up    | Idle     | detach listeners, forget pointer            |
//! | Idle     | move  | Idle     | nothing                                     |
//! | Idle     | up    | Idle     | nothing                                     |
//! | Dragging | down  | Dragging | re-anchor pointer, keep existing listeners  |
//!
//! The delta is applied to the card's coordinates as they are in the
//! collection at move time, not to a separately accumulated position.

use crate::cards::CardCollection;
use crate::core::{CardId, Coords};

use super::event::{PointerEvent, PointerKind};
use super::listeners::{ListenerLease, PointerSurface};

/// State of an in-progress drag.
#[derive(Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at the last processed event.
    pub last_pointer: Coords,
    lease: ListenerLease,
}

/// Drag state of one card.
#[derive(Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Drag state machine bound to a single card.
///
/// ## Usage
///
/// ```
/// use card_board::cards::{Card, CardCollection};
/// use card_board::core::{CardId, Coords};
/// use card_board::drag::{DragController, ListenerRegistry};
///
/// let mut cards = CardCollection::new();
/// cards.append(Card::new(CardId(0), "new card", Coords::new(100.0, 100.0)));
///
/// let mut listeners = ListenerRegistry::new();
/// let mut drag = DragController::new(CardId(0));
///
/// drag.pointer_down(Coords::new(50.0, 50.0), &mut listeners);
/// drag.pointer_move(Coords::new(70.0, 65.0), &mut cards);
/// drag.pointer_up(&mut listeners);
///
/// assert_eq!(cards.coords_of(CardId(0)), Some(Coords::new(120.0, 115.0)));
/// assert!(!listeners.is_listening(CardId(0)));
/// ```
#[derive(Debug)]
pub struct DragController {
    card: CardId,
    state: DragState,
}

impl DragController {
    /// Create an idle controller for `card`.
    #[must_use]
    pub fn new(card: CardId) -> Self {
        Self {
            card,
            state: DragState::Idle,
        }
    }

    /// The card this controller moves.
    #[must_use]
    pub fn card(&self) -> CardId {
        self.card
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// True while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Last pointer position of the active drag, if any.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Coords> {
        match &self.state {
            DragState::Dragging(session) => Some(session.last_pointer),
            DragState::Idle => None,
        }
    }

    /// Route an event to the matching transition.
    ///
    /// Events targeting another card are ignored.
    pub fn handle<S>(&mut self, event: &PointerEvent, surface: &mut S, cards: &mut CardCollection)
    where
        S: PointerSurface + ?Sized,
    {
        if event.target != self.card {
            return;
        }

        match event.kind {
            PointerKind::Down => self.pointer_down(event.position, surface),
            PointerKind::Move => self.pointer_move(event.position, cards),
            PointerKind::Up => self.pointer_up(surface),
        }
    }

    /// Pointer pressed on the card: start (or re-anchor) a drag.
    pub fn pointer_down<S>(&mut self, position: Coords, surface: &mut S)
    where
        S: PointerSurface + ?Sized,
    {
        if let DragState::Dragging(session) = &mut self.state {
            tracing::debug!(card = %self.card, %position, "drag re-anchored");
            session.last_pointer = position;
            return;
        }

        let lease = surface.attach_drag_listeners(self.card);
        tracing::debug!(card = %self.card, %position, "drag started");
        self.state = DragState::Dragging(DragSession {
            last_pointer: position,
            lease,
        });
    }

    /// Pointer moved: shift the card by the pointer delta.
    ///
    /// No-op when idle or when the card is not in `cards`.
    pub fn pointer_move(&mut self, position: Coords, cards: &mut CardCollection) {
        let DragState::Dragging(session) = &mut self.state else {
            return;
        };

        let delta = position - session.last_pointer;
        session.last_pointer = position;

        let Some(current) = cards.coords_of(self.card) else {
            return;
        };

        tracing::trace!(card = %self.card, dx = delta.x, dy = delta.y, "drag move");
        cards.update_coords(self.card, current + delta);
    }

    /// Pointer released: end the drag and detach listeners.
    pub fn pointer_up<S>(&mut self, surface: &mut S)
    where
        S: PointerSurface + ?Sized,
    {
        if let DragState::Dragging(session) = std::mem::take(&mut self.state) {
            surface.detach_drag_listeners(session.lease);
            tracing::debug!(card = %self.card, "drag ended");
        }
    }
}
