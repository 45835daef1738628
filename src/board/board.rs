//! The board: composition root for cards, ids, drags, and rendering.

use rustc_hash::FxHashMap;

use super::render::{BoardView, RenderOnChange, Renderer};
use crate::cards::{Card, CardCollection, CollectionObserver, SubscriptionId};
use crate::core::{BoardConfig, CardId, IdSupplier, SequentialIds};
use crate::drag::{DragController, ListenerRegistry, PointerEvent, PointerKind};
use crate::error::Result;

/// A canvas of draggable cards.
///
/// Owns the card collection, one drag controller per card, and the listener
/// registry standing in for the card surfaces.
///
/// ## Usage
///
/// ```
/// use card_board::board::Board;
/// use card_board::core::Coords;
/// use card_board::drag::PointerEvent;
///
/// let mut board = Board::new();
/// let id = board.add_card();
///
/// board.dispatch(PointerEvent::down(id, 50.0, 50.0));
/// board.dispatch(PointerEvent::moved(id, 70.0, 65.0));
/// board.dispatch(PointerEvent::up(id, 70.0, 65.0));
///
/// assert_eq!(board.cards().coords_of(id), Some(Coords::new(120.0, 115.0)));
/// ```
#[derive(Debug)]
pub struct Board<I = SequentialIds> {
    config: BoardConfig,
    cards: CardCollection,
    ids: I,
    controllers: FxHashMap<CardId, DragController>,
    listeners: ListenerRegistry,
}

impl Board<SequentialIds> {
    /// Create a board with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = BoardConfig::default();
        let ids = SequentialIds::starting_at(config.first_id);
        Self::assemble(config, ids)
    }

    /// Create a board from a configuration.
    pub fn with_config(config: BoardConfig) -> Result<Self> {
        let ids = SequentialIds::starting_at(config.first_id);
        Self::with_supplier(config, ids)
    }
}

impl Default for Board<SequentialIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSupplier> Board<I> {
    /// Create a board with a custom id supplier.
    ///
    /// `config.first_id` is ignored; the supplier decides ids.
    pub fn with_supplier(config: BoardConfig, ids: I) -> Result<Self> {
        config.validate()?;
        Ok(Self::assemble(config, ids))
    }

    fn assemble(config: BoardConfig, ids: I) -> Self {
        Self {
            config,
            cards: CardCollection::new(),
            ids,
            controllers: FxHashMap::default(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Add a new card with the configured text and position.
    ///
    /// Panics if the id supplier hands out an id already on the board.
    pub fn add_card(&mut self) -> CardId {
        let id = self.ids.next_id();
        let card = Card::new(id, self.config.card_text.as_str(), self.config.initial_coords);

        self.controllers.insert(id, DragController::new(id));
        self.cards.append(card);

        tracing::debug!(card = %id, "card added to board");
        id
    }

    /// Deliver a pointer event to its target card.
    ///
    /// Pointer-down always reaches the card. Move and up only reach it while
    /// its drag listeners are attached. Events for unknown cards are dropped.
    pub fn dispatch(&mut self, event: PointerEvent) {
        let Some(controller) = self.controllers.get_mut(&event.target) else {
            tracing::trace!(card = %event.target, "pointer event for unknown card dropped");
            return;
        };

        if event.kind != PointerKind::Down && !self.listeners.is_listening(event.target) {
            return;
        }

        controller.handle(&event, &mut self.listeners, &mut self.cards);
    }

    /// Deliver events in order.
    pub fn dispatch_all(&mut self, events: impl IntoIterator<Item = PointerEvent>) {
        for event in events {
            self.dispatch(event);
        }
    }

    /// Current render description.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::from_cards(self.config.add_card_label.as_str(), self.cards.iter())
    }

    /// Render now and after every later change to the cards.
    pub fn attach_renderer<R: Renderer + 'static>(&mut self, mut renderer: R) -> SubscriptionId {
        renderer.render(&self.view());
        let observer = RenderOnChange::new(self.config.add_card_label.as_str(), renderer);
        self.cards.subscribe(observer)
    }

    /// Register a collection observer.
    pub fn subscribe(&mut self, observer: impl CollectionObserver + 'static) -> SubscriptionId {
        self.cards.subscribe(observer)
    }

    /// Remove an observer or renderer. Returns false if not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.cards.unsubscribe(id)
    }

    /// The card collection.
    #[must_use]
    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }

    /// The drag controller of a card.
    #[must_use]
    pub fn controller(&self, id: CardId) -> Option<&DragController> {
        self.controllers.get(&id)
    }

    /// True while the card is being dragged.
    #[must_use]
    pub fn is_dragging(&self, id: CardId) -> bool {
        self.controller(id).is_some_and(DragController::is_dragging)
    }

    /// Which card surfaces currently listen for move/up.
    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }
}
