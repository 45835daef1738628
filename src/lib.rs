//! # card-board
//!
//! A board of draggable cards: users add cards and move them around with a
//! pointer.
//!
//! ## Design Principles
//!
//! 1. **Explicit state machines**: Each card's drag is a `DragController`
//!    with `Idle`/`Dragging` states. The last pointer position is a field of
//!    the session, not a captured variable.
//!
//! 2. **Scoped listeners**: Move/up listeners are a lease acquired on
//!    pointer-down and handed back on pointer-up.
//!
//! 3. **Observers over reactivity**: The card collection notifies observers
//!    after each mutation; renderers are just observers.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Cards live in an `im::Vector`, so every
//!   mutation is replace-on-write and snapshots are O(1).
//!
//! - **Single-threaded**: All work happens in response to discrete input
//!   events. Nothing blocks and nothing runs in the background.
//!
//! ## Modules
//!
//! - `core`: Coordinates, card ids, id supply, configuration
//! - `cards`: Cards and the observable card collection
//! - `drag`: Pointer events, listener leases, drag state machine
//! - `board`: Composition root and rendering
//! - `error`: Board error type

pub mod core;
pub mod cards;
pub mod drag;
pub mod board;
pub mod error;

// Re-export commonly used types
pub use crate::core::{BoardConfig, CardId, Coords, IdSupplier, SequentialIds};

pub use crate::cards::{
    Card, CardCollection, CollectionChange, CollectionObserver, SubscriptionId,
};

pub use crate::drag::{
    DragController, DragSession, DragState,
    ListenerLease, ListenerRegistry, PointerSurface,
    PointerEvent, PointerKind,
};

pub use crate::board::{Board, BoardView, CardView, MarkupRenderer, Renderer};

pub use crate::error::{BoardError, Result};
