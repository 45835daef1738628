//! Pointer-driven card dragging.
//!
//! Each card gets its own [`DragController`]. A drag is a pointer-down on
//! the card, any number of moves, then a pointer-up. Move and up events only
//! reach a card while its surface holds drag listeners, which the controller
//! attaches on pointer-down and detaches on pointer-up.
//!
//! Single-pointer only: multi-touch drags are unsupported.

mod controller;
mod event;
mod listeners;

pub use controller::{DragController, DragSession, DragState};
pub use event::{PointerEvent, PointerKind};
pub use listeners::{ListenerLease, ListenerRegistry, PointerSurface};
