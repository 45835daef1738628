//! Board composition and rendering.
//!
//! [`Board`] ties together the id supplier, the card collection, and one
//! drag controller per card, and exposes the add-card action and pointer
//! dispatch. [`Renderer`]s attached to a board are re-run after every card
//! change.

#[allow(clippy::module_inception)]
mod board;
mod render;

pub use board::Board;
pub use render::{BoardView, CardView, MarkupRenderer, Renderer};
