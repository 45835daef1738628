//! Core board types: coordinates, card ids, id supply, configuration.
//!
//! These are the leaf building blocks; cards, drag handling, and the board
//! are built on top of them.

pub mod coords;
pub mod id;
pub mod config;

pub use coords::Coords;
pub use id::{CardId, IdSupplier, SequentialIds};
pub use config::BoardConfig;
