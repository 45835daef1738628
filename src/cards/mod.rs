//! Cards and the card collection.
//!
//! - `Card`: id, text, and position of one card
//! - `CardCollection`: ordered, observable, replace-on-write card list
//! - `CollectionObserver`: change notification consumed by renderers

mod card;
mod collection;
mod observer;

pub use card::Card;
pub use collection::CardCollection;
pub use observer::{CollectionChange, CollectionObserver, SubscriptionId};
