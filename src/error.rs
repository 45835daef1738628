//! Error type for the board.
//!
//! Most board operations are total: unmatched ids and stray pointer events
//! are silently ignored. The errors here cover the few fallible entry points
//! (configuration and checked insertion).

use thiserror::Error;

use crate::core::CardId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("{0} is already on the board")]
    DuplicateCard(CardId),

    #[error("invalid board configuration: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, BoardError>;
