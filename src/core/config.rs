//! Board configuration.
//!
//! The board never hardcodes what a new card looks like or where it lands.
//! `BoardConfig` carries those defaults; `BoardConfig::default()` matches the
//! classic demo ("new card" at (100, 100) behind an "Add Card" button).

use serde::{Deserialize, Serialize};

use super::Coords;
use crate::error::{BoardError, Result};

/// Text given to every newly added card.
pub const DEFAULT_CARD_TEXT: &str = "new card";

/// Label of the add-card control.
pub const DEFAULT_ADD_LABEL: &str = "Add Card";

/// Where new cards are placed.
pub const DEFAULT_INITIAL_COORDS: Coords = Coords::new(100.0, 100.0);

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Text of newly added cards.
    pub card_text: String,

    /// Position of newly added cards.
    pub initial_coords: Coords,

    /// Label rendered on the add-card control.
    pub add_card_label: String,

    /// First id handed out by the board's id supplier.
    pub first_id: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            card_text: DEFAULT_CARD_TEXT.to_string(),
            initial_coords: DEFAULT_INITIAL_COORDS,
            add_card_label: DEFAULT_ADD_LABEL.to_string(),
            first_id: 0,
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text of new cards.
    #[must_use]
    pub fn with_card_text(mut self, text: impl Into<String>) -> Self {
        self.card_text = text.into();
        self
    }

    /// Set where new cards are placed.
    #[must_use]
    pub fn with_initial_coords(mut self, coords: Coords) -> Self {
        self.initial_coords = coords;
        self
    }

    /// Set the add-card control label.
    #[must_use]
    pub fn with_add_card_label(mut self, label: impl Into<String>) -> Self {
        self.add_card_label = label.into();
        self
    }

    /// Set the first card id.
    #[must_use]
    pub fn with_first_id(mut self, first_id: u32) -> Self {
        self.first_id = first_id;
        self
    }

    /// Check the configuration is usable.
    ///
    /// Initial coordinates must be finite and the control label non-empty.
    /// Card text may be empty.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_coords.is_finite() {
            return Err(BoardError::InvalidConfig {
                message: format!("initial coordinates {} are not finite", self.initial_coords),
            });
        }
        if self.add_card_label.trim().is_empty() {
            return Err(BoardError::InvalidConfig {
                message: "add-card label is empty".to_string(),
            });
        }
        Ok(())
    }
}
