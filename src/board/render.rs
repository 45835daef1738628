//! Declarative board rendering.
//!
//! The board is described as a [`BoardView`] (the add-card control plus one
//! [`CardView`] per card) and handed to a [`Renderer`]. Renderers are driven
//! by collection changes, so they never need to be re-invoked by hand.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CollectionChange, CollectionObserver};
use crate::core::{CardId, Coords};

/// Render description of one card surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    pub text: String,
    /// 2D translation of the surface from the board origin.
    pub translation: Coords,
}

impl CardView {
    /// CSS transform positioning the surface.
    ///
    /// ```
    /// use card_board::board::CardView;
    /// use card_board::core::{CardId, Coords};
    ///
    /// let view = CardView {
    ///     id: CardId(0),
    ///     text: "new card".into(),
    ///     translation: Coords::new(120.0, 115.5),
    /// };
    /// assert_eq!(view.transform(), "translate(120px, 115.5px)");
    /// ```
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.translation.x, self.translation.y)
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            text: card.text.clone(),
            translation: card.coords,
        }
    }
}

/// Render description of the whole board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    /// Label of the add-card control.
    pub add_card_label: String,
    /// Card surfaces in display order.
    pub cards: Vec<CardView>,
}

impl BoardView {
    /// Build a view from a card sequence.
    #[must_use]
    pub fn from_cards<'a>(
        add_card_label: impl Into<String>,
        cards: impl IntoIterator<Item = &'a Card>,
    ) -> Self {
        Self {
            add_card_label: add_card_label.into(),
            cards: cards.into_iter().map(CardView::from).collect(),
        }
    }
}

/// Rendering substrate.
pub trait Renderer {
    /// Draw the board as described.
    fn render(&mut self, view: &BoardView);
}

/// Shared renderers stay inspectable after being attached to a board.
impl<R: Renderer + ?Sized> Renderer for Rc<RefCell<R>> {
    fn render(&mut self, view: &BoardView) {
        self.borrow_mut().render(view);
    }
}

/// Observer that re-renders the board after every collection change.
pub(crate) struct RenderOnChange<R> {
    add_card_label: String,
    renderer: R,
}

impl<R: Renderer> RenderOnChange<R> {
    pub(crate) fn new(add_card_label: impl Into<String>, renderer: R) -> Self {
        Self {
            add_card_label: add_card_label.into(),
            renderer,
        }
    }
}

impl<R: Renderer> CollectionObserver for RenderOnChange<R> {
    fn on_change(&mut self, _change: &CollectionChange, cards: &Vector<Card>) {
        let view = BoardView::from_cards(self.add_card_label.as_str(), cards);
        self.renderer.render(&view);
    }
}

/// Renders the board as HTML-like markup.
///
/// Keeps the most recent output and a render count.
#[derive(Clone, Debug, Default)]
pub struct MarkupRenderer {
    output: String,
    renders: usize,
}

impl MarkupRenderer {
    /// Create a renderer with no output yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup from the most recent render.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of renders performed.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl Renderer for MarkupRenderer {
    fn render(&mut self, view: &BoardView) {
        let mut out = String::new();
        out.push_str("<div class=\"board\">\n");
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  <button>{}</button>", escape(&view.add_card_label));
        for card in &view.cards {
            let _ = writeln!(
                out,
                "  <div class=\"card\" data-id=\"{}\" style=\"transform: {}\">{}</div>",
                card.id.raw(),
                card.transform(),
                escape(&card.text)
            );
        }
        out.push_str("</div>\n");

        self.output = out;
        self.renders += 1;
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
