//! Deck/draw engine.
//!
//! The engine is a two-state machine:
//!
//! - **No session**: nothing selected, every pile empty
//! - **Session active**: a category's cards split between a shuffled draw
//!   pile and a discard pile
//!
//! `start_session` enters (or restarts) the active state, `end_session`
//! leaves it. `draw` moves the front of the draw pile to the end of the
//! discard pile. When the draw pile is exhausted the next `draw` rebuilds
//! it from the card snapshot passed in at that call, so cards added or
//! removed mid-session are picked up at the reshuffle boundary.
//!
//! The engine never touches the card store and does no I/O.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::shuffle::shuffled;
use crate::cards::{Card, Category};
use crate::core::DeckRng;

/// Errors from engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no session in progress")]
    NoActiveSession,
}

/// Result of a draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// A card was drawn. `reshuffled` is set when the draw pile had run
    /// out and was rebuilt first.
    Drawn { card: Card, reshuffled: bool },
    /// The category has no cards at all. State is unchanged.
    Nothing,
}

impl DrawOutcome {
    /// The drawn card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            DrawOutcome::Drawn { card, .. } => Some(card),
            DrawOutcome::Nothing => None,
        }
    }

    /// Whether this draw rebuilt the draw pile.
    #[must_use]
    pub fn reshuffled(&self) -> bool {
        matches!(self, DrawOutcome::Drawn { reshuffled: true, .. })
    }
}

/// Draw progress for display: `drawn` of `total` cards seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub drawn: usize,
    pub total: usize,
}

/// State of an active session.
///
/// Piles use `im` vectors: popping the front is cheap and cloning a
/// session for display is O(1).
#[derive(Clone, Debug)]
pub struct Session {
    category: Category,
    draw_pile: Vector<Card>,
    discard_pile: Vector<Card>,
    current: Option<Card>,
}

impl Session {
    /// The selected category.
    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Cards awaiting draw; the front is drawn next.
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw_pile
    }

    /// Cards already drawn, in draw order.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    /// The most recently drawn card.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.current.as_ref()
    }

    /// Cards drawn so far out of the cards in play.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            drawn: self.discard_pile.len(),
            total: self.draw_pile.len() + self.discard_pile.len(),
        }
    }
}

/// Draw/reshuffle state machine over a category's cards.
///
/// ## Usage
///
/// ```
/// use party_deck::cards::{default_cards, Category};
/// use party_deck::core::DeckRng;
/// use party_deck::deck::DrawEngine;
///
/// let cards = default_cards();
/// let mut engine = DrawEngine::new(DeckRng::new(42));
///
/// engine.start_session(Category::universal(), &cards);
/// let outcome = engine.draw(&cards).unwrap();
///
/// assert!(outcome.card().is_some());
/// assert_eq!(engine.progress().drawn, 1);
/// ```
#[derive(Clone, Debug)]
pub struct DrawEngine {
    rng: DeckRng,
    session: Option<Session>,
}

impl DrawEngine {
    /// Create an engine with no session, shuffling with `rng`.
    #[must_use]
    pub fn new(rng: DeckRng) -> Self {
        Self { rng, session: None }
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Check if a session is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The selected category, or `None` when no session is in progress.
    #[must_use]
    pub fn selected_category(&self) -> Option<&Category> {
        self.session.as_ref().map(Session::category)
    }

    /// The most recently drawn card.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.session.as_ref().and_then(Session::current_card)
    }

    /// The shuffle source.
    #[must_use]
    pub fn rng(&self) -> &DeckRng {
        &self.rng
    }

    /// Start a session over the cards of `category`.
    ///
    /// Replaces any session in progress, which is also how a manual
    /// reshuffle is done.
    pub fn start_session(&mut self, category: Category, all_cards: &[Card]) {
        let draw_pile = self.shuffled_pool(&category, all_cards);
        tracing::debug!(category = %category, cards = draw_pile.len(), "session started");

        self.session = Some(Session {
            category,
            draw_pile,
            discard_pile: Vector::new(),
            current: None,
        });
    }

    /// Draw the next card.
    ///
    /// `all_cards` is the current collection; it is only consulted when
    /// the draw pile is empty and must be rebuilt.
    pub fn draw(&mut self, all_cards: &[Card]) -> Result<DrawOutcome, EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NoActiveSession)?;

        let mut reshuffled = false;
        if session.draw_pile.is_empty() {
            let pool = Self::pool(&session.category, all_cards);
            if pool.is_empty() {
                tracing::debug!(category = %session.category, "nothing to draw");
                return Ok(DrawOutcome::Nothing);
            }

            session.draw_pile = shuffled(&pool, &mut self.rng).into();
            session.discard_pile.clear();
            reshuffled = true;
            tracing::info!(
                category = %session.category,
                cards = session.draw_pile.len(),
                "draw pile exhausted, reshuffled"
            );
        }

        let Some(card) = session.draw_pile.pop_front() else {
            return Ok(DrawOutcome::Nothing);
        };
        session.discard_pile.push_back(card.clone());
        session.current = Some(card.clone());

        tracing::debug!(
            id = %card.id,
            drawn = session.discard_pile.len(),
            remaining = session.draw_pile.len(),
            "card drawn"
        );
        Ok(DrawOutcome::Drawn { card, reshuffled })
    }

    /// End the session in progress, if any.
    pub fn end_session(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(category = %session.category, "session ended");
        }
    }

    /// Cards drawn out of cards in play. Zero when no session is active.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.session
            .as_ref()
            .map(Session::progress)
            .unwrap_or_default()
    }

    fn pool(category: &Category, all_cards: &[Card]) -> Vec<Card> {
        all_cards
            .iter()
            .filter(|c| c.is_in(category))
            .cloned()
            .collect()
    }

    fn shuffled_pool(&mut self, category: &Category, all_cards: &[Card]) -> Vector<Card> {
        shuffled(&Self::pool(category, all_cards), &mut self.rng).into()
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new(DeckRng::from_entropy())
    }
}
