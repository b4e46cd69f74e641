//! Game table: the orchestration layer a UI talks to.
//!
//! A `Table` joins the card store, the draw engine and a narrator:
//! - category selection and explicit reshuffle
//! - draws, returned as soon as the engine has committed them
//! - narration of a drawn card, requested separately by the caller
//! - deck management passed through to the store
//! - the voice toggle
//!
//! Timing (suspense and flip delays) stays in the presentation layer.

use crate::cards::{Card, CardDraft, CardId, CardStore, Category, StoreError};
use crate::core::{DeckRng, TableConfig};
use crate::deck::{DrawEngine, DrawOutcome, EngineError, Progress};
use crate::narration::{narrate_card, Narration, Narrator, SilentNarrator};
use crate::storage::KeyValueStore;

/// A configured game table.
pub struct Table<S, N = SilentNarrator> {
    config: TableConfig,
    store: CardStore<S>,
    engine: DrawEngine,
    narrator: N,
}

impl<S: KeyValueStore> Table<S, SilentNarrator> {
    /// Create a table without narration.
    pub fn silent(config: TableConfig, storage: S) -> Self {
        Self::new(config, storage, SilentNarrator)
    }
}

impl<S: KeyValueStore, N: Narrator> Table<S, N> {
    /// Load the card collection from `storage` and set up the table.
    pub fn new(config: TableConfig, storage: S, narrator: N) -> Self {
        let store = CardStore::load(storage, config.storage_key.clone());
        let rng = DeckRng::from_seed_or_entropy(config.seed);
        tracing::debug!(seed = rng.seed(), cards = store.len(), "table ready");

        Self {
            config,
            store,
            engine: DrawEngine::new(rng),
            narrator,
        }
    }

    /// The table configuration.
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The card store.
    #[must_use]
    pub fn store(&self) -> &CardStore<S> {
        &self.store
    }

    /// The draw engine.
    #[must_use]
    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    /// Categories available for selection.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories()
    }

    /// Start a session for `category`.
    pub fn select_category(&mut self, category: Category) {
        self.engine.start_session(category, self.store.list());
    }

    /// Reshuffle the current category from the full collection.
    pub fn reshuffle(&mut self) -> Result<(), EngineError> {
        let category = self
            .engine
            .selected_category()
            .cloned()
            .ok_or(EngineError::NoActiveSession)?;
        self.engine.start_session(category, self.store.list());
        Ok(())
    }

    /// Draw the next card of the current session.
    ///
    /// The narrator is never consulted here. Once the card is on screen the
    /// caller hands it to [`Table::narrate`], typically off the UI thread.
    pub fn draw(&mut self) -> Result<DrawOutcome, EngineError> {
        self.engine.draw(self.store.list())
    }

    /// Speak `card` if voice is on. Failures come back as silence.
    #[must_use]
    pub fn narrate(&self, card: &Card) -> Narration {
        if !self.config.voice_enabled {
            return Narration::Silent;
        }
        narrate_card(&self.narrator, card)
    }

    /// Return to category selection.
    pub fn leave(&mut self) {
        self.engine.end_session();
    }

    /// The most recently drawn card.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.engine.current_card()
    }

    /// Drawn / total cards in the current session.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.engine.progress()
    }

    /// Whether narration is requested after draws.
    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.config.voice_enabled
    }

    /// Turn narration on or off.
    pub fn set_voice_enabled(&mut self, enabled: bool) {
        self.config.voice_enabled = enabled;
    }

    /// Add a card to the collection.
    pub fn add_card(&mut self, draft: CardDraft) -> Result<Card, StoreError> {
        self.store.add(draft)
    }

    /// Edit a card in place.
    pub fn update_card(&mut self, card: Card) -> Result<(), StoreError> {
        self.store.update(card)
    }

    /// Delete a card. Returns whether it existed.
    pub fn delete_card(&mut self, id: &CardId) -> Result<bool, StoreError> {
        self.store.delete(id)
    }

    /// Replace the collection with the built-in cards.
    pub fn restore_defaults(&mut self) -> Result<(), StoreError> {
        self.store.restore_defaults()
    }

    /// Tear down the table, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.store.into_storage()
    }
}
