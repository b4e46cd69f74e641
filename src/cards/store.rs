//! Card store: the persisted card collection.
//!
//! The `CardStore` owns card identity and content. Every mutation writes
//! the whole collection to its storage slot before the in-memory copy is
//! replaced, so memory and storage never disagree after a failed write.

use rustc_hash::FxHashSet;
use thiserror::Error;

use super::defaults::default_cards;
use super::definition::{Card, CardDraft, CardId, Category, ValidationError};
use crate::storage::{KeyValueStore, StorageError};

/// Errors from card store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid card: {0}")]
    Validation(#[from] ValidationError),

    #[error("no card with id {0}")]
    NotFound(CardId),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Where the collection came from when the store was loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the storage slot.
    Stored,
    /// Slot was empty; seeded with the built-in collection.
    Defaults,
    /// Slot held malformed data; replaced with the built-in collection.
    Recovered,
    /// The backend could not be read. The built-in collection is used in
    /// memory and the slot is left as it was until the next mutation.
    Unavailable,
}

/// Why a stored collection could not be used.
#[derive(Debug, Error)]
enum ReadFailure {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("malformed collection: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate card id {0}")]
    DuplicateId(CardId),
}

/// Persisted, ordered card collection.
///
/// ## Example
///
/// ```
/// use party_deck::cards::{CardDraft, CardStore};
/// use party_deck::storage::MemoryStorage;
///
/// let mut store = CardStore::load(MemoryStorage::new(), "cards");
/// let card = store.add(CardDraft::new("Do ten push-ups", "Two sips")).unwrap();
///
/// assert_eq!(store.get(&card.id), Some(&card));
/// ```
#[derive(Debug)]
pub struct CardStore<S> {
    storage: S,
    key: String,
    cards: Vec<Card>,
    source: LoadSource,
}

impl<S: KeyValueStore> CardStore<S> {
    /// Load the collection stored under `key`.
    ///
    /// Never fails. An absent or malformed slot yields the built-in
    /// collection, which is then written back. If the backend itself cannot
    /// be read, the built-in collection is used without touching the slot.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (cards, source) = match read_collection(&storage, &key) {
            Ok(Some(cards)) => (cards, LoadSource::Stored),
            Ok(None) => (default_cards(), LoadSource::Defaults),
            Err(ReadFailure::Storage(e)) => {
                tracing::warn!(key = %key, error = %e, "card storage unreadable, using defaults for now");
                (default_cards(), LoadSource::Unavailable)
            }
            Err(reason) => {
                tracing::warn!(key = %key, %reason, "stored card collection malformed, using defaults");
                (default_cards(), LoadSource::Recovered)
            }
        };

        let mut store = Self {
            storage,
            key,
            cards,
            source,
        };

        if matches!(source, LoadSource::Defaults | LoadSource::Recovered) {
            let seed = store.cards.clone();
            if let Err(e) = store.write(&seed) {
                tracing::warn!(key = %store.key, error = %e, "failed to seed default cards");
            }
        }

        tracing::debug!(key = %store.key, cards = store.cards.len(), ?source, "card store loaded");
        store
    }

    /// All cards, in display order.
    #[must_use]
    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Distinct categories, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = FxHashSet::default();
        self.cards
            .iter()
            .filter(|c| seen.insert(&c.category))
            .map(|c| c.category.clone())
            .collect()
    }

    /// How the collection was obtained at load time.
    #[must_use]
    pub fn source(&self) -> LoadSource {
        self.source
    }

    /// The storage slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The storage backend.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the storage backend.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consume the store, returning its storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Add a card built from `draft` and persist.
    ///
    /// Content and penalty are required. A missing or blank title becomes
    /// `"Card #<n>"`, `n` being the new collection size.
    pub fn add(&mut self, draft: CardDraft) -> Result<Card, StoreError> {
        draft.validate()?;

        let title = match draft.trimmed_title() {
            Some(title) => title.to_string(),
            None => format!("Card #{}", self.cards.len() + 1),
        };
        let card = Card::new(
            self.fresh_id(),
            title,
            draft.content.trim(),
            draft.penalty.trim(),
            draft.category,
        );

        let mut next = self.cards.clone();
        next.push(card.clone());
        self.commit(next)?;

        tracing::debug!(id = %card.id, category = %card.category, "card added");
        Ok(card)
    }

    /// Replace the card with the same id, keeping its position, and persist.
    ///
    /// A blank title keeps the existing one.
    pub fn update(&mut self, card: Card) -> Result<(), StoreError> {
        card.validate()?;

        let pos = self
            .cards
            .iter()
            .position(|c| c.id == card.id)
            .ok_or_else(|| StoreError::NotFound(card.id.clone()))?;

        let title = match card.title.trim() {
            "" => self.cards[pos].title.clone(),
            t => t.to_string(),
        };
        let updated = Card::new(
            card.id,
            title,
            card.content.trim(),
            card.penalty.trim(),
            card.category,
        );

        let mut next = self.cards.clone();
        next[pos] = updated;
        self.commit(next)?;

        tracing::debug!(id = %self.cards[pos].id, "card updated");
        Ok(())
    }

    /// Remove the card with `id` and persist.
    ///
    /// Returns whether a card was removed. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &CardId) -> Result<bool, StoreError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let next: Vec<Card> = self.cards.iter().filter(|c| &c.id != id).cloned().collect();
        self.commit(next)?;

        tracing::debug!(id = %id, "card deleted");
        Ok(true)
    }

    /// Replace the whole collection with the built-in cards and persist.
    pub fn restore_defaults(&mut self) -> Result<(), StoreError> {
        self.commit(default_cards())?;
        tracing::info!(cards = self.cards.len(), "default cards restored");
        Ok(())
    }

    fn fresh_id(&self) -> CardId {
        loop {
            let id = CardId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Persist `next`, then make it the live collection.
    fn commit(&mut self, next: Vec<Card>) -> Result<(), StoreError> {
        self.write(&next)?;
        self.cards = next;
        Ok(())
    }

    fn write(&mut self, cards: &[Card]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(cards)?;
        self.storage.set(&self.key, &payload)?;
        tracing::debug!(key = %self.key, cards = cards.len(), "card collection persisted");
        Ok(())
    }
}

/// Read and parse the collection. `Ok(None)` means the slot is empty.
fn read_collection<S: KeyValueStore>(
    storage: &S,
    key: &str,
) -> Result<Option<Vec<Card>>, ReadFailure> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    let cards: Vec<Card> = serde_json::from_str(&raw)?;

    let mut ids = FxHashSet::default();
    if let Some(dup) = cards.iter().find(|c| !ids.insert(&c.id)) {
        return Err(ReadFailure::DuplicateId(dup.id.clone()));
    }

    Ok(Some(cards))
}
