//! # party-deck
//!
//! Deck, draw and card-collection engine for a party challenge card game.
//!
//! Players pick a category, draw cards one at a time from a shuffled deck
//! and read the challenge and its penalty. The deck reshuffles itself when
//! it runs out. The card collection is editable and persisted as a whole
//! on every change.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `DrawEngine` is synchronous and does no I/O or
//!    timing. Presentation delays and narration happen around it.
//!
//! 2. **Injectable edges**: persistence (`KeyValueStore`), narration
//!    (`Narrator`) and randomness (`DeckRng`) are all passed in, so every
//!    behaviour can be tested deterministically.
//!
//! 3. **Graceful degradation**: unreadable storage falls back to built-in
//!    cards, failed narration is silence, drawing from an empty category
//!    draws nothing.
//!
//! ## Modules
//!
//! - `core`: random source and table configuration
//! - `cards`: card records, defaults and the persisted store
//! - `storage`: key-value persistence port and backends
//! - `deck`: shuffle and the draw state machine
//! - `narration`: text-to-speech port
//! - `table`: orchestration used by a UI

pub mod cards;
pub mod core;
pub mod deck;
pub mod narration;
pub mod storage;
pub mod table;

// Re-export commonly used types
pub use crate::core::{DeckRng, TableConfig};

pub use crate::cards::{
    default_cards, Card, CardDraft, CardId, CardStore, Category, LoadSource, StoreError,
    ValidationError,
};

pub use crate::storage::{FileStorage, KeyValueStore, MemoryStorage, StorageError};

pub use crate::deck::{shuffled, DrawEngine, DrawOutcome, EngineError, Progress, Session};

pub use crate::narration::{
    Narration, NarrationError, NarrationRequest, Narrator, SilentNarrator,
};

pub use crate::table::Table;
