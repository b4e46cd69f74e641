//! Card system: records, defaults and the persisted store.
//!
//! ## Key Types
//!
//! - `Card`: challenge text, penalty and category under a stable `CardId`
//! - `CardDraft`: user-supplied fields before an id is assigned
//! - `Category`: tag partitioning cards into independent decks
//! - `CardStore`: the ordered collection, persisted on every mutation

pub mod defaults;
pub mod definition;
pub mod store;

pub use defaults::default_cards;
pub use definition::{Card, CardDraft, CardId, Category, ValidationError};
pub use store::{CardStore, LoadSource, StoreError};
