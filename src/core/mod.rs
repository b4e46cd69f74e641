//! Core building blocks: random source and table configuration.

pub mod config;
pub mod rng;

pub use config::{TableConfig, DEFAULT_STORAGE_KEY};
pub use rng::DeckRng;
