//! Table configuration.
//!
//! Hosts configure a `Table` at startup with a `TableConfig`: which
//! storage slot holds the card collection, whether narration is requested,
//! and an optional fixed shuffle seed.

use serde::{Deserialize, Serialize};

/// Storage slot used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "drinking_game_cards";

/// Configuration for a game table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Key of the durable slot holding the whole card collection.
    pub storage_key: String,

    /// Request narration after each draw.
    pub voice_enabled: bool,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            voice_enabled: true,
            seed: None,
        }
    }
}

impl TableConfig {
    /// Use a different storage slot.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Turn narration on or off.
    #[must_use]
    pub fn with_voice(mut self, enabled: bool) -> Self {
        self.voice_enabled = enabled;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
