//! Seedable random source for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Injectable**: The draw engine owns one, tests pass a fixed seed
//! - **Entropy-seeded by default**: Live tables get a fresh seed per process
//!
//! ```
//! use party_deck::core::DeckRng;
//!
//! let mut a = DeckRng::new(7);
//! let mut b = DeckRng::new(7);
//! assert_eq!(a.gen_range_inclusive(0..=51), b.gen_range_inclusive(0..=51));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG used by the shuffle primitive.
///
/// Uses ChaCha8 for speed while keeping uniform, high quality output.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The chosen seed is still recorded, so a session can be replayed
    /// from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: std::ops::RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl Default for DeckRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
