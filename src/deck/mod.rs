//! Shuffling and the draw state machine.
//!
//! ## Key Types
//!
//! - `shuffled`: unbiased permutation of a copy
//! - `DrawEngine`: session state, draw, reshuffle on exhaustion
//! - `DrawOutcome`: drawn card plus reshuffle flag, or nothing
//! - `Progress`: drawn / total counts for display

pub mod engine;
pub mod shuffle;

pub use engine::{DrawEngine, DrawOutcome, EngineError, Progress, Session};
pub use shuffle::shuffled;
