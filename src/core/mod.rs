//! Core engine types: players, scores, state, RNG, configuration.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine is assembled from. Board layout and card types live in their own
//! modules; everything here is geometry-free bookkeeping.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{EngineConfig, CARD_COUNT, GRID_SIZE, WIN_RUN};
pub use player::{Player, Scores};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
