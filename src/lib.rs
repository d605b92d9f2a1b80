//! # memory-toe
//!
//! A pair-matching territory game engine: memory pairs meet line formation
//! on a 4x4 grid. Two players take turns flipping cards; a matched pair is
//! claimed as the matcher's territory, and three or more consecutive owned
//! cells along any row, column, or diagonal win the round.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: The engine owns all game state and
//!    exposes only in-process operations. Rendering, input, and
//!    persistence are the caller's business.
//!
//! 2. **Scheduler-driven timing**: Flipping a pair's second card locks the
//!    board and returns a resolution ticket with an advisory delay. The
//!    caller's scheduler hands the token back to `resolve`; the engine
//!    never sleeps and a reset invalidates outstanding tokens, so a
//!    late-firing timer can never touch a superseded round.
//!
//! 3. **Silent rejection**: Illegal selections (locked board, matched
//!    card, finished round) are no-ops, not errors. Callers that want
//!    feedback compare state before and after.
//!
//! 4. **Deterministic sessions**: All randomness flows from one seeded
//!    ChaCha8 stream, so a session replays identically from its seed.
//!
//! ## Architecture
//!
//! - **O(1) snapshots**: The board lives in `im` persistent structures, so
//!   cloning a `GameState` is cheap and callers can keep pre-transition
//!   snapshots.
//!
//! ## Modules
//!
//! - `core`: players, scores, state, RNG, configuration
//! - `cards`: the symbol alphabet and card instances
//! - `board`: the dealt 4x4 grid
//! - `rules`: win evaluation over the ownership grid
//! - `engine`: the turn controller and round lifecycle

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, GameRng, GameRngState, GameState, Player, Scores, CARD_COUNT, GRID_SIZE, WIN_RUN,
};

pub use crate::board::Board;

pub use crate::cards::{Card, CardId, Symbol};

pub use crate::rules::{evaluate, RoundResult};

pub use crate::engine::{GameEngine, PendingResolution, ResolutionKind, ResolutionToken};
