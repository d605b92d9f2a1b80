//! Board geometry and engine configuration.
//!
//! The board is fixed: a 4x4 grid of 16 cards over an 8-symbol alphabet.
//! What callers configure is the resolution timing: how long the board
//! stays locked after a pair's second card is flipped. The engine never
//! sleeps itself; the delays are advisory durations handed to the caller's
//! scheduler alongside the resolution ticket.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Side length of the square board.
pub const GRID_SIZE: usize = 4;

/// Total card slots on the board.
pub const CARD_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Consecutive same-owner cells required to win a line.
pub const WIN_RUN: usize = 3;

/// Resolution timing configuration.
///
/// The match delay is deliberately shorter than the mismatch delay: a
/// matching player gets quick confirmation, while a mismatch leaves both
/// cards face-up long enough for either player to memorize them before
/// they hide again.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use memory_toe::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert!(config.match_delay < config.mismatch_delay);
/// assert_eq!(config.match_delay, Duration::from_millis(600));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Lock duration before a matched pair is claimed.
    pub match_delay: Duration,

    /// Lock duration before a mismatched pair flips back down.
    pub mismatch_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_delay: Duration::from_millis(600),
            mismatch_delay: Duration::from_millis(1200),
        }
    }
}
