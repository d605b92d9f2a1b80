//! Complete round state.
//!
//! `GameState` is the single source of truth for one round: the dealt
//! board, whose turn it is, the pending (unresolved) selections, the
//! terminal result, and the score counters.
//!
//! ## Invariants
//!
//! - `flipped_cards` holds 0, 1, or 2 ids; at 2 the engine is in the
//!   locked resolution phase and rejects further selections
//! - `winner` is `Some` only in a terminal state; once set, the board is
//!   read-only until the engine re-deals
//! - for every card, `owner.is_some()` exactly when `is_matched`
//!
//! External callers never mutate a `GameState`; all transitions go through
//! the engine. Snapshots are cheap: the board is an `im` structure, so
//! cloning the whole state is O(1) in the board size.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{Player, Scores};
use super::rng::GameRng;
use crate::board::Board;
use crate::cards::CardId;
use crate::rules::RoundResult;

/// The state of one round in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The dealt 4x4 grid.
    pub board: Board,

    /// Whose turn it is. `X` opens every round.
    pub current_player: Player,

    /// Unresolved face-up selections, in selection order.
    /// SmallVec keeps the 0..=2 ids inline without heap allocation.
    pub flipped_cards: SmallVec<[CardId; 2]>,

    /// Terminal result, if the round has ended.
    pub winner: Option<RoundResult>,

    /// Session win counters. Zeroed by every deal.
    pub scores: Scores,
}

impl GameState {
    /// Deal a fresh round: shuffled board, `X` to move, no selections,
    /// no winner, zeroed scores.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        Self {
            board: Board::deal(rng),
            current_player: Player::X,
            flipped_cards: SmallVec::new(),
            winner: None,
            scores: Scores::new(),
        }
    }

    /// Has this round reached a terminal state?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}
