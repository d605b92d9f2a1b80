//! Turn controller: selection legality, the locked resolution phase, and
//! the round lifecycle.
//!
//! ## Selection flow
//!
//! A round advances through `select_card` calls. The first legal selection
//! flips a card face-up and waits. The second completes a pair, classifies
//! it by symbol equality, and locks the board: the engine hands back a
//! [`PendingResolution`] ticket and rejects every selection until the
//! caller's scheduler calls [`GameEngine::resolve`] with the ticket's
//! token. The ticket carries the advisory delay (short for a match, longer
//! for a mismatch). The engine itself never sleeps.
//!
//! ## Resolution
//!
//! - **Match**: both cards are claimed for the current player, who keeps
//!   the turn. Win evaluation runs; a completed line ends the round and
//!   credits the winner's score.
//! - **Mismatch**: both cards flip face-down again and the turn passes.
//!
//! ## Stale timers
//!
//! Tokens are engine-unique and never reused. `reset` drops any pending
//! resolution, so a timer that fires after its round was replaced finds no
//! matching token and no-ops. It can never corrupt the new round.
//!
//! ## Rejection policy
//!
//! Illegal selections (round over, board locked, card off the board,
//! already matched, already selected) are silent no-ops, not errors.
//! Callers that want feedback compare state before and after.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

use crate::cards::CardId;
use crate::core::config::EngineConfig;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::{self, RoundResult};

/// Opaque handle for one scheduled resolution.
///
/// Unique for the lifetime of the engine; a token survives at most one
/// successful [`GameEngine::resolve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionToken(u64);

/// How a completed pair resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionKind {
    /// Both cards share a symbol: claim them for the current player.
    Match,
    /// Different symbols: hide both and pass the turn.
    Mismatch,
}

/// A scheduled resolution, returned when a second card is flipped.
///
/// The caller waits `delay`, then hands `token` back to
/// [`GameEngine::resolve`]. The outcome is already decided (symbols do
/// not change while the board is locked), so `kind` and the pair are
/// exposed for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Handle to pass back to `resolve`.
    pub token: ResolutionToken,

    /// The two selected cards, in selection order.
    pub pair: [CardId; 2],

    /// Match or mismatch.
    pub kind: ResolutionKind,

    /// Advisory lock duration before `resolve` should be called.
    pub delay: Duration,
}

/// The game engine: owns the round state and drives every transition.
///
/// ## Example
///
/// ```
/// use memory_toe::{CardId, GameEngine, ResolutionKind};
///
/// let mut engine = GameEngine::new(42);
///
/// // Find the partner of card 0 and select both.
/// let symbol = engine.state().board.get(CardId::new(0)).unwrap().symbol;
/// let partner = engine
///     .state()
///     .board
///     .iter()
///     .find(|c| c.symbol == symbol && c.id != CardId::new(0))
///     .unwrap()
///     .id;
///
/// assert!(engine.select_card(CardId::new(0)).is_none());
/// let pending = engine.select_card(partner).unwrap();
/// assert_eq!(pending.kind, ResolutionKind::Match);
///
/// // The board is locked until the scheduler resolves.
/// assert!(engine.is_locked());
/// assert!(engine.resolve(pending.token));
/// assert!(!engine.is_locked());
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
    rng: GameRng,
    config: EngineConfig,
    pending: Option<PendingResolution>,
    next_token: u64,
}

impl GameEngine {
    /// Create an engine with default timing and deal the first round.
    ///
    /// The seed fixes the whole session's deal sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, EngineConfig::default())
    }

    /// Create an engine with explicit timing configuration.
    #[must_use]
    pub fn with_config(seed: u64, config: EngineConfig) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::deal(&mut rng);
        Self {
            state,
            rng,
            config,
            pending: None,
            next_token: 0,
        }
    }

    /// The current round state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The timing configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Is the board in the locked resolution phase?
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// The resolution currently awaiting its scheduler, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingResolution> {
        self.pending.as_ref()
    }

    /// Select a card.
    ///
    /// Returns `Some(PendingResolution)` when this selection completes a
    /// pair and locks the board; the caller schedules
    /// [`resolve`](Self::resolve) after the ticket's delay. Returns `None`
    /// both for a legal first selection (awaiting the second card) and for
    /// a rejected selection (state unchanged).
    pub fn select_card(&mut self, id: CardId) -> Option<PendingResolution> {
        if self.state.is_over() {
            trace!(card = %id, "selection ignored: round is over");
            return None;
        }
        if self.pending.is_some() {
            trace!(card = %id, "selection ignored: board locked");
            return None;
        }
        match self.state.board.get(id) {
            None => {
                trace!(card = %id, "selection ignored: off the board");
                return None;
            }
            Some(card) if card.is_matched => {
                trace!(card = %id, "selection ignored: already matched");
                return None;
            }
            Some(_) => {}
        }
        if self.state.flipped_cards.contains(&id) {
            trace!(card = %id, "selection ignored: already selected");
            return None;
        }

        self.state.board.flip_up(id);
        self.state.flipped_cards.push(id);
        debug!(card = %id, player = %self.state.current_player, "card flipped");

        if self.state.flipped_cards.len() < 2 {
            return None;
        }

        let pair = [self.state.flipped_cards[0], self.state.flipped_cards[1]];
        let is_match = match (self.state.board.get(pair[0]), self.state.board.get(pair[1])) {
            (Some(first), Some(second)) => first.symbol == second.symbol,
            _ => false,
        };
        let kind = if is_match {
            ResolutionKind::Match
        } else {
            ResolutionKind::Mismatch
        };
        let delay = match kind {
            ResolutionKind::Match => self.config.match_delay,
            ResolutionKind::Mismatch => self.config.mismatch_delay,
        };

        let token = ResolutionToken(self.next_token);
        self.next_token += 1;

        let pending = PendingResolution {
            token,
            pair,
            kind,
            delay,
        };
        self.pending = Some(pending);
        debug!(?kind, token = token.0, "pair complete, board locked");
        Some(pending)
    }

    /// Apply a scheduled resolution.
    ///
    /// Returns `true` if the token matched the pending resolution and it
    /// was applied. A stale token, already resolved or outlived by a
    /// [`reset`](Self::reset), returns `false` and leaves the state
    /// untouched.
    pub fn resolve(&mut self, token: ResolutionToken) -> bool {
        let pending = match self.pending.take() {
            Some(p) if p.token == token => p,
            other => {
                trace!(token = token.0, "stale resolution token ignored");
                self.pending = other;
                return false;
            }
        };

        match pending.kind {
            ResolutionKind::Match => self.apply_match(pending.pair),
            ResolutionKind::Mismatch => self.apply_mismatch(pending.pair),
        }
        true
    }

    /// Discard the round (and any pending resolution) and deal a fresh
    /// one. Scores are zeroed; there is no keep-score mode.
    ///
    /// Legal at any time, including while a resolution is pending; the
    /// outstanding token is invalidated, so a late-firing timer no-ops.
    pub fn reset(&mut self) -> &GameState {
        self.pending = None;
        self.state = GameState::deal(&mut self.rng);
        debug!("board reset, fresh round dealt");
        &self.state
    }

    fn apply_match(&mut self, pair: [CardId; 2]) {
        let player = self.state.current_player;
        for id in pair {
            self.state.board.claim(id, player);
        }
        self.state.flipped_cards.clear();
        debug!(%player, first = %pair[0], second = %pair[1], "pair claimed");

        if let Some(result) = rules::evaluate(&self.state.board) {
            if let RoundResult::Winner(winner) = result {
                self.state.scores.award(winner);
            }
            self.state.winner = Some(result);
            debug!(%result, "round over");
        }
        // The matching player keeps the turn.
    }

    fn apply_mismatch(&mut self, pair: [CardId; 2]) {
        for id in pair {
            self.state.board.flip_down(id);
        }
        self.state.flipped_cards.clear();
        self.state.current_player = self.state.current_player.opponent();
        debug!(next = %self.state.current_player, "mismatch, turn passes");
    }
}
