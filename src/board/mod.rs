//! The dealt 4x4 board.
//!
//! A `Board` owns exactly [`CARD_COUNT`] cards in an `im::Vector`, indexed
//! by position (`index = row * 4 + col`). Persistent structure makes
//! snapshots O(1) to clone, so callers can keep a pre-transition copy of
//! the whole state cheaply.
//!
//! Mutation is crate-internal: only the engine flips, hides, and claims
//! cards. External callers observe the board through the accessors.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Symbol};
use crate::core::config::{CARD_COUNT, GRID_SIZE};
use crate::core::player::Player;
use crate::core::rng::GameRng;

/// The 4x4 grid of cards for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vector<Card>,
}

impl Board {
    /// Deal a fresh board: each symbol twice, uniformly shuffled, ids
    /// assigned 0..16 by final position. All cards start face-down,
    /// unmatched, and unowned.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        let mut symbols: Vec<Symbol> = Symbol::ALL
            .iter()
            .flat_map(|&symbol| [symbol, symbol])
            .collect();
        debug_assert_eq!(symbols.len(), CARD_COUNT);

        rng.shuffle(&mut symbols);

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::face_down(CardId::new(index as u8), symbol))
            .collect();

        Self { cards }
    }

    /// Build a board with a fixed symbol placement, for scripted tests.
    #[cfg(test)]
    pub(crate) fn from_layout(symbols: [Symbol; CARD_COUNT]) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::face_down(CardId::new(index as u8), symbol))
            .collect();
        Self { cards }
    }

    /// Number of cards on the board (always [`CARD_COUNT`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; present for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by id. `None` if the id is off the board.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Owner of the cell at a raw board index. `None` while unmatched.
    #[must_use]
    pub fn owner(&self, index: usize) -> Option<Player> {
        self.cards.get(index).and_then(|card| card.owner)
    }

    /// Owner of the cell at grid coordinates.
    #[must_use]
    pub fn owner_at(&self, row: usize, col: usize) -> Option<Player> {
        self.owner(row * GRID_SIZE + col)
    }

    /// Are all 16 cards matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    /// Iterate over the cards in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Turn a card face-up.
    pub(crate) fn flip_up(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.is_flipped = true;
        }
    }

    /// Turn an unmatched card face-down again.
    pub(crate) fn flip_down(&mut self, id: CardId) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.is_flipped = false;
        }
    }

    /// Claim a card for `player`: matched, owned, and permanently face-up.
    pub(crate) fn claim(&mut self, id: CardId, player: Player) {
        if let Some(card) = self.cards.get_mut(id.index()) {
            card.is_flipped = true;
            card.is_matched = true;
            card.owner = Some(player);
        }
    }
}
