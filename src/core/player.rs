//! Player identities and per-player score storage.
//!
//! ## Player
//!
//! The two fixed sides, `X` and `O`. `X` always opens a round.
//!
//! ## Scores
//!
//! Session win counters backed by a fixed two-slot array for O(1) access.
//! Supports indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides in a round.
///
/// `X` is always the opening player of a fresh round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other side.
    ///
    /// ```
    /// use memory_toe::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Slot index for array-backed per-player storage (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Iterate over both players, X first.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::X, Player::O].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Per-player win counters with O(1) access.
///
/// One counter per side, zeroed at construction. A fresh deal always starts
/// from zeroed scores; there is no carry-over mode.
///
/// ## Example
///
/// ```
/// use memory_toe::{Player, Scores};
///
/// let mut scores = Scores::new();
/// assert_eq!(scores[Player::X], 0);
///
/// scores.award(Player::X);
/// assert_eq!(scores[Player::X], 1);
/// assert_eq!(scores[Player::O], 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    data: [u32; 2],
}

impl Scores {
    /// Create zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: [0; 2] }
    }

    /// Credit one round win to `player`.
    pub fn award(&mut self, player: Player) {
        self.data[player.index()] += 1;
    }

    /// Get a player's win count.
    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        self.data[player.index()]
    }

    /// Iterate over (Player, count) pairs, X first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, u32)> + '_ {
        Player::all().map(|p| (p, self.data[p.index()]))
    }
}

impl Index<Player> for Scores {
    type Output = u32;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl IndexMut<Player> for Scores {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
