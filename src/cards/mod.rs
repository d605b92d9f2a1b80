//! Cards: the symbol alphabet, position-derived ids, and card state.
//!
//! A round is played with a fixed pool: each of the 8 symbols appears on
//! exactly two cards, 16 cards total. Card ids are positional: id 0 is the
//! top-left cell, id 15 the bottom-right, `id = row * 4 + col`.

use serde::{Deserialize, Serialize};

use crate::core::config::{CARD_COUNT, GRID_SIZE};
use crate::core::player::Player;

/// The 8-glyph symbol alphabet. Each symbol appears on exactly two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Flame,
    Bolt,
    Gem,
    Clover,
    Apple,
    Rainbow,
    Moon,
    Star,
}

impl Symbol {
    /// All symbols, in a fixed order.
    pub const ALL: [Symbol; 8] = [
        Symbol::Flame,
        Symbol::Bolt,
        Symbol::Gem,
        Symbol::Clover,
        Symbol::Apple,
        Symbol::Rainbow,
        Symbol::Moon,
        Symbol::Star,
    ];

    /// The display glyph for this symbol.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Flame => "\u{1F525}",
            Symbol::Bolt => "\u{26A1}",
            Symbol::Gem => "\u{1F48E}",
            Symbol::Clover => "\u{1F340}",
            Symbol::Apple => "\u{1F34E}",
            Symbol::Rainbow => "\u{1F308}",
            Symbol::Moon => "\u{1F319}",
            Symbol::Star => "\u{2B50}",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Position-derived card identifier, `0..16`.
///
/// The id doubles as the board index: `id = row * 4 + col`.
///
/// ## Example
///
/// ```
/// use memory_toe::CardId;
///
/// let id = CardId::from_grid(2, 3);
/// assert_eq!(id.raw(), 11);
/// assert_eq!(id.row(), 2);
/// assert_eq!(id.col(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card ID from a raw board index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Create a card ID from grid coordinates.
    #[must_use]
    pub const fn from_grid(row: usize, col: usize) -> Self {
        Self((row * GRID_SIZE + col) as u8)
    }

    /// Get the raw board index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Board index as `usize`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Grid row of this card.
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / GRID_SIZE
    }

    /// Grid column of this card.
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % GRID_SIZE
    }

    /// Does this id address a cell on the board?
    #[must_use]
    pub const fn on_board(self) -> bool {
        (self.0 as usize) < CARD_COUNT
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
///
/// ## State invariants
///
/// - `owner.is_some()` if and only if `is_matched`
/// - `is_flipped` is true while the card is face-up awaiting resolution,
///   or permanently once matched
/// - `symbol` never changes; matched cards stay on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position-derived id (also the board index).
    pub id: CardId,

    /// The glyph on the card face.
    pub symbol: Symbol,

    /// Is the card currently face-up?
    pub is_flipped: bool,

    /// Has the card been claimed as part of a matched pair?
    pub is_matched: bool,

    /// The player whose territory this card is. `None` until matched.
    pub owner: Option<Player>,
}

impl Card {
    /// Create a face-down, unmatched, unowned card.
    #[must_use]
    pub const fn face_down(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            is_flipped: false,
            is_matched: false,
            owner: None,
        }
    }
}
