//! Card types and fixed-width display formatting.

use core::fmt;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of distinct ranks (Ace through King).
pub const RANK_COUNT: u8 = 13;

/// Rank labels indexed by rank value.
const RANK_LABELS: [&str; RANK_COUNT as usize] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Clubs),
            3 => Some(Self::Diamonds),
            _ => None,
        }
    }

    /// Returns the single-letter form of the suit.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
        }
    }

    /// Returns the filled glyph form of the suit.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Hearts => '\u{2665}',
            Self::Clubs => '\u{2663}',
            Self::Diamonds => '\u{2666}',
        }
    }
}

/// A playing card.
///
/// Two cards form a pair when their ranks are equal; suits never matter for
/// matching, only for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (0 = Ace .. 12 = King).
    pub rank: u8,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Builds a card from its position in a standard deck.
    ///
    /// The rank is `index % 13` and the suit is `index / 13`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below [`DECK_SIZE`].
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match Suit::from_index(index / RANK_COUNT) {
            Some(suit) => Ok(Self {
                rank: index % RANK_COUNT,
                suit,
            }),
            None => Err(CardError::InvalidIndex),
        }
    }

    /// Returns the card's position in a standard deck.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.suit as u8 * RANK_COUNT + self.rank
    }

    /// Returns whether this card and `other` form a rank pair.
    #[must_use]
    pub const fn matches(self, other: Self) -> bool {
        self.rank == other.rank
    }

    /// Returns the rank label (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub fn rank_label(self) -> &'static str {
        RANK_LABELS.get(self.rank as usize).copied().unwrap_or("?")
    }
}

impl fmt::Display for Card {
    /// Formats the card as a fixed 3-character cell: the rank label and the
    /// suit glyph, with a trailing space after single-character rank labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.rank_label();
        let pad = if label.len() == 1 { " " } else { "" };
        write!(f, "{label}{}{pad}", self.suit.glyph())
    }
}
