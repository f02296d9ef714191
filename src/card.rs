//! Card and suit types.

use alloc::string::{String, ToString};
use core::fmt;

use crate::rank::Rank;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
}

impl Suit {
    /// All suits in the order a fresh deck lays them down.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Clubs, Self::Hearts];

    /// Returns the suit symbol (`♠`, `♦`, `♣` or `♥`).
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '\u{2660}',
            Self::Diamonds => '\u{2666}',
            Self::Clubs => '\u{2663}',
            Self::Hearts => '\u{2665}',
        }
    }

    /// Looks up the suit printed as `glyph`.
    #[must_use]
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '\u{2660}' => Some(Self::Spades),
            '\u{2666}' => Some(Self::Diamonds),
            '\u{2663}' => Some(Self::Clubs),
            '\u{2665}' => Some(Self::Hearts),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Renders the card as a six-line ASCII frame, newline included.
    ///
    /// ```
    /// use cardeck::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(
    ///     card.render(),
    ///     "+-----+\n|A    |\n|♠    |\n|    ♠|\n|    A|\n+-----+\n"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = self.rank.glyph();
        let suit = self.suit.glyph();
        f.write_str("+-----+\n")?;
        writeln!(f, "|{rank}    |")?;
        writeln!(f, "|{suit}    |")?;
        writeln!(f, "|    {suit}|")?;
        writeln!(f, "|    {rank}|")?;
        f.write_str("+-----+\n")
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
