//! Deck configuration options.

/// Condition a deck must meet before it can be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum SplitRule {
    /// The cards must divide evenly and every portion must hold an even
    /// number of cards. A 52-card deck therefore splits into 2, 13 or 26
    /// portions but not into 4.
    #[default]
    EvenPortions,
    /// The cards only need to divide evenly.
    Divisible,
}

impl SplitRule {
    /// Returns the portion size when `len` cards may be split `portions` ways.
    #[must_use]
    pub const fn portion_size(self, len: usize, portions: usize) -> Option<usize> {
        if portions == 0 || len % portions != 0 {
            return None;
        }
        let size = len / portions;
        match self {
            Self::EvenPortions if size % 2 != 0 => None,
            Self::EvenPortions | Self::Divisible => Some(size),
        }
    }
}

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::{DeckOptions, SplitRule};
///
/// let options = DeckOptions::default().with_split_rule(SplitRule::Divisible);
/// assert_eq!(options.split_rule, SplitRule::Divisible);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeckOptions {
    /// Rule applied by [`Deck::split`](crate::Deck::split).
    pub split_rule: SplitRule,
}

impl DeckOptions {
    /// Sets the split rule.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, DeckOptions, SplitRule};
    ///
    /// let options = DeckOptions::default().with_split_rule(SplitRule::Divisible);
    /// let mut deck = Deck::with_options(options, 7);
    /// assert_eq!(deck.split(13).map(|piles| piles.len()), Ok(13));
    /// ```
    #[must_use]
    pub const fn with_split_rule(mut self, split_rule: SplitRule) -> Self {
        self.split_rule = split_rule;
        self
    }
}
