//! The deck container.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DeckError;
use crate::options::DeckOptions;
use crate::rank::Rank;

/// An ordered pile of cards with a top and a bottom.
///
/// [`add`](Deck::add) places cards on the top, [`remove_top`](Deck::remove_top)
/// takes the most recently added card and [`remove_bottom`](Deck::remove_bottom)
/// the least recently added one. Iteration and rendering run from bottom to
/// top.
///
/// Every deck owns a [`ChaCha8Rng`] used by [`shuffle`](Deck::shuffle). Two
/// decks compare equal when they hold the same cards in the same order,
/// regardless of generator state or options.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards, bottom first.
    cards: VecDeque<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a fresh 52-card deck seeded from the operating system.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            canonical_cards(),
            DeckOptions::default(),
            ChaCha8Rng::from_os_rng(),
        )
    }

    /// Creates a fresh 52-card deck whose shuffles are driven by `seed`.
    ///
    /// ```
    /// use cardeck::Deck;
    ///
    /// let mut first = Deck::seeded(42);
    /// let mut second = Deck::seeded(42);
    /// first.shuffle();
    /// second.shuffle();
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_options(DeckOptions::default(), seed)
    }

    /// Creates a fresh 52-card deck with the given options and seed.
    #[must_use]
    pub fn with_options(options: DeckOptions, seed: u64) -> Self {
        Self::from_parts(canonical_cards(), options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Adopts `cards` as a deck, bottom first.
    ///
    /// The cards are not validated; duplicates and short decks are accepted.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, seed: u64) -> Self {
        Self::from_parts(
            cards.into_iter().collect(),
            DeckOptions::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    fn from_parts(cards: VecDeque<Card>, options: DeckOptions, rng: ChaCha8Rng) -> Self {
        log::trace!("created deck of {} cards", cards.len());
        Self {
            cards,
            options,
            rng,
        }
    }

    /// Returns the options this deck was created with.
    #[must_use]
    pub const fn options(&self) -> DeckOptions {
        self.options
    }

    /// Shuffles the deck using its own generator.
    pub fn shuffle(&mut self) {
        let Self { cards, rng, .. } = self;
        cards.make_contiguous().shuffle(rng);
        log::debug!("shuffled {} cards", cards.len());
    }

    /// Shuffles the deck using the supplied generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        log::debug!("shuffled {} cards with caller generator", self.cards.len());
    }

    /// Deals the deck into `portions` equal piles, starting from the bottom.
    ///
    /// Pile 0 receives the first run of cards from the bottom, pile 1 the
    /// next, and so on, each keeping its original order. Under the default
    /// [`SplitRule::EvenPortions`](crate::SplitRule::EvenPortions) the piles
    /// must also hold an even number of cards, so a full deck splits in two
    /// but not in four. The piles inherit this deck's options and a generator
    /// forked from its own.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::UnevenSplit`] if the split rule rejects the
    /// request or the piles cannot be allocated. The deck is left unchanged
    /// in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::{Deck, DeckError};
    ///
    /// let mut deck = Deck::seeded(1);
    /// assert_eq!(deck.split(3), Err(DeckError::UnevenSplit { portions: 3 }));
    ///
    /// let piles = deck.split(2).unwrap();
    /// assert_eq!(piles[0].len(), 26);
    /// assert!(deck.is_empty());
    /// ```
    pub fn split(&mut self, portions: usize) -> Result<Vec<Self>, DeckError> {
        let Some(size) = self
            .options
            .split_rule
            .portion_size(self.cards.len(), portions)
        else {
            log::debug!(
                "refused to split {} cards into {portions} portions",
                self.cards.len()
            );
            return Err(DeckError::UnevenSplit { portions });
        };

        let mut piles = Vec::new();
        if piles.try_reserve_exact(portions).is_err() {
            log::debug!("cannot allocate {portions} piles");
            return Err(DeckError::UnevenSplit { portions });
        }

        for _ in 0..portions {
            let cards: VecDeque<Card> = self.cards.drain(..size).collect();
            let rng = ChaCha8Rng::from_rng(&mut self.rng);
            piles.push(Self::from_parts(cards, self.options, rng));
        }
        log::debug!("split into {portions} portions of {size} cards");
        Ok(piles)
    }

    /// Splits the deck into two halves.
    ///
    /// # Errors
    ///
    /// See [`split`](Deck::split).
    pub fn split_in_half(&mut self) -> Result<Vec<Self>, DeckError> {
        self.split(2)
    }

    /// Places a card on top of the deck.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Places every card of `other` on top of this deck, bottom first.
    ///
    /// `other` is left as it was.
    pub fn add_deck(&mut self, other: &Self) {
        self.cards.extend(other.cards.iter().copied());
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyRemoval`] if the deck is empty.
    pub fn remove_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_back().ok_or_else(empty_removal)
    }

    /// Removes and returns the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyRemoval`] if the deck is empty.
    pub fn remove_bottom(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or_else(empty_removal)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.back()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from bottom to top.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Renders the deck as a `Deck:` header followed by every card, bottom
    /// first.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn empty_removal() -> DeckError {
    log::debug!("tried to remove a card from an empty deck");
    DeckError::EmptyRemoval
}

/// Lays out a factory-fresh pack: the first half of the suits Ace up to King,
/// the second half King down to Ace.
fn canonical_cards() -> VecDeque<Card> {
    let suits = Suit::ALL;
    let (ascending, descending) = suits.split_at(suits.len() / 2);
    let mut cards = VecDeque::with_capacity(DECK_SIZE);

    for &suit in ascending {
        for rank in Rank::ALL {
            cards.push_back(Card::new(rank, suit));
        }
    }
    for &suit in descending {
        for rank in Rank::ALL.into_iter().rev() {
            cards.push_back(Card::new(rank, suit));
        }
    }

    cards
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Deck {}

#[cfg(feature = "std")]
impl From<VecDeque<Card>> for Deck {
    fn from(cards: VecDeque<Card>) -> Self {
        Self::from_parts(cards, DeckOptions::default(), ChaCha8Rng::from_os_rng())
    }
}

#[cfg(feature = "std")]
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(VecDeque::from(cards))
    }
}

#[cfg(feature = "std")]
impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<VecDeque<_>>())
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Deck:\n")?;
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
