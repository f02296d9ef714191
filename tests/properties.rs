//! Property-based tests for deck operations.

use std::collections::HashMap;

use cardeck::{Card, Deck, DeckError, Rank, Suit};
use proptest::prelude::*;

fn card_strategy() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

// Duplicates allowed: decks adopt whatever they are given.
fn cards_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), 0..=60)
}

fn counts(cards: impl IntoIterator<Item = Card>) -> HashMap<Card, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn add_then_remove_top_round_trips(
        cards in cards_strategy(),
        extra in card_strategy(),
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::from_cards(cards.clone(), seed);
        deck.add(extra);
        prop_assert_eq!(deck.remove_top(), Ok(extra));
        prop_assert_eq!(deck.len(), cards.len());
        prop_assert_eq!(deck, Deck::from_cards(cards, seed));
    }

    #[test]
    fn shuffle_preserves_multiset(cards in cards_strategy(), seed in any::<u64>()) {
        let mut deck = Deck::from_cards(cards.clone(), seed);
        deck.shuffle();
        prop_assert_eq!(deck.len(), cards.len());
        prop_assert_eq!(counts(deck.iter().copied()), counts(cards));
    }

    #[test]
    fn split_concatenation_is_bottom_prefix(
        cards in cards_strategy(),
        portions in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::from_cards(cards.clone(), seed);
        let len = cards.len();
        let size = len / portions;

        match deck.split(portions) {
            Ok(piles) => {
                prop_assert!(len % portions == 0 && size % 2 == 0);
                prop_assert_eq!(piles.len(), portions);
                prop_assert!(piles.iter().all(|pile| pile.len() == size));

                let joined: Vec<Card> = piles.iter().flat_map(|pile| pile.iter().copied()).collect();
                prop_assert_eq!(&joined[..], &cards[..portions * size]);
                prop_assert!(deck.is_empty());
            }
            Err(err) => {
                prop_assert!(len % portions != 0 || size % 2 != 0);
                prop_assert_eq!(err, DeckError::UnevenSplit { portions });
                prop_assert_eq!(deck.iter().copied().collect::<Vec<_>>(), cards);
            }
        }
    }

    #[test]
    fn removals_from_both_ends_drain_in_order(cards in cards_strategy(), seed in any::<u64>()) {
        let mut deck = Deck::from_cards(cards.clone(), seed);
        let mut low = 0;
        let mut high = cards.len();
        while low < high {
            prop_assert_eq!(deck.remove_bottom(), Ok(cards[low]));
            low += 1;
            if low < high {
                high -= 1;
                prop_assert_eq!(deck.remove_top(), Ok(cards[high]));
            }
        }
        prop_assert_eq!(deck.remove_top(), Err(DeckError::EmptyRemoval));
        prop_assert_eq!(deck.remove_bottom(), Err(DeckError::EmptyRemoval));
    }
}
