//! A standard 52-card playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that can be shuffled, split into equal
//! piles, and drawn from at either end, along with [`Card`]s that render as
//! small ASCII frames.
//!
//! # Example
//!
//! ```
//! use cardeck::{Card, Deck, Rank, Suit};
//!
//! let mut deck = Deck::seeded(42);
//! assert_eq!(deck.top(), Some(&Card::new(Rank::Ace, Suit::Hearts)));
//!
//! deck.shuffle();
//! let mut piles = deck.split(2).unwrap();
//! assert_eq!(piles[0].len(), 26);
//! assert!(piles[1].remove_top().is_ok());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod rank;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::DeckError;
pub use options::{DeckOptions, SplitRule};
pub use rank::Rank;
