//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when manipulating a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A card was requested from an empty deck.
    #[error("Attempted to remove card from an empty deck.")]
    EmptyRemoval,
    /// The deck cannot be split into the requested number of portions.
    #[error("Deck could not be divided into {portions} portions evenly.")]
    UnevenSplit {
        /// Number of portions that was requested.
        portions: usize,
    },
}
