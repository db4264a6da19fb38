//! Error types.
//!
//! Running out of cards is never an error: an empty hand ends the game and a
//! short hand forfeits a war. Errors are reserved for caller mistakes.

use thiserror::Error;

use crate::cards::Card;

/// A deck that cannot be dealt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("invalid deck: expected {expected} cards, got {actual}")]
    WrongSize { expected: usize, actual: usize },
    #[error("invalid deck: {0} appears more than once")]
    Duplicate(Card),
    #[error("invalid deck: no cards to deal")]
    Empty,
}

/// Errors surfaced by the engine.
#[derive(Debug, Error)]
pub enum WarError {
    #[error(transparent)]
    InvalidDeck(#[from] DeckError),
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_messages() {
        let err = DeckError::WrongSize {
            expected: 52,
            actual: 51,
        };
        assert_eq!(err.to_string(), "invalid deck: expected 52 cards, got 51");

        let dup = DeckError::Duplicate(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(dup.to_string(), "invalid deck: A of Spades appears more than once");

        let wrapped: WarError = DeckError::Empty.into();
        assert_eq!(wrapped.to_string(), "invalid deck: no cards to deal");
    }
}
