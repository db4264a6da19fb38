//! Deck creation and validation.
//!
//! `create_deck` returns the 52 cards in canonical numbering order.
//! Shuffling is a separate step driven by the game's seeded RNG.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::{DeckError, GameRng};

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// An ordered sequence of cards, front first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wrap an arbitrary card sequence. Nothing is validated here.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// A standard deck shuffled by `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = create_deck();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards front to back.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Check that this is exactly one standard 52-card deck.
    pub fn validate_standard(&self) -> Result<(), DeckError> {
        if self.cards.len() != STANDARD_DECK_SIZE {
            return Err(DeckError::WrongSize {
                expected: STANDARD_DECK_SIZE,
                actual: self.cards.len(),
            });
        }
        self.check_unique()
    }

    /// Check a partial deck: at least one card, no duplicates.
    ///
    /// Since only 52 distinct cards exist, this also bounds the size.
    pub fn validate_partial(&self) -> Result<(), DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        self.check_unique()
    }

    fn check_unique(&self) -> Result<(), DeckError> {
        let mut seen = FxHashSet::default();
        for &card in &self.cards {
            if !seen.insert(card) {
                return Err(DeckError::Duplicate(card));
            }
        }
        Ok(())
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

/// The 52 cards in canonical order (numbers 1 through 52).
#[must_use]
pub fn create_deck() -> Deck {
    (1..=STANDARD_DECK_SIZE as u8)
        .filter_map(Card::from_number)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_create_deck_complete() {
        let deck = create_deck();
        assert_eq!(deck.len(), STANDARD_DECK_SIZE);

        let unique: FxHashSet<_> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), STANDARD_DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                assert!(unique.contains(&Card::new(rank, suit)));
            }
        }
        assert!(deck.validate_standard().is_ok());
    }

    #[test]
    fn test_create_deck_canonical_order() {
        let deck = create_deck();
        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(create_deck(), deck);
    }

    #[test]
    fn test_shuffled_is_deterministic_permutation() {
        let a = Deck::shuffled(&mut GameRng::new(42));
        let b = Deck::shuffled(&mut GameRng::new(42));
        assert_eq!(a, b);
        assert_ne!(a, create_deck());
        assert!(a.validate_standard().is_ok());
    }

    #[test]
    fn test_wrong_size_rejected() {
        let deck: Deck = create_deck().into_iter().skip(1).collect();
        assert_eq!(
            deck.validate_standard(),
            Err(DeckError::WrongSize {
                expected: 52,
                actual: 51
            })
        );
        assert!(deck.validate_partial().is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut cards = create_deck().cards().to_vec();
        cards[51] = cards[0];
        let deck = Deck::from_cards(cards);

        assert_eq!(deck.validate_standard(), Err(DeckError::Duplicate(deck.cards()[0])));
        assert_eq!(deck.validate_partial(), Err(DeckError::Duplicate(deck.cards()[0])));
    }

    #[test]
    fn test_empty_rejected() {
        let deck = Deck::from_cards(Vec::new());
        assert_eq!(deck.validate_partial(), Err(DeckError::Empty));
    }
}
