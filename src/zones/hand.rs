//! A player's hand: an ordered queue of cards.
//!
//! The front is the next card played; won cards join at the back. Backed by
//! a persistent `im::Vector` so cloning a game for inspection or simulation
//! is O(1), and both ends are cheap to touch.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Ordered queue of cards, front first.
///
/// ```
/// use war_engine::cards::{Card, Rank, Suit};
/// use war_engine::zones::Hand;
///
/// let mut hand = Hand::new();
/// hand.extend([
///     Card::new(Rank::Two, Suit::Spades),
///     Card::new(Rank::Ace, Suit::Hearts),
/// ]);
///
/// assert_eq!(hand.pop_front(), Some(Card::new(Rank::Two, Suit::Spades)));
/// assert_eq!(hand.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card to be played.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Remove and return the next card.
    pub fn pop_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Discard up to `count` cards from the front.
    pub fn drop_front(&mut self, count: usize) {
        let count = count.min(self.cards.len());
        self.cards = self.cards.split_off(count);
    }

    /// Append a card at the back.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append cards at the back, keeping their order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Empty the hand, returning everything it held in order.
    pub fn take_all(&mut self) -> Hand {
        std::mem::take(self)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = im::vector::ConsumingIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
