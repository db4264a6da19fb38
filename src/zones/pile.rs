//! The war pile: cards at stake while a war is being resolved.
//!
//! A pile only exists inside one `play_round` call. It starts with the two
//! tied cards, grows by eight cards per escalation, and is handed whole to
//! the winner. Inline capacity covers the tied pair plus one escalation.

use smallvec::SmallVec;

use crate::cards::Card;

/// Cards in flight during a war, in the order they were laid down.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarPile {
    cards: SmallVec<[Card; 10]>,
}

impl WarPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A pile seeded with the two tied cards, player 1's first.
    #[must_use]
    pub fn seeded(first: Card, second: Card) -> Self {
        let mut pile = Self::new();
        pile.push(first);
        pile.push(second);
        pile
    }

    /// Lay a card on the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the order they were laid down.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl IntoIterator for WarPile {
    type Item = Card;
    type IntoIter = smallvec::IntoIter<[Card; 10]>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_seeded_order() {
        let a = Card::new(Rank::Nine, Suit::Spades);
        let b = Card::new(Rank::Nine, Suit::Hearts);
        let mut pile = WarPile::seeded(a, b);
        let c = Card::new(Rank::Two, Suit::Clubs);
        pile.push(c);

        assert_eq!(pile.len(), 3);
        assert_eq!(pile.cards(), &[a, b, c]);
        assert_eq!(pile.into_iter().collect::<Vec<_>>(), vec![a, b, c]);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut pile = WarPile::new();
        for number in 1..=20 {
            pile.push(Card::from_number(number).unwrap());
        }
        assert_eq!(pile.len(), 20);
        assert_eq!(pile.cards()[19], Card::from_number(20).unwrap());
    }
}
