//! Playing cards.
//!
//! A `Card` is an immutable rank/suit pair. Play order only looks at rank:
//! `compare` returns `Ordering::Equal` for the Ace of Spades against the
//! Ace of Hearts, and that tie is what starts a war. Structural equality
//! (`==`, hashing) still distinguishes suits so decks can be checked for
//! duplicates.
//!
//! ## Numbering
//!
//! Cards are numbered 1-52. Number `n` has rank `(n - 1) % 13 + 2` and suit
//! `Suit::ALL[(n - 1) / 13]`, so 1 is the Two of Spades and 14 the Two of
//! Hearts.

use std::cmp::Ordering;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Card rank, 2 (low) through Ace (14, high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks, low to high.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value, 2-14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank from its numeric value (2-14).
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get((value as usize).checked_sub(2)?).copied()
    }

    /// Display symbol: `2`..`10`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a display symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

// Ranks travel as their display symbol ("A", "10"), which is what the
// frontend renders.
impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Rank::from_symbol(&symbol)
            .ok_or_else(|| de::Error::custom(format!("unknown rank symbol {symbol:?}")))
    }
}

/// Card suit. Suits never affect play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in numbering order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Full suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Card from its number (1-52).
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        if !(1..=52).contains(&number) {
            return None;
        }
        let index = number - 1;
        let rank = Rank::from_value(index % 13 + 2)?;
        let suit = Suit::ALL[(index / 13) as usize];
        Some(Self::new(rank, suit))
    }

    /// The card's number (1-52).
    #[must_use]
    pub fn number(self) -> u8 {
        let suit_index = Suit::ALL
            .iter()
            .position(|&s| s == self.suit)
            .unwrap_or_default() as u8;
        suit_index * 13 + (self.rank.value() - 2) + 1
    }

    /// Compare by rank only. See [`compare`].
    #[must_use]
    pub fn compare(&self, other: &Card) -> Ordering {
        compare(self, other)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Play order of two cards: rank only.
///
/// `Equal` for same-rank cards of different suits is the normal tie that
/// starts a war, not an error.
#[must_use]
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_by_rank() {
        let ace = Card::new(Rank::Ace, Suit::Spades);
        let king = Card::new(Rank::King, Suit::Spades);
        let other_ace = Card::new(Rank::Ace, Suit::Clubs);

        assert_eq!(compare(&ace, &king), Ordering::Greater);
        assert_eq!(compare(&king, &ace), Ordering::Less);
        assert_eq!(ace.compare(&other_ace), Ordering::Equal);

        // Tied in play, still different cards
        assert_ne!(ace, other_ace);
    }

    #[test]
    fn test_numbering() {
        assert_eq!(Card::from_number(1), Some(Card::new(Rank::Two, Suit::Spades)));
        assert_eq!(Card::from_number(13), Some(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(Card::from_number(14), Some(Card::new(Rank::Two, Suit::Hearts)));
        assert_eq!(Card::from_number(52), Some(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!(Card::from_number(0), None);
        assert_eq!(Card::from_number(53), None);

        for n in 1..=52 {
            assert_eq!(Card::from_number(n).unwrap().number(), n);
        }
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(10), Some(Rank::Ten));
        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A of Spades");
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
        assert_eq!(Card::new(Rank::Two, Suit::Clubs).to_string(), "2 of Clubs");
    }

    #[test]
    fn test_json_shape() {
        let card = Card::new(Rank::Queen, Suit::Diamonds);
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(json, serde_json::json!({"rank": "Q", "suit": "Diamonds"}));

        let back: Card = serde_json::from_value(json).unwrap();
        assert_eq!(back, card);
    }

    #[test]
    fn test_unknown_rank_rejected() {
        let result: Result<Card, _> =
            serde_json::from_value(serde_json::json!({"rank": "1", "suit": "Spades"}));
        assert!(result.is_err());
    }
}
