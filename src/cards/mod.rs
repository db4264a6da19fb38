//! Card system: playing cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: Immutable rank/suit pair, compared by rank only in play
//! - `Rank`, `Suit`: The two halves of a card
//! - `Deck`: Ordered card sequence with validation
//! - `create_deck`: The 52-card factory

pub mod card;
pub mod deck;

pub use card::{compare, Card, Rank, Suit};
pub use deck::{create_deck, Deck, STANDARD_DECK_SIZE};
