//! A War player: a name and a hand.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::WarError;
use crate::zones::{Hand, WarPile};

/// Cards a player needs to contribute to a war: three face-down, one face-up.
pub const WAR_STAKE: usize = 4;

/// Face-down cards per war contribution.
const FACE_DOWN: usize = WAR_STAKE - 1;

/// A player and the hand they play from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

/// Read-only view of a player for the snapshot.
///
/// Field names are part of the JSON contract with the frontend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    #[serde(rename = "deck length")]
    pub hand_size: usize,
    #[serde(rename = "top card")]
    pub top_card: Option<Card>,
}

/// A full listing of one player's hand, serialized as `{"deck": [...]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub deck: Vec<Card>,
}

impl HandSnapshot {
    pub fn to_json(&self) -> Result<String, WarError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Four cards staked in one war pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WarStake {
    face_down: [Card; FACE_DOWN],
    face_up: Card,
}

impl WarStake {
    #[must_use]
    pub fn face_down(&self) -> &[Card] {
        &self.face_down
    }

    #[must_use]
    pub fn face_up(&self) -> Card {
        self.face_up
    }
}

impl Player {
    /// A player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }

    /// Play the front card, or `None` with an empty hand.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.pop_front()
    }

    /// Append cards to the back of the hand in the given order.
    ///
    /// A single card is passed as `[card]`.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// The next four cards this player would stake, without moving them.
    ///
    /// `None` with fewer than four cards; the caller treats that as losing
    /// the war.
    #[must_use]
    pub fn war_stake(&self) -> Option<WarStake> {
        let mut cards = self.hand.iter().copied();
        let face_down = [cards.next()?, cards.next()?, cards.next()?];
        let face_up = cards.next()?;
        Some(WarStake { face_down, face_up })
    }

    /// Lay `stake` down: its face-down cards go onto `pile` and leave the
    /// hand along with the face-up card, which is returned for comparison.
    ///
    /// `stake` must come from this player's `war_stake` with no change to
    /// the hand in between.
    pub fn lay_stake(&mut self, stake: WarStake, pile: &mut WarPile) -> Card {
        debug_assert_eq!(self.war_stake(), Some(stake));
        self.hand.drop_front(WAR_STAKE);
        for card in stake.face_down {
            pile.push(card);
        }
        stake.face_up
    }

    /// Move three cards face-down onto `pile` and return the fourth face-up.
    ///
    /// With fewer than four cards nothing moves and `None` is returned.
    pub fn contribute_to_war(&mut self, pile: &mut WarPile) -> Option<Card> {
        let stake = self.war_stake()?;
        Some(self.lay_stake(stake, pile))
    }

    /// Give up the whole hand, leaving it empty.
    pub fn forfeit_hand(&mut self) -> Hand {
        self.hand.take_all()
    }

    /// The whole hand, front first, for a frontend that shows every card.
    #[must_use]
    pub fn deck_snapshot(&self) -> HandSnapshot {
        HandSnapshot {
            deck: self.hand.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            hand_size: self.hand.len(),
            top_card: self.hand.front().copied(),
        }
    }
}
