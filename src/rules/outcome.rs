//! Round and game outcomes.
//!
//! `play_round` returns a `RoundOutcome`: either the game was already over
//! (nothing changed) or one round resolved with exactly one winner.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// The seat holding every card.
    Winner(PlayerId),
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
        }
    }
}

/// How a war ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarRecord {
    /// Contributions laid down before the war was decided.
    pub escalations: u32,

    /// Cards the winner collected, including the forfeiter's hand.
    pub pile_size: usize,

    /// The seat that ran short of cards, if the war ended that way.
    pub forfeited_by: Option<PlayerId>,
}

/// One resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,

    /// The decisive winner.
    pub winner: PlayerId,

    /// The face-up card each seat opened the round with.
    pub played: PlayerMap<Card>,

    /// Present when the opening cards tied.
    pub war: Option<WarRecord>,
}

/// Outcome of `Game::play_round`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A hand was empty before the round; nothing changed.
    GameOver,
    /// The round resolved and the game may continue.
    Resolved(RoundRecord),
}

impl RoundOutcome {
    /// `true` when a round was played.
    #[must_use]
    pub fn continues(&self) -> bool {
        matches!(self, RoundOutcome::Resolved(_))
    }

    /// The round record, if a round was played.
    #[must_use]
    pub fn record(&self) -> Option<&RoundRecord> {
        match self {
            RoundOutcome::Resolved(record) => Some(record),
            RoundOutcome::GameOver => None,
        }
    }
}
