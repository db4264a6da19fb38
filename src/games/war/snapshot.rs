//! The JSON projection of a game.
//!
//! This is the only export surface a transport relays to the frontend, so
//! field names and nesting are fixed:
//!
//! ```json
//! {
//!   "players": {
//!     "player 1": {"name": "Alice", "deck length": 26, "top card": {"rank": "A", "suit": "Spades"}},
//!     "player 2": {"name": "Bob", "deck length": 26, "top card": {"rank": "7", "suit": "Clubs"}}
//!   },
//!   "scores": {"Alice": 0, "Bob": 0},
//!   "last_winner": null,
//!   "rounds_played": 0,
//!   "wars_count": 0,
//!   "current_war_chain": 0,
//!   "longest_war_chain": 0
//! }
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::player::PlayerSnapshot;
use crate::core::{PlayerId, PlayerMap, WarError};

/// Both players, keyed by seat label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayersSnapshot {
    #[serde(rename = "player 1")]
    pub player1: PlayerSnapshot,
    #[serde(rename = "player 2")]
    pub player2: PlayerSnapshot,
}

impl PlayersSnapshot {
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &PlayerSnapshot {
        if player == PlayerId::ONE {
            &self.player1
        } else {
            &self.player2
        }
    }
}

/// Rounds won, keyed by player name, in seat order.
///
/// Names need not be unique. Two players sharing a name share one entry
/// holding the sum of their wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scores {
    entries: Vec<(String, u32)>,
}

impl Scores {
    pub(crate) fn from_seats(names: PlayerMap<&str>, wins: &PlayerMap<u32>) -> Self {
        let mut entries: Vec<(String, u32)> = Vec::with_capacity(2);
        for (player, &name) in names.iter() {
            match entries.iter_mut().find(|(existing, _)| existing == name) {
                Some((_, total)) => *total += wins[player],
                None => entries.push((name.to_string(), wins[player])),
            }
        }
        Self { entries }
    }

    /// Wins recorded under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, wins)| *wins)
    }

    /// Sum over all entries.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, wins)| wins).sum()
    }

    /// `(name, wins)` pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, wins)| (name.as_str(), *wins))
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, wins) in &self.entries {
            map.serialize_entry(name, wins)?;
        }
        map.end()
    }
}

/// Game state as of the last completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub players: PlayersSnapshot,
    pub scores: Scores,
    pub last_winner: Option<String>,
    pub rounds_played: u32,
    pub wars_count: u32,
    pub current_war_chain: u32,
    pub longest_war_chain: u32,
}

impl GameSnapshot {
    /// Compact JSON.
    pub fn to_json(&self) -> Result<String, WarError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON, for terminals and logs.
    pub fn to_json_pretty(&self) -> Result<String, WarError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
