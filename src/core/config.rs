//! Game configuration.
//!
//! A session is configured at startup with a `GameConfig`:
//! - Player names for both seats
//! - Shuffle seed (or entropy)
//! - Round limit for running a game to completion
//!
//! Every field has a default, so a partial JSON document is a valid config.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Default round limit. War can cycle forever with unlucky card orders.
pub const DEFAULT_MAX_ROUNDS: u32 = 10_000;

/// Configuration for a War session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name of the first seat.
    pub player1_name: String,

    /// Name of the second seat. Need not differ from the first.
    pub player2_name: String,

    /// Shuffle seed. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Shuffle the deck before dealing. Unshuffled decks deal in canonical order.
    pub shuffle: bool,

    /// Maximum rounds when playing a game to completion.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player1_name: "Player 1".to_string(),
            player2_name: "Player 2".to_string(),
            seed: None,
            shuffle: true,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl GameConfig {
    /// Set both player names.
    #[must_use]
    pub fn with_players(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player1_name = player1.into();
        self.player2_name = player2.into();
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable shuffling.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Build the RNG this config describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player1_name, "Player 1");
        assert_eq!(config.player2_name, "Player 2");
        assert_eq!(config.seed, None);
        assert!(config.shuffle);
        assert_eq!(config.max_rounds, DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_players("Alice", "Bob")
            .with_seed(7)
            .with_shuffle(false)
            .with_max_rounds(50);

        assert_eq!(config.player1_name, "Alice");
        assert_eq!(config.player2_name, "Bob");
        assert_eq!(config.seed, Some(7));
        assert!(!config.shuffle);
        assert_eq!(config.max_rounds, 50);
    }

    #[test]
    fn test_seeded_rng() {
        let config = GameConfig::default().with_seed(99);
        assert_eq!(config.rng().seed(), 99);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"player1_name": "Alice", "seed": 3}"#).unwrap();

        assert_eq!(config.player1_name, "Alice");
        assert_eq!(config.player2_name, "Player 2");
        assert_eq!(config.seed, Some(3));
        assert!(config.shuffle);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
