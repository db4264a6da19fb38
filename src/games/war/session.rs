//! A transport session: one game at a time, reset on demand.
//!
//! A web layer keeps exactly one `WarSession` per client session and calls
//! it from its handlers. Every mutating method takes `&mut self`; a server
//! that shares a session between requests must put it behind a lock so at
//! most one `play_round`, `start` or `reset` runs at a time:
//!
//! ```
//! use std::sync::Mutex;
//! use war_engine::core::GameConfig;
//! use war_engine::games::war::WarSession;
//!
//! let session = Mutex::new(WarSession::start(GameConfig::default().with_seed(7)).unwrap());
//!
//! // In a request handler
//! let mut guard = session.lock().unwrap();
//! guard.play_round();
//! let body = guard.snapshot().to_json().unwrap();
//! assert!(body.contains("\"rounds_played\":1"));
//! ```

use tracing::info;

use super::game::Game;
use super::snapshot::GameSnapshot;
use crate::cards::{create_deck, Deck};
use crate::core::{GameConfig, GameRng, WarError};
use crate::rules::{GameResult, RoundOutcome};

/// Owns the current game and the RNG that shuffles each new deck.
#[derive(Clone, Debug)]
pub struct WarSession {
    config: GameConfig,
    rng: GameRng,
    game: Game,
}

impl WarSession {
    /// Start a session with a freshly dealt game.
    pub fn start(config: GameConfig) -> Result<Self, WarError> {
        let mut rng = config.rng();
        let game = Self::new_game(&config, &mut rng)?;
        info!(
            player1 = %config.player1_name,
            player2 = %config.player2_name,
            seed = rng.seed(),
            "session started"
        );
        Ok(Self { config, rng, game })
    }

    /// Discard the current game and deal a new one to the named players.
    ///
    /// Each reset shuffles with a fresh fork of the session RNG, so a seeded
    /// session replays the same sequence of games.
    pub fn reset(
        &mut self,
        player1: impl Into<String>,
        player2: impl Into<String>,
    ) -> Result<(), WarError> {
        self.config.player1_name = player1.into();
        self.config.player2_name = player2.into();
        let mut rng = self.rng.fork();
        self.game = Self::new_game(&self.config, &mut rng)?;
        info!(
            player1 = %self.config.player1_name,
            player2 = %self.config.player2_name,
            "session reset"
        );
        Ok(())
    }

    fn new_game(config: &GameConfig, rng: &mut GameRng) -> Result<Game, WarError> {
        let deck = if config.shuffle {
            Deck::shuffled(rng)
        } else {
            create_deck()
        };
        Game::new(config.player1_name.clone(), config.player2_name.clone(), deck)
    }

    /// Play one round of the current game.
    pub fn play_round(&mut self) -> RoundOutcome {
        self.game.play_round()
    }

    /// Play the current game out, bounded by the configured round limit.
    pub fn play_to_completion(&mut self) -> Option<GameResult> {
        self.game.play_to_completion(self.config.max_rounds)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.to_snapshot()
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
