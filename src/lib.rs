//! # war-engine
//!
//! A two-player engine for the card game War: dealing, round resolution,
//! recursive war escalation, score tracking, and a stable JSON snapshot for
//! a web frontend.
//!
//! ## Design Principles
//!
//! 1. **Transport-Agnostic**: The engine never does I/O. A caller drives it
//!    one round at a time and relays `Game::to_snapshot()`.
//!
//! 2. **Explicit Ownership**: No global game. A `WarSession` (or the caller)
//!    owns exactly one `Game`; mutation needs `&mut`.
//!
//! 3. **Deterministic**: Seeded ChaCha shuffles make every game replayable.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `cards`: Cards, ranks, suits, the deck factory
//! - `zones`: Hands and the in-flight war pile
//! - `rules`: Round and game outcomes
//! - `games`: The War game and its session wrapper
//!
//! ## Example
//!
//! ```
//! use war_engine::core::GameConfig;
//! use war_engine::games::war::WarSession;
//!
//! let mut session = WarSession::start(GameConfig::default().with_seed(1)).unwrap();
//! while session.play_round().continues() {
//!     if session.game().rounds_played() >= 100 {
//!         break;
//!     }
//! }
//! let json = session.snapshot().to_json().unwrap();
//! assert!(json.contains("\"scores\""));
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{DeckError, GameConfig, GameRng, PlayerId, PlayerMap, WarError};

pub use crate::cards::{compare, create_deck, Card, Deck, Rank, Suit};

pub use crate::zones::{Hand, WarPile};

pub use crate::rules::{GameResult, RoundOutcome, RoundRecord, WarRecord};

pub use crate::games::war::{
    Game, GameSnapshot, HandSnapshot, Player, PlayerSnapshot, WarSession, WarStake,
};
