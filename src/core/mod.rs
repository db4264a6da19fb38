//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks shared by cards, zones and the game itself.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerMap, SEAT_COUNT};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_MAX_ROUNDS};
pub use error::{DeckError, WarError};
