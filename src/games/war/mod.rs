//! The card game "War".
//!
//! Two players split a deck and flip their front cards each round; the
//! higher rank takes both. Equal ranks start a war: each player stakes three
//! face-down cards and one face-up, and the higher face-up card takes
//! everything staked. Wars escalate on further ties. A player who cannot
//! stake four cards loses the war and hands over the rest of their cards.
//! The game ends when a player has no card to play.

mod game;
mod player;
mod resolution;
mod session;
mod snapshot;

pub use game::Game;
pub use player::{HandSnapshot, Player, PlayerSnapshot, WarStake, WAR_STAKE};
pub use session::WarSession;
pub use snapshot::{GameSnapshot, PlayersSnapshot, Scores};
