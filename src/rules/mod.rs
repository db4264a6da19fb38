//! Outcome types shared by the game and its callers.
//!
//! - `RoundOutcome`: what one `play_round` call did
//! - `RoundRecord`, `WarRecord`: details of a resolved round
//! - `GameResult`: the winner of a finished game

pub mod outcome;

pub use outcome::{GameResult, RoundOutcome, RoundRecord, WarRecord};
