//! Zones: where a dealt card can be.
//!
//! Once dealt, every card is in exactly one place: a player's `Hand` or,
//! for the duration of a war, the shared `WarPile`.
//!
//! ## Key Types
//!
//! - `Hand`: Ordered queue owned by a player
//! - `WarPile`: Cards at stake in an unresolved war

pub mod hand;
pub mod pile;

pub use hand::Hand;
pub use pile::WarPile;
