//! Game implementations built on the card and zone primitives.

pub mod war;
