//! Python bindings for the War engine.
//!
//! The web transport for the game is written in Python; it keeps one
//! `WarGame` per session and relays `snapshot()` as the response body.
//!
//! # Quick Start
//!
//! ```python
//! import war_engine
//!
//! game = war_engine.WarGame("Alice", "Bob", seed=42)
//! while game.play_round():
//!     pass
//! print(game.snapshot()["scores"])
//!
//! game.reset("Carol", "Dave")
//! ```

use pyo3::prelude::*;

mod py_war;

pub use py_war::*;

/// war_engine: a two-player War card game engine.
#[pymodule]
fn war_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWarGame>()?;
    Ok(())
}
