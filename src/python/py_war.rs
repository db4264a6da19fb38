//! War game bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameConfig, PlayerId, WarError};
use crate::games::war::WarSession;
use crate::rules::GameResult;

fn to_py_err(err: WarError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Python seats are numbered 1 and 2.
fn player_for_seat(seat: u8) -> PyResult<PlayerId> {
    if !(1..=2).contains(&seat) {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "seat must be 1 or 2, got {seat}"
        )));
    }
    Ok(PlayerId::new(seat - 1))
}

/// Python wrapper for a War session.
///
/// Holds exactly one game; `reset` swaps in a freshly dealt one.
#[pyclass(name = "WarGame")]
pub struct PyWarGame {
    session: WarSession,
}

#[pymethods]
impl PyWarGame {
    /// Create a session and deal the first game.
    ///
    /// # Arguments
    /// - player1, player2: Player names (default "Player 1" / "Player 2")
    /// - seed: Shuffle seed; None draws one from OS entropy
    /// - shuffle: Deal a shuffled deck (False deals canonical order)
    /// - max_rounds: Round limit for `play_to_completion`
    #[new]
    #[pyo3(signature = (
        player1 = None,
        player2 = None,
        seed = None,
        shuffle = true,
        max_rounds = None
    ))]
    fn new(
        player1: Option<String>,
        player2: Option<String>,
        seed: Option<u64>,
        shuffle: bool,
        max_rounds: Option<u32>,
    ) -> PyResult<Self> {
        let mut config = GameConfig::default().with_shuffle(shuffle);
        if let Some(name) = player1 {
            config.player1_name = name;
        }
        if let Some(name) = player2 {
            config.player2_name = name;
        }
        config.seed = seed;
        if let Some(limit) = max_rounds {
            config = config.with_max_rounds(limit);
        }

        let session = WarSession::start(config).map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Play one round. Returns False if the game was already over.
    fn play_round(&mut self) -> bool {
        self.session.play_round().continues()
    }

    /// Play until one player holds every card or the round limit is hit.
    ///
    /// Returns the winner's name, or None at the round limit.
    fn play_to_completion(&mut self) -> Option<String> {
        self.session.play_to_completion().map(|result| match result {
            GameResult::Winner(winner) => self.session.game().player(winner).name().to_string(),
        })
    }

    /// Discard the current game and deal a new one.
    fn reset(&mut self, player1: String, player2: String) -> PyResult<()> {
        self.session.reset(player1, player2).map_err(to_py_err)
    }

    /// The game state as a JSON string.
    fn to_json(&self) -> PyResult<String> {
        self.session.snapshot().to_json().map_err(to_py_err)
    }

    /// The game state as a Python dict.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let json = self.to_json()?;
        PyModule::import_bound(py, "json")?.call_method1("loads", (json,))
    }

    /// Check if the game is over.
    #[getter]
    fn is_over(&self) -> bool {
        self.session.game().is_over()
    }

    /// Name of the winner once the game is over.
    #[getter]
    fn winner(&self) -> Option<String> {
        self.session.game().result().map(|result| match result {
            GameResult::Winner(winner) => self.session.game().player(winner).name().to_string(),
        })
    }

    #[getter]
    fn rounds_played(&self) -> u32 {
        self.session.game().rounds_played()
    }

    /// Cards held by a seat (1 or 2).
    fn hand_size(&self, seat: u8) -> PyResult<usize> {
        Ok(self.session.game().player(player_for_seat(seat)?).hand_size())
    }

    /// A seat's whole hand as a dict: `{"deck": [{"rank": ..., "suit": ...}, ...]}`.
    fn hand<'py>(&self, py: Python<'py>, seat: u8) -> PyResult<Bound<'py, PyAny>> {
        let player = self.session.game().player(player_for_seat(seat)?);
        let json = player.deck_snapshot().to_json().map_err(to_py_err)?;
        PyModule::import_bound(py, "json")?.call_method1("loads", (json,))
    }

    fn __repr__(&self) -> String {
        let game = self.session.game();
        let status = if game.is_over() { "over" } else { "ongoing" };
        format!(
            "WarGame({} vs {}, rounds={}, status={})",
            game.player(PlayerId::ONE).name(),
            game.player(PlayerId::TWO).name(),
            game.rounds_played(),
            status
        )
    }
}
