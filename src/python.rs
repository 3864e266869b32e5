//! PyO3 bindings for the presentation/control side. Compiled only with the
//! `python` feature; nothing in the core depends on this module.

use std::collections::HashMap;

use pyo3::prelude::*;

use crate::rule::GameRule;
use crate::score;
use crate::snapshot;
use crate::state::history::{GameRound, PlayerStats};
use crate::state::player::Player;
use crate::state::{GameState, HandResult};
use crate::types::{GamePhase, Wind, WinType};

#[pymethods]
impl GameRule {
    #[new]
    pub fn py_new() -> Self {
        Self::default()
    }

    #[staticmethod]
    #[pyo3(name = "default_hanchan")]
    pub fn py_default_hanchan() -> Self {
        Self::default_hanchan()
    }

    #[staticmethod]
    #[pyo3(name = "default_tonpuusen")]
    pub fn py_default_tonpuusen() -> Self {
        Self::default_tonpuusen()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameRule(initial_score={}, riichi_cost={}, final_round={})",
            self.initial_score, self.riichi_cost, self.final_round
        )
    }
}

#[pymethods]
impl Wind {
    #[pyo3(name = "label")]
    pub fn py_label(&self) -> &'static str {
        self.label()
    }

    fn __hash__(&self) -> isize {
        *self as isize
    }
}

#[pymethods]
impl GameState {
    #[new]
    #[pyo3(signature = (rule=None))]
    pub fn py_new(rule: Option<GameRule>) -> Self {
        Self::new(rule.unwrap_or_default())
    }

    #[getter]
    fn get_players(&self) -> Vec<Player> {
        self.players.to_vec()
    }

    #[getter]
    fn get_current_round(&self) -> u8 {
        self.current_round
    }

    #[getter]
    fn get_honba(&self) -> u32 {
        self.honba
    }

    #[getter]
    fn get_riichi_sticks(&self) -> u32 {
        self.riichi_sticks
    }

    #[getter]
    fn get_carry_over_riichi_sticks(&self) -> u32 {
        self.carry_over_riichi_sticks
    }

    #[getter]
    fn get_history(&self) -> Vec<GameRound> {
        self.history.clone()
    }

    #[getter]
    fn get_game_started(&self) -> bool {
        self.game_started
    }

    #[getter]
    fn get_game_ended(&self) -> bool {
        self.game_ended
    }

    #[getter]
    fn get_phase(&self) -> GamePhase {
        self.phase
    }

    #[getter]
    fn get_pending_result(&self) -> Option<HandResult> {
        self.pending_result.clone()
    }

    #[getter]
    fn get_rule(&self) -> GameRule {
        self.rule
    }

    #[pyo3(name = "dealer_seat")]
    pub fn py_dealer_seat(&self) -> u8 {
        self.dealer_seat()
    }

    #[pyo3(name = "start_new_game")]
    pub fn py_start_new_game(&self) -> Self {
        self.start_new_game()
    }

    #[pyo3(name = "rename_player")]
    pub fn py_rename_player(&self, seat: u8, name: &str) -> Self {
        self.rename_player(seat, name)
    }

    #[pyo3(name = "declare_riichi")]
    pub fn py_declare_riichi(&self, seat: u8) -> Self {
        self.declare_riichi(seat)
    }

    #[pyo3(name = "add_riichi_stick")]
    pub fn py_add_riichi_stick(&self) -> Self {
        self.add_riichi_stick()
    }

    #[pyo3(name = "clear_riichi_sticks")]
    pub fn py_clear_riichi_sticks(&self) -> Self {
        self.clear_riichi_sticks()
    }

    #[allow(clippy::too_many_arguments)]
    #[pyo3(name = "apply_settlement")]
    #[pyo3(signature = (score_changes, description, dealer_won, was_draw=false, winner=None, loser=None, win_type=None))]
    pub fn py_apply_settlement(
        &self,
        score_changes: HashMap<u8, i32>,
        description: &str,
        dealer_won: bool,
        was_draw: bool,
        winner: Option<u8>,
        loser: Option<u8>,
        win_type: Option<WinType>,
    ) -> Self {
        self.apply_settlement(
            &score_changes,
            description,
            dealer_won,
            was_draw,
            winner,
            loser,
            win_type,
        )
    }

    #[pyo3(name = "advance_round")]
    pub fn py_advance_round(&self) -> Self {
        self.advance_round()
    }

    #[pyo3(name = "should_end")]
    pub fn py_should_end(&self) -> bool {
        self.should_end()
    }

    #[pyo3(name = "player_stats")]
    pub fn py_player_stats(&self) -> Vec<PlayerStats> {
        crate::state::history::player_stats(&self.history).to_vec()
    }

    #[pyo3(name = "snapshot_json")]
    pub fn py_snapshot_json(&self) -> String {
        snapshot::snapshot_json(self)
    }

    #[staticmethod]
    #[pyo3(name = "restore_json")]
    pub fn py_restore_json(json: &str) -> Self {
        snapshot::restore_json(json)
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(round={}, honba={}, sticks={}+{}, phase={:?})",
            self.current_round,
            self.honba,
            self.riichi_sticks,
            self.carry_over_riichi_sticks,
            self.phase
        )
    }
}

#[pyfunction]
pub fn tsumo_payments(amount: i32, winner_is_dealer: bool) -> score::TsumoPayment {
    score::tsumo_payments(amount, winner_is_dealer)
}

#[pyfunction]
#[pyo3(signature = (winner, dealer, amount, honba, riichi_sticks, carry_over, rule=None))]
pub fn tsumo_score_changes(
    winner: u8,
    dealer: u8,
    amount: i32,
    honba: u32,
    riichi_sticks: u32,
    carry_over: u32,
    rule: Option<GameRule>,
) -> HashMap<u8, i32> {
    score::tsumo_score_changes(
        winner,
        dealer,
        amount,
        honba,
        riichi_sticks,
        carry_over,
        &rule.unwrap_or_default(),
    )
}

#[pyfunction]
#[allow(clippy::too_many_arguments)]
#[pyo3(signature = (winner, loser, amount, honba, riichi_sticks, carry_over, rule=None))]
pub fn ron_score_changes(
    winner: u8,
    loser: u8,
    amount: i32,
    honba: u32,
    riichi_sticks: u32,
    carry_over: u32,
    rule: Option<GameRule>,
) -> HashMap<u8, i32> {
    score::ron_score_changes(
        winner,
        loser,
        amount,
        honba,
        riichi_sticks,
        carry_over,
        &rule.unwrap_or_default(),
    )
}

#[pyfunction]
#[pyo3(signature = (tenpai_seats, rule=None))]
pub fn draw_score_changes(tenpai_seats: Vec<u8>, rule: Option<GameRule>) -> HashMap<u8, i32> {
    score::draw_score_changes(&tenpai_seats, &rule.unwrap_or_default())
}

#[pyfunction]
pub fn round_name(round: u8) -> String {
    score::round_name(round)
}

#[pymodule]
fn _riichi_scorekeeper(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GameRule>()?;
    m.add_class::<Wind>()?;
    m.add_class::<GamePhase>()?;
    m.add_class::<WinType>()?;
    m.add_class::<Player>()?;
    m.add_class::<GameRound>()?;
    m.add_class::<PlayerStats>()?;
    m.add_class::<HandResult>()?;
    m.add_class::<score::TsumoPayment>()?;
    m.add_class::<GameState>()?;

    m.add_function(wrap_pyfunction!(tsumo_payments, m)?)?;
    m.add_function(wrap_pyfunction!(tsumo_score_changes, m)?)?;
    m.add_function(wrap_pyfunction!(ron_score_changes, m)?)?;
    m.add_function(wrap_pyfunction!(draw_score_changes, m)?)?;
    m.add_function(wrap_pyfunction!(round_name, m)?)?;
    Ok(())
}
