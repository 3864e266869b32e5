use std::collections::HashMap;

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-seat score delta map produced by the payment calculators.
/// Seats absent from the map are left untouched when the map is applied.
pub type ScoreChanges = HashMap<u8, i32>;

/// Seat winds. A player's wind is always its seating offset from the
/// current dealer (dealer = East).
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Wind {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl From<u8> for Wind {
    fn from(val: u8) -> Self {
        match val % 4 {
            0 => Wind::East,
            1 => Wind::South,
            2 => Wind::West,
            3 => Wind::North,
            _ => unreachable!(),
        }
    }
}

impl Wind {
    pub fn label(&self) -> &'static str {
        match self {
            Wind::East => "東",
            Wind::South => "南",
            Wind::West => "西",
            Wind::North => "北",
        }
    }
}

/// Scoring loop of a single game. A hand is played (`Playing`), settled
/// (`Scored`), then the transition engine either starts the next hand or
/// terminates (`Ended`).
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing = 0,
    Scored = 1,
    Ended = 2,
}

/// How a hand ended. Recorded on history entries so statistics can be
/// folded back out of the log.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinType {
    Tsumo = 0,
    Ron = 1,
    Draw = 2,
}
