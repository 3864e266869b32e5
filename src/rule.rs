#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

/// Fixed point values and the game-length setting agreed before play.
///
/// Everything here is a table constant, not a derived quantity: the engine
/// never computes han/fu, it only moves the amounts the players agreed on.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRule {
    pub initial_score: i32,
    pub riichi_cost: i32,
    pub riichi_stick_value: i32,
    /// Total honba bonus per counter paid to the winner (300).
    pub honba_bonus_total: i32,
    /// Honba share per paying player (100).
    pub honba_bonus_each: i32,
    /// Tenpai/noten pool split at an exhaustive draw (3000).
    pub draw_bonus_total: i32,
    /// 1-based index of the last scheduled hand. 8 = South 4 for a
    /// hanchan, 4 = East 4 for an east-only game.
    pub final_round: u8,
}

impl Default for GameRule {
    fn default() -> Self {
        Self::default_hanchan()
    }
}

impl GameRule {
    pub fn default_hanchan() -> Self {
        Self {
            initial_score: 25000,
            riichi_cost: 1000,
            riichi_stick_value: 1000,
            honba_bonus_total: 300,
            honba_bonus_each: 100,
            draw_bonus_total: 3000,
            final_round: 8,
        }
    }

    pub fn default_tonpuusen() -> Self {
        Self {
            final_round: 4,
            ..Self::default_hanchan()
        }
    }
}
