#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rule::GameRule;
use crate::types::Wind;

/// One of the four seats at the table. The seat index is the stable
/// identity; name, wind and flags change over the course of a game.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: u8,
    pub name: String,
    pub score: i32,
    pub is_dealer: bool,
    pub wind: Wind,
    pub riichi_declared: bool,
}

impl Player {
    pub fn new(seat: u8, rule: &GameRule) -> Self {
        let wind = Wind::from(seat);
        Self {
            seat,
            // Default names follow the initial seating: 東家, 南家, ...
            name: format!("{}家", wind.label()),
            score: rule.initial_score,
            is_dealer: seat == 0,
            wind,
            riichi_declared: false,
        }
    }

    /// Back to the seat's initial-game state, keeping the display name.
    pub fn reset_for_new_game(&mut self, rule: &GameRule) {
        self.score = rule.initial_score;
        self.is_dealer = self.seat == 0;
        self.wind = Wind::from(self.seat);
        self.riichi_declared = false;
    }
}
