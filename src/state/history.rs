#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{ScoreChanges, WinType};

/// One settled hand. Counters are captured as they stood when the hand was
/// settled, before the deltas were applied. Entries are append-only and
/// never edited afterwards.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRound {
    pub round: u8,
    pub honba: u32,
    pub riichi_sticks: u32,
    pub carry_over_riichi_sticks: u32,
    pub score_changes: ScoreChanges,
    pub description: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// Seats that had declared riichi during this hand.
    pub riichi_declarers: Vec<u8>,
    pub winner: Option<u8>,
    pub loser: Option<u8>,
    pub win_type: Option<WinType>,
}

/// Per-seat counters folded out of the history log on demand. Never stored
/// on the game state, so it cannot drift from the log.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub riichi_count: u32,
    pub win_count: u32,
    /// Times this seat dealt into another player's ron.
    pub deal_in_count: u32,
    pub draw_count: u32,
}

/// Fold the history into per-seat statistics. Every seat participates in a
/// drawn hand, so a draw increments all four draw counts.
pub fn player_stats(history: &[GameRound]) -> [PlayerStats; 4] {
    let mut stats = [PlayerStats::default(); 4];
    for entry in history {
        for &seat in &entry.riichi_declarers {
            if let Some(s) = stats.get_mut(seat as usize) {
                s.riichi_count += 1;
            }
        }
        if let Some(winner) = entry.winner {
            if let Some(s) = stats.get_mut(winner as usize) {
                s.win_count += 1;
            }
        }
        if let Some(loser) = entry.loser {
            if let Some(s) = stats.get_mut(loser as usize) {
                s.deal_in_count += 1;
            }
        }
        if entry.win_type == Some(WinType::Draw) {
            for s in &mut stats {
                s.draw_count += 1;
            }
        }
    }
    stats
}
