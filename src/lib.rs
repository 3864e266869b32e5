//! Scorekeeping engine for four-player riichi mahjong.
//!
//! Tracks scores, round/dealer progression and the riichi-stick pot, and
//! computes score deltas for the three hand outcomes (tsumo, ron,
//! exhaustive draw). Settlement amounts come from the fixed pre-agreed
//! tables in [`score`]; the engine never judges hands or tiles.

#[cfg(feature = "python")]
mod python;
pub mod rule;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod types;

pub use rule::GameRule;
pub use score::{
    draw_score_changes, ron_score_changes, round_name, tsumo_payments, tsumo_score_changes,
    TsumoPayment,
};
pub use snapshot::{restore_json, snapshot_json};
pub use state::history::{player_stats, GameRound, PlayerStats};
pub use state::player::Player;
pub use state::{GameState, HandResult};
pub use types::{GamePhase, ScoreChanges, Wind, WinType};
