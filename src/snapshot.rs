//! Snapshot surface for the persistence collaborator.
//!
//! The whole state serializes to one JSON document (all fields primitive,
//! string, number, boolean, or nested records thereof). Restoring is
//! lenient: corrupt or missing data falls back to a freshly initialized
//! state rather than surfacing an error, so a broken save can never block
//! starting up.

use crate::rule::GameRule;
use crate::state::GameState;

pub fn snapshot_json(state: &GameState) -> String {
    serde_json::to_string(state).unwrap_or_default()
}

pub fn restore_json(json: &str) -> GameState {
    serde_json::from_str(json).unwrap_or_else(|_| GameState::new(GameRule::default()))
}
