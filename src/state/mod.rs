use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "python")]
use pyo3::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rule::GameRule;
use crate::types::{GamePhase, ScoreChanges, Wind, WinType};

pub mod history;
pub mod player;

use history::GameRound;
use player::Player;

/// Outcome of the hand that was just settled, kept until the transition
/// engine consumes it when advancing to the next hand.
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub dealer_won: bool,
    pub description: String,
    pub was_draw: bool,
}

/// The aggregate scorekeeping record: four players, the round counters,
/// the riichi pot, and the append-only settlement history.
///
/// All transitions are copy-on-write: each operation takes `&self` and
/// returns the successor state, so earlier snapshots stay valid. The
/// engine is single-threaded; there is one logical owner at a time.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: [Player; 4],
    /// 1-based hand index: East 1 = 1 .. South 4 = 8.
    pub current_round: u8,
    pub honba: u32,
    /// Sticks declared during the current hand.
    pub riichi_sticks: u32,
    /// Pot carried over from a previous drawn hand.
    pub carry_over_riichi_sticks: u32,
    pub history: Vec<GameRound>,
    pub game_started: bool,
    pub game_ended: bool,
    pub phase: GamePhase,
    pub pending_result: Option<HandResult>,
    pub rule: GameRule,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl GameState {
    pub fn new(rule: GameRule) -> Self {
        let players = [
            Player::new(0, &rule),
            Player::new(1, &rule),
            Player::new(2, &rule),
            Player::new(3, &rule),
        ];
        Self {
            players,
            current_round: 1,
            honba: 0,
            riichi_sticks: 0,
            carry_over_riichi_sticks: 0,
            history: Vec::new(),
            game_started: false,
            game_ended: false,
            phase: GamePhase::Playing,
            pending_result: None,
            rule,
        }
    }

    /// Seat of the current dealer. Exactly one seat carries the flag.
    pub fn dealer_seat(&self) -> u8 {
        self.players
            .iter()
            .position(|p| p.is_dealer)
            .map(|i| i as u8)
            .unwrap_or(0)
    }

    /// Fresh game with the same players: scores back to the initial value,
    /// dealer to seat 0, winds re-seated, flags cleared, history emptied.
    /// Display names survive the reset.
    pub fn start_new_game(&self) -> Self {
        let mut next = self.clone();
        for p in &mut next.players {
            p.reset_for_new_game(&next.rule);
        }
        next.current_round = 1;
        next.honba = 0;
        next.riichi_sticks = 0;
        next.carry_over_riichi_sticks = 0;
        next.history = Vec::new();
        next.game_started = true;
        next.game_ended = false;
        next.phase = GamePhase::Playing;
        next.pending_result = None;
        next
    }

    pub fn rename_player(&self, seat: u8, name: &str) -> Self {
        let mut next = self.clone();
        if let Some(p) = next.players.get_mut(seat as usize) {
            p.name = name.to_string();
        }
        next
    }

    /// Declare riichi for a seat: 1000 points move from the player into the
    /// current-hand pot and the flag is set until the hand settles.
    /// Re-declaring is a no-op. The deduction is deliberately unguarded:
    /// a player at less than 1000 points goes negative.
    pub fn declare_riichi(&self, seat: u8) -> Self {
        let already = self
            .players
            .get(seat as usize)
            .map(|p| p.riichi_declared)
            .unwrap_or(true);
        if already {
            return self.clone();
        }
        let mut next = self.clone();
        if let Some(p) = next.players.get_mut(seat as usize) {
            p.score -= next.rule.riichi_cost;
            p.riichi_declared = true;
        }
        next.riichi_sticks += 1;
        next
    }

    /// Out-of-band pot correction: one stick onto the table.
    pub fn add_riichi_stick(&self) -> Self {
        let mut next = self.clone();
        next.riichi_sticks += 1;
        next
    }

    /// Out-of-band pot correction: clear the current-hand stick count.
    pub fn clear_riichi_sticks(&self) -> Self {
        let mut next = self.clone();
        next.riichi_sticks = 0;
        next
    }

    /// Apply a computed delta map and log the settled hand. The history
    /// entry captures the counters as they stood before application. The
    /// outcome is parked in `pending_result` for `advance_round`.
    #[allow(clippy::too_many_arguments)]
    pub fn apply_settlement(
        &self,
        score_changes: &ScoreChanges,
        description: &str,
        dealer_won: bool,
        was_draw: bool,
        winner: Option<u8>,
        loser: Option<u8>,
        win_type: Option<WinType>,
    ) -> Self {
        let mut next = self.clone();
        for p in &mut next.players {
            p.score += score_changes.get(&p.seat).copied().unwrap_or(0);
        }

        let riichi_declarers: Vec<u8> = self
            .players
            .iter()
            .filter(|p| p.riichi_declared)
            .map(|p| p.seat)
            .collect();

        next.history.push(GameRound {
            round: self.current_round,
            honba: self.honba,
            riichi_sticks: self.riichi_sticks,
            carry_over_riichi_sticks: self.carry_over_riichi_sticks,
            score_changes: score_changes.clone(),
            description: description.to_string(),
            timestamp_ms: now_ms(),
            riichi_declarers,
            winner,
            loser,
            win_type,
        });
        next.phase = GamePhase::Scored;
        next.pending_result = Some(HandResult {
            dealer_won,
            description: description.to_string(),
            was_draw,
        });
        next
    }

    /// Consume the pending result and produce the next hand's starting
    /// state. With no pending result this is a no-op, so a double advance
    /// cannot skip a hand.
    ///
    /// Outcome table:
    /// - draw, dealer tenpai: honba +2, sticks carried, dealer stays.
    /// - draw, dealer noten: honba +2, sticks carried, dealer rotates;
    ///   terminates instead if this was the final round.
    /// - dealer win: honba +1, pot fully collected, dealer stays.
    /// - non-dealer win: honba reset, pot fully collected, dealer rotates;
    ///   terminates instead if this was the final round.
    pub fn advance_round(&self) -> Self {
        let Some(result) = self.pending_result.clone() else {
            return self.clone();
        };

        let mut next = self.clone();
        next.pending_result = None;

        if result.was_draw {
            if result.dealer_won {
                // Dealer keeps the seat; the pot rides to the next hand.
                next.honba += 2;
                next.carry_over_riichi_sticks = self.riichi_sticks;
                next.riichi_sticks = 0;
                next.clear_riichi_flags();
                next.phase = GamePhase::Playing;
            } else if self.is_final_round() {
                next.end_game();
            } else {
                next.rotate_dealer((self.dealer_seat() + 1) % 4);
                next.current_round += 1;
                next.honba += 2;
                next.carry_over_riichi_sticks = self.riichi_sticks;
                next.riichi_sticks = 0;
                next.phase = GamePhase::Playing;
            }
        } else if result.dealer_won {
            // Renchan: the winner collected the whole pot at settlement.
            next.honba += 1;
            next.riichi_sticks = 0;
            next.carry_over_riichi_sticks = 0;
            next.clear_riichi_flags();
            next.phase = GamePhase::Playing;
        } else if self.is_final_round() {
            next.end_game();
        } else {
            next.rotate_dealer((self.dealer_seat() + 1) % 4);
            next.current_round += 1;
            next.honba = 0;
            next.riichi_sticks = 0;
            next.carry_over_riichi_sticks = 0;
            next.phase = GamePhase::Playing;
        }
        next
    }

    /// Independent termination check, e.g. for gating further input: over
    /// when someone is below zero or play has passed the final round.
    pub fn should_end(&self) -> bool {
        let has_negative = self.players.iter().any(|p| p.score < 0);
        has_negative || self.current_round > self.rule.final_round
    }

    fn is_final_round(&self) -> bool {
        self.current_round == self.rule.final_round
    }

    fn end_game(&mut self) {
        self.game_ended = true;
        self.phase = GamePhase::Ended;
    }

    fn clear_riichi_flags(&mut self) {
        for p in &mut self.players {
            p.riichi_declared = false;
        }
    }

    /// Re-seat every wind relative to the new dealer and clear riichi
    /// flags for the fresh hand.
    fn rotate_dealer(&mut self, next_dealer: u8) {
        for (i, p) in self.players.iter_mut().enumerate() {
            p.is_dealer = i as u8 == next_dealer;
            p.wind = Wind::from((i as u8 + 4 - next_dealer) % 4);
            p.riichi_declared = false;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameRule::default())
    }
}
